//! User validation utilities

use std::fmt;

use serde::Serialize;
use thiserror::Error;

pub const MIN_NAME_LENGTH: usize = 3;
pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_EMAIL_LENGTH: usize = 255;

/// A validated field of a [`User`](super::User)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserField {
    FirstName,
    LastName,
    Email,
}

impl UserField {
    /// Parameter name reported to callers, e.g. `firstName`
    pub fn param_name(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for UserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Email => "Email",
        };
        f.write_str(label)
    }
}

/// Coarse classification of a validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    /// A required argument was absent
    NullArgument,
    /// An argument was present but broke a format or length rule
    InvalidArgument,
}

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    #[error("{0} is required")]
    Missing(UserField),

    #[error("{0} cannot be empty")]
    Empty(UserField),

    #[error("{field} is too short. Minimum length is {min} characters")]
    TooShort { field: UserField, min: usize },

    #[error("{field} exceeds maximum length of {max} characters")]
    TooLong { field: UserField, max: usize },

    #[error("Email must contain an '@' character")]
    MissingAtSign,
}

impl UserValidationError {
    /// The field that failed validation
    pub fn field(&self) -> UserField {
        match self {
            Self::Missing(field) | Self::Empty(field) => *field,
            Self::TooShort { field, .. } | Self::TooLong { field, .. } => *field,
            Self::MissingAtSign => UserField::Email,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Missing(_) => ErrorKind::NullArgument,
            _ => ErrorKind::InvalidArgument,
        }
    }

    /// Shorthand for `self.field().param_name()`
    pub fn param_name(&self) -> &'static str {
        self.field().param_name()
    }
}

/// Length in UTF-16 code units, so characters outside the BMP count twice
fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validate a first/last name pair
///
/// Rules are checked in a fixed order and the first failure wins:
/// - Both names must be present
/// - Neither may be empty or whitespace only
/// - Minimum 3 characters (first name checked before last name)
/// - Maximum 100 characters (first name checked before last name)
///
/// On success the present values are returned.
pub fn validate_names<'a>(
    first_name: Option<&'a str>,
    last_name: Option<&'a str>,
) -> Result<(&'a str, &'a str), UserValidationError> {
    let first_name = first_name.ok_or(UserValidationError::Missing(UserField::FirstName))?;
    let last_name = last_name.ok_or(UserValidationError::Missing(UserField::LastName))?;

    if is_blank(first_name) {
        return Err(UserValidationError::Empty(UserField::FirstName));
    }

    if is_blank(last_name) {
        return Err(UserValidationError::Empty(UserField::LastName));
    }

    let first_len = utf16_len(first_name);
    let last_len = utf16_len(last_name);

    if first_len < MIN_NAME_LENGTH {
        return Err(UserValidationError::TooShort {
            field: UserField::FirstName,
            min: MIN_NAME_LENGTH,
        });
    }

    if last_len < MIN_NAME_LENGTH {
        return Err(UserValidationError::TooShort {
            field: UserField::LastName,
            min: MIN_NAME_LENGTH,
        });
    }

    if first_len > MAX_NAME_LENGTH {
        return Err(UserValidationError::TooLong {
            field: UserField::FirstName,
            max: MAX_NAME_LENGTH,
        });
    }

    if last_len > MAX_NAME_LENGTH {
        return Err(UserValidationError::TooLong {
            field: UserField::LastName,
            max: MAX_NAME_LENGTH,
        });
    }

    Ok((first_name, last_name))
}

/// Validate an email address
///
/// Rules:
/// - Must be present
/// - Cannot be empty or whitespace only
/// - Must contain `@`
/// - Maximum 255 characters
pub fn validate_email(email: Option<&str>) -> Result<&str, UserValidationError> {
    let email = email.ok_or(UserValidationError::Missing(UserField::Email))?;

    if is_blank(email) {
        return Err(UserValidationError::Empty(UserField::Email));
    }

    if !email.contains('@') {
        return Err(UserValidationError::MissingAtSign);
    }

    if utf16_len(email) > MAX_EMAIL_LENGTH {
        return Err(UserValidationError::TooLong {
            field: UserField::Email,
            max: MAX_EMAIL_LENGTH,
        });
    }

    Ok(email)
}
