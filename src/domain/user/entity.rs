//! User entity and related types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use super::validation::{validate_email, validate_names, UserValidationError};

/// User identifier - opaque UUID assigned once, never changed by the entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a fresh random identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identifier assigned elsewhere
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(s).map(Self)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unvalidated input for creating a user
///
/// Every field may be absent. Converting into a [`User`] runs the full
/// validation, so an absent field surfaces as a
/// [`Missing`](UserValidationError::Missing) error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserDraft {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

/// Serialized shape of a stored user, validated again on the way in
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: UserId,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// User entity
///
/// Fields are private; the only way to change them is through
/// [`update_basic_info`](Self::update_basic_info) and
/// [`update_email`](Self::update_email), both of which validate first and
/// leave the user untouched when validation fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "UserRecord")]
pub struct User {
    id: UserId,
    first_name: String,
    last_name: String,
    email: String,
}

impl User {
    /// Create a new user with a freshly generated identifier
    ///
    /// Names are validated before the email, so the first failing rule of
    /// [`update_basic_info`](Self::update_basic_info) wins over any email
    /// problem.
    pub fn new<'a>(
        first_name: impl Into<Option<&'a str>>,
        last_name: impl Into<Option<&'a str>>,
        email: impl Into<Option<&'a str>>,
    ) -> Result<Self, UserValidationError> {
        Self::with_id(UserId::new(), first_name, last_name, email)
    }

    /// Create a user under an identifier assigned elsewhere
    pub fn with_id<'a>(
        id: UserId,
        first_name: impl Into<Option<&'a str>>,
        last_name: impl Into<Option<&'a str>>,
        email: impl Into<Option<&'a str>>,
    ) -> Result<Self, UserValidationError> {
        let mut user = Self {
            id,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
        };

        user.update_basic_info(first_name, last_name)?;
        user.update_email(email)?;

        Ok(user)
    }

    // Getters

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    // Mutators

    /// Replace both names, or neither if either one is invalid
    pub fn update_basic_info<'a>(
        &mut self,
        first_name: impl Into<Option<&'a str>>,
        last_name: impl Into<Option<&'a str>>,
    ) -> Result<(), UserValidationError> {
        let (first_name, last_name) = validate_names(first_name.into(), last_name.into())
            .inspect_err(|e| self.log_rejection(e))?;

        self.first_name = first_name.to_owned();
        self.last_name = last_name.to_owned();
        Ok(())
    }

    /// Replace the email address if it is valid
    pub fn update_email<'a>(
        &mut self,
        email: impl Into<Option<&'a str>>,
    ) -> Result<(), UserValidationError> {
        let email = validate_email(email.into()).inspect_err(|e| self.log_rejection(e))?;

        self.email = email.to_owned();
        Ok(())
    }

    fn log_rejection(&self, error: &UserValidationError) {
        debug!(
            user_id = %self.id,
            field = error.param_name(),
            kind = ?error.kind(),
            "Rejected user update: {}",
            error
        );
    }
}

impl TryFrom<UserDraft> for User {
    type Error = UserValidationError;

    fn try_from(draft: UserDraft) -> Result<Self, Self::Error> {
        Self::new(
            draft.first_name.as_deref(),
            draft.last_name.as_deref(),
            draft.email.as_deref(),
        )
    }
}

impl TryFrom<UserRecord> for User {
    type Error = UserValidationError;

    fn try_from(record: UserRecord) -> Result<Self, Self::Error> {
        Self::with_id(
            record.id,
            record.first_name.as_deref(),
            record.last_name.as_deref(),
            record.email.as_deref(),
        )
    }
}
