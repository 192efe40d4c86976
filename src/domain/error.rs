use thiserror::Error;

use super::user::UserValidationError;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(#[from] UserValidationError),

    #[error("Invalid ID format: {message}")]
    InvalidId { message: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

impl DomainError {
    pub fn invalid_id(message: impl Into<String>) -> Self {
        Self::InvalidId {
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// The underlying validation failure, if this error carries one
    pub fn as_validation(&self) -> Option<&UserValidationError> {
        match self {
            Self::Validation(e) => Some(e),
            _ => None,
        }
    }
}
