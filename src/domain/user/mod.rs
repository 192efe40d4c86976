//! User domain
//!
//! This module provides the validated user entity, its identifier, and the
//! validation rules that guard every change to it.

mod entity;
mod validation;

pub use entity::{User, UserDraft, UserId, UserRecord};
pub use validation::{
    validate_email, validate_names, ErrorKind, UserField, UserValidationError, MAX_EMAIL_LENGTH,
    MAX_NAME_LENGTH, MIN_NAME_LENGTH,
};
