//! User domain
//!
//! A validated user entity with:
//! - First name, last name and email guarded by fixed validation rules
//! - An embedded, externally assignable identifier
//! - A small CLI for running records through the rules

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::user::{User, UserDraft, UserId, UserValidationError};
pub use domain::DomainError;
