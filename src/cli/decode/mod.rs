//! Decode command - validates a user given as a JSON document

use std::process::ExitCode;

use clap::Args;

use crate::domain::user::{User, UserDraft};
use crate::domain::DomainError;

#[derive(Debug, Args)]
pub struct DecodeArgs {
    /// JSON object with `firstName`, `lastName` and `email`; null or
    /// missing fields count as absent
    pub json: String,
}

/// Run the decode command
pub fn run(args: DecodeArgs) -> anyhow::Result<ExitCode> {
    super::report(decode_user(&args.json))
}

fn decode_user(json: &str) -> Result<User, DomainError> {
    let draft: UserDraft =
        serde_json::from_str(json).map_err(|e| DomainError::invalid_input(e.to_string()))?;

    Ok(User::try_from(draft)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::ErrorKind;

    #[test]
    fn test_decode_valid_user() {
        let user = decode_user(
            r#"{"firstName": "Matti", "lastName": "Meikalainen", "email": "matti@example.com"}"#,
        )
        .unwrap();

        assert_eq!(user.first_name(), "Matti");
        assert_eq!(user.email(), "matti@example.com");
    }

    #[test]
    fn test_decode_null_field() {
        let err = decode_user(
            r#"{"firstName": null, "lastName": "Meikalainen", "email": "matti@example.com"}"#,
        )
        .unwrap_err();

        let validation = err.as_validation().unwrap();
        assert_eq!(validation.kind(), ErrorKind::NullArgument);
        assert_eq!(validation.param_name(), "firstName");
    }

    #[test]
    fn test_decode_invalid_email() {
        let err = decode_user(
            r#"{"firstName": "Matti", "lastName": "Meikalainen", "email": "invalid-email"}"#,
        )
        .unwrap_err();

        assert_eq!(err.as_validation().map(|e| e.param_name()), Some("email"));
    }

    #[test]
    fn test_decode_malformed_json() {
        let err = decode_user("{not json").unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput { .. }));
    }

    #[test]
    fn test_decode_wrong_field_type() {
        let err = decode_user(r#"{"firstName": 42}"#).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput { .. }));
    }
}
