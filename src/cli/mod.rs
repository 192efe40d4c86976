//! CLI module for the user domain
//!
//! Provides subcommands that run input through the user validation rules:
//! - `check`: build a user from individual flags
//! - `decode`: build a user from a JSON document

pub mod check;
pub mod decode;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::domain::user::{ErrorKind, User};
use crate::domain::DomainError;
use crate::infrastructure::logging;

/// User domain - validate user records against the entity rules
#[derive(Debug, Parser)]
#[command(name = "user-domain")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a user given as individual fields
    Check(check::CheckArgs),

    /// Validate a user given as a JSON document
    Decode(decode::DecodeArgs),
}

/// Load `.env` and configuration, then install logging
pub fn init() {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);
}

/// Why a user was refused, as printed to stdout
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Rejection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<&'static str>,
    pub message: String,
}

impl From<&DomainError> for Rejection {
    fn from(error: &DomainError) -> Self {
        match error.as_validation() {
            Some(e) => Self {
                kind: Some(e.kind()),
                param: Some(e.param_name()),
                message: e.to_string(),
            },
            None => Self {
                kind: None,
                param: None,
                message: error.to_string(),
            },
        }
    }
}

/// Print the outcome of a command and map it to an exit code
pub(crate) fn report(result: Result<User, DomainError>) -> anyhow::Result<ExitCode> {
    match result {
        Ok(user) => {
            info!(user_id = %user.id(), "User accepted");
            println!("{}", serde_json::to_string_pretty(&user)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            let rejection = Rejection::from(&error);
            warn!(
                param = rejection.param.unwrap_or("-"),
                "User rejected: {}",
                rejection.message
            );
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({ "error": rejection }))?
            );
            Ok(ExitCode::FAILURE)
        }
    }
}
