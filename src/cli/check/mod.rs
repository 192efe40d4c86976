//! Check command - validates a user given as individual flags

use std::process::ExitCode;

use clap::Args;

use crate::domain::user::{User, UserId};
use crate::domain::DomainError;

/// Leaving a field flag out is treated as an absent value, not an empty one.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Existing user ID (UUID); a new one is generated when omitted
    #[arg(long)]
    pub id: Option<String>,

    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,
}

/// Run the check command
pub fn run(args: CheckArgs) -> anyhow::Result<ExitCode> {
    super::report(build_user(&args))
}

fn build_user(args: &CheckArgs) -> Result<User, DomainError> {
    let id = match &args.id {
        Some(raw) => raw
            .parse::<UserId>()
            .map_err(|e| DomainError::invalid_id(format!("'{}': {}", raw, e)))?,
        None => UserId::new(),
    };

    let user = User::with_id(
        id,
        args.first_name.as_deref(),
        args.last_name.as_deref(),
        args.email.as_deref(),
    )?;

    Ok(user)
}
