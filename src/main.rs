use std::process::ExitCode;

use clap::Parser;
use user_domain::cli::{self, Cli, Command};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    cli::init();

    match cli.command {
        Command::Check(args) => cli::check::run(args),
        Command::Decode(args) => cli::decode::run(args),
    }
}
