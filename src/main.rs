//! Deskctl: thin CLI wrappers over external desktop utilities.
//!
//! This is the main entry point for the `deskctl` CLI. It parses
//! arguments, loads the config, dispatches to the appropriate command
//! handler, and handles errors with proper exit codes.

mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod invoke;

use cli::Cli;
use commands::RunOptions;
use config::Config;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let config = match Config::resolve(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::from(err.exit_code() as u8);
        }
    };

    let opts = RunOptions {
        dry_run: cli.dry_run,
        json: cli.json,
    };

    match commands::dispatch(cli.command, &config, &opts) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
