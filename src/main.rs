//! joppin: run commands under a distributed lock stored in DynamoDB.
//!
//! This is the main entry point for the `joppin` CLI. It parses arguments,
//! dispatches to the appropriate command handler, and handles errors with
//! proper exit codes.

mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod locks;
pub mod logging;
pub mod store;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init();

    match commands::dispatch(cli) {
        Ok(code) => ExitCode::from(exit_byte(code)),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(exit_byte(err.exit_code()))
        }
    }
}

/// Narrow an exit code to what the process can report.
fn exit_byte(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(exit_codes::COMMAND_FAILURE as u8)
}
