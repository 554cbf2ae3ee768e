//! poster-gen: scenario-driven marketing poster generator.
//!
//! This is the main entry point for the `poster-gen` CLI. It parses
//! arguments, sets up logging, runs the command, and maps errors to exit
//! codes.

mod cli;
mod collect;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
mod generate;
pub mod layout;
pub mod prompt;
pub mod request;
mod telemetry;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    telemetry::init_tracing(cli.verbose);

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
