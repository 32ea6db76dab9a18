//! Library entry point for the mindcase CLI.

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;
mod output;
mod utils;

pub use cli::{Cli, Commands, ImportArgs};
pub use output::OutputFormat;

use crate::utils::initialize_logging;

/// Parse arguments, run the selected command and map its outcome to an exit code.
///
/// # Errors
///
/// Returns an error if logging cannot be initialized or the command fails
/// before producing an import result.
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    initialize_logging(&cli)?;

    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<ExitCode> {
    match &cli.command {
        Commands::Import(args) => {
            let clean = commands::import(args)?;
            Ok(if clean {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        },
    }
}
