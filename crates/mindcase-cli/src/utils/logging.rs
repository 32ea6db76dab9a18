//! Logging initialization and configuration.
//!
//! This module handles setting up the tracing subscriber and color control
//! based on CLI flags and environment variables.

use anyhow::Result;
use colored::control as color_control;
use is_terminal::IsTerminal;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::cli::{Cli, Commands};

/// Initialize the logging subsystem based on CLI flags.
///
/// Sets the log level based on verbosity flags and suppresses warnings
/// when JSON output is requested.
///
/// # Errors
///
/// Returns an error if the global tracing subscriber cannot be set.
pub fn initialize_logging(cli: &Cli) -> Result<()> {
    let machine_output = match &cli.command {
        Commands::Import(args) => args.format.is_machine_readable(),
    };

    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet || machine_output {
        Level::ERROR
    } else {
        Level::WARN
    };

    let env_no_color = std::env::var_os("NO_COLOR").is_some();
    let color_disabled = cli.no_color || env_no_color;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(ansi_logs(color_disabled, std::io::stderr().is_terminal()))
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Color control: off when requested, when NO_COLOR is set, for JSON, or when piped
    let piped = !std::io::stdout().is_terminal();
    if color_disabled || machine_output || piped {
        color_control::set_override(false);
    }
    Ok(())
}

/// Whether log lines on stderr carry ANSI styling.
const fn ansi_logs(color_disabled: bool, stderr_is_terminal: bool) -> bool {
    !color_disabled && stderr_is_terminal
}
