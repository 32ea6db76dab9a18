//! # CLI Structure and Argument Parsing
//!
//! `mindcase` follows the command-subcommand pattern with a few global flags:
//!
//! ```bash
//! # Import an outline and list the accepted cases
//! mindcase import shop.json --project-id shop --maintainer alice
//!
//! # Machine-readable records, checked against cases that already exist
//! mindcase import shop.json --project-id shop --maintainer alice \
//!     --existing stored.json --format json
//! ```
//!
//! Accepted records go to stdout. Import diagnostics go to stderr, and the
//! process exits with status 1 whenever there are any.

use clap::{Args, Parser, Subcommand};
use mindcase_core::Locale;
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Main CLI structure for the `mindcase` command
#[derive(Parser, Clone, Debug)]
#[command(name = "mindcase")]
#[command(version)]
#[command(about = "mindcase - turn mind-map outlines into test cases", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Import an outline and print the accepted test cases
    Import(ImportArgs),
}

#[derive(Args, Clone, Debug)]
pub struct ImportArgs {
    /// Outline file, as JSON
    #[arg(value_name = "OUTLINE")]
    pub outline: PathBuf,

    /// Project the imported cases belong to
    #[arg(long, env = "MINDCASE_PROJECT_ID")]
    pub project_id: String,

    /// Maintainer recorded on every imported case
    #[arg(long, env = "MINDCASE_MAINTAINER")]
    pub maintainer: String,

    /// File listing case names already known to the project, one per line
    #[arg(long, value_name = "FILE")]
    pub known_names: Option<PathBuf>,

    /// JSON list of stored cases (`name`, `nodePath`); their names count as known
    #[arg(long, value_name = "FILE")]
    pub existing: Option<PathBuf>,

    /// Config file (defaults to the platform config directory)
    #[arg(long, value_name = "FILE", env = "MINDCASE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Diagnostic language, overriding the config file
    #[arg(long, value_name = "LOCALE")]
    pub locale: Option<Locale>,

    /// Output format for accepted records
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}
