//! # Output Formatting
//!
//! Accepted records are printed to stdout in one of two formats:
//!
//! - **Text**: one block per case with its steps, followed by a summary line
//! - **JSON**: the records as a pretty-printed array, for scripts
//!
//! Diagnostics are never part of stdout; see [`print_diagnostics`].

mod json;
mod text;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use json::print_records_json;
pub use text::{print_diagnostics, print_records_text};

/// Output format for accepted records.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable formatted text.
    #[default]
    Text,
    /// JSON array for machine consumption.
    Json,
}

impl OutputFormat {
    #[must_use]
    pub const fn is_machine_readable(self) -> bool {
        matches!(self, Self::Json)
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}
