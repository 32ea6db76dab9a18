//! mindcase CLI - import mind-map outlines as test cases
//!
//! Exit status: 0 when every case was accepted, 1 when the import produced
//! diagnostics, 2 when the command itself failed.

use std::process::ExitCode;

fn main() -> ExitCode {
    match mindcase_cli::run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(2)
        },
    }
}
