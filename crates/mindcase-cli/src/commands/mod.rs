//! Command implementations for the mindcase CLI.

mod import;

pub use import::execute as import;
