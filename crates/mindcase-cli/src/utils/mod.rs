//! Utility modules for the mindcase CLI.

pub mod logging;

pub use logging::initialize_logging;
