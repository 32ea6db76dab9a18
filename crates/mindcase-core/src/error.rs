//! Error types and handling for mindcase-core operations.
//!
//! Per-node problems found while importing an outline (a malformed case title,
//! a path that is too deep, a duplicate case) are *not* errors: they become
//! entries in the run's [`DiagnosticLog`](crate::DiagnosticLog) and the walk
//! continues. The [`Error`] type covers the failures that abort a whole import
//! or happen outside of one.
//!
//! ## Error Categories
//!
//! - **I/O Errors**: reading outline, config and store files
//! - **Parse Errors**: outline extraction and malformed input
//! - **Structure Errors**: outline shapes that cannot be imported at all
//! - **Storage Errors**: failures reported by an existence checker
//! - **Configuration Errors**: invalid settings or config files
//!
//! ```rust
//! use mindcase_core::{Error, Result};
//!
//! fn handle(result: Result<()>) {
//!     match result {
//!         Err(e) if e.is_recoverable() => println!("temporary failure: {e}"),
//!         Err(e) => println!("[{}] {e}", e.category()),
//!         Ok(()) => println!("ok"),
//!     }
//! }
//! # handle(Ok(()));
//! ```

use thiserror::Error;

/// The main error type for mindcase-core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed.
    ///
    /// Covers reading outline exports, store snapshots and config files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input could not be turned into an outline tree.
    ///
    /// ## Common Causes
    ///
    /// - The file is not the JSON shape an extractor expects
    /// - The document has no root topic
    #[error("Parse error: {0}")]
    Parse(String),

    /// The outline is well-formed but cannot be imported.
    ///
    /// Raised when a case node sits directly under the document root, where
    /// there is no enclosing module to attach it to.
    #[error("Structure error: {0}")]
    Structure(String),

    /// The persisted store could not answer an existence query.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration is invalid or inaccessible.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic error for uncategorized failures.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl Error {
    /// Check if the error might go away if the operation is retried.
    ///
    /// Only interrupted or timed-out I/O and storage failures qualify. The
    /// importer itself never retries; this is a hint for callers.
    ///
    /// ```rust
    /// use mindcase_core::Error;
    /// use std::io;
    ///
    /// assert!(Error::Io(io::Error::new(io::ErrorKind::TimedOut, "slow disk")).is_recoverable());
    /// assert!(Error::Storage("connection reset".into()).is_recoverable());
    /// assert!(!Error::Parse("not json".into()).is_recoverable());
    /// ```
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Storage(_) => true,
            Self::Io(e) => matches!(
                e.kind(),
                std::io::ErrorKind::TimedOut | std::io::ErrorKind::Interrupted
            ),
            _ => false,
        }
    }

    /// Get the error category as a string identifier.
    ///
    /// Useful as a structured logging field:
    ///
    /// ```rust
    /// use mindcase_core::Error;
    ///
    /// let err = Error::Structure("case at top level".into());
    /// tracing::warn!(category = err.category(), "{err}");
    /// assert_eq!(err.category(), "structure");
    /// ```
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Parse(_) => "parse",
            Self::Structure(_) => "structure",
            Self::Storage(_) => "storage",
            Self::Config(_) => "config",
            Self::Serialization(_) => "serialization",
            Self::Other(_) => "other",
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used, clippy::unnecessary_wraps)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display_formatting() {
        // Given: Message-carrying variants
        let cases = vec![
            (Error::Parse("bad root".into()), "Parse error: bad root"),
            (Error::Structure("top".into()), "Structure error: top"),
            (Error::Storage("down".into()), "Storage error: down"),
            (Error::Config("missing".into()), "Configuration error: missing"),
            (Error::Serialization("eof".into()), "Serialization error: eof"),
            (Error::Other("plain".into()), "plain"),
        ];

        for (error, expected) in cases {
            // When/Then: Display renders the prefixed message
            assert_eq!(error.to_string(), expected);
        }
    }

    #[test]
    fn test_error_from_io_error() {
        let error: Error = io::Error::new(io::ErrorKind::NotFound, "outline.json").into();
        match error {
            Error::Io(inner) => assert_eq!(inner.kind(), io::ErrorKind::NotFound),
            other => panic!("Expected IO error variant, got {other:?}"),
        }
    }

    #[test]
    fn test_error_from_serde_json() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = err.into();
        assert_eq!(error.category(), "serialization");
    }

    #[test]
    fn test_error_categories() {
        let error_categories = vec![
            (Error::Io(io::Error::other("test")), "io"),
            (Error::Parse("test".into()), "parse"),
            (Error::Structure("test".into()), "structure"),
            (Error::Storage("test".into()), "storage"),
            (Error::Config("test".into()), "config"),
            (Error::Serialization("test".into()), "serialization"),
            (Error::Other("test".into()), "other"),
        ];

        for (error, expected) in error_categories {
            assert_eq!(error.category(), expected, "Wrong category for {error:?}");
        }
    }

    #[test]
    fn test_recoverability() {
        assert!(Error::Io(io::Error::new(io::ErrorKind::Interrupted, "eintr")).is_recoverable());
        assert!(!Error::Io(io::Error::new(io::ErrorKind::NotFound, "gone")).is_recoverable());
        assert!(!Error::Structure("top".into()).is_recoverable());
        assert!(!Error::Config("bad".into()).is_recoverable());
    }
}
