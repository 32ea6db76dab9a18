//! # mindcase-core
//!
//! Core functionality for mindcase - turning mind-map outlines into validated
//! test case records.
//!
//! An outline is a tree of titled nodes. Title markers decide what each node
//! is: nodes tagged `tc` are test cases, everything above them is a module
//! that contributes a segment to the case's node path. Under a case, `pc:`
//! and `rc:` children hold the prerequisite and remark and every other child
//! is an ordered step.
//!
//! ## Architecture
//!
//! - **Tags** ([`tag`]): case-insensitive title markers and node roles
//! - **Builder** ([`builder`]): case title parsing and child partitioning
//! - **Validation** ([`validator`]): depth, empty-module and method checks
//! - **Deduplication** ([`dedup`]): in-batch duplicates and stored name collisions
//! - **Importer** ([`importer`]): the depth-first walk and per-run state
//! - **Configuration** ([`config`]): TOML settings for limits, keywords and language
//!
//! ## Quick Start
//!
//! ```rust
//! use mindcase_core::{CaseImporter, JsonOutlineExtractor, NoStore};
//! use std::collections::HashSet;
//!
//! let json = r#"{"rootTopic":{"title":"Shop","children":{"attached":[
//!     {"title":"Login","children":{"attached":[
//!         {"title":"P1-功能测试:tc:Valid login","children":{"attached":[
//!             {"title":"Enter credentials","children":{"attached":[{"title":"Success"}]}},
//!             {"title":"Click submit"}
//!         ]}}
//!     ]}}
//! ]}}}"#;
//!
//! let mut known_names = HashSet::new();
//! let mut importer = CaseImporter::new("proj-1", "alice", &mut known_names, &NoStore);
//! let diagnostics = importer.import_bytes(&JsonOutlineExtractor, json.as_bytes());
//!
//! assert_eq!(diagnostics, "");
//! let record = &importer.records()[0];
//! assert_eq!(record.priority, "P1");
//! assert_eq!(record.node_path, "/Login");
//! assert_eq!(record.steps.len(), 2);
//! ```
//!
//! ## Error Handling
//!
//! Problems with individual case nodes are reported as text in the returned
//! diagnostics and never stop the walk. Operations that can fail outright
//! (loading config, reading a case store, an existence check) return
//! [`Result<T, Error>`].

/// Case title parsing and candidate construction
pub mod builder;
/// Import configuration
pub mod config;
/// Duplicate detection
pub mod dedup;
/// Accumulated import diagnostics
pub mod diagnostics;
/// Error types and result aliases
pub mod error;
/// Outline walking and run state
pub mod importer;
/// Diagnostic message catalogs
pub mod messages;
/// Outline extraction from JSON
pub mod outline;
/// In-memory store of persisted cases
pub mod store;
/// Title markers and node roles
pub mod tag;
/// Core data types
pub mod types;
/// Candidate record validation
pub mod validator;

// Re-export commonly used types
pub use builder::{CaseBuilder, CaseTitle, normalize_node_path, split_case_title};
pub use config::{
    DefaultsConfig, ImportConfig, KeywordsConfig, MAX_NODE_DEPTH, MessagesConfig,
    ValidationConfig,
};
pub use dedup::{DedupEngine, ExistenceChecker, NoStore};
pub use diagnostics::{Diagnostic, DiagnosticLog};
pub use error::{Error, Result};
pub use importer::{CaseImporter, ImportReport};
pub use messages::{BuiltinCatalog, Locale, MessageCatalog, MessageKey};
pub use outline::{JsonOutlineExtractor, OutlineExtractor};
pub use store::{CaseStore, StoredCase};
pub use tag::{NodeRole, Tag, matches_tag, strip_tag};
pub use types::*;
pub use validator::Validator;
