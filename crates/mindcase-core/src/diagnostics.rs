//! Accumulated, human-readable problems of one import run.
//!
//! Each [`Diagnostic`] renders as a self-contained clause ending in `"; "`, so the
//! rendered log can be shown as-is. An empty log means the run had no problems.

use crate::messages::{MessageCatalog, MessageKey};
use serde::Serialize;

const CLAUSE_END: &str = "; ";

/// One problem found during an import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub key: MessageKey,
    pub message: String,
}

impl Diagnostic {
    /// A case title that is not `<attributes>:<name>`.
    pub fn incorrect_format(catalog: &dyn MessageCatalog, title: &str) -> Self {
        Self {
            key: MessageKey::IncorrectFormat,
            message: format!(
                "{}【 {title} 】{}{CLAUSE_END}",
                catalog.get(MessageKey::CaseName),
                catalog.get(MessageKey::IncorrectFormat)
            ),
        }
    }

    pub fn depth_exceeded(catalog: &dyn MessageCatalog, max_depth: usize) -> Self {
        let text = catalog
            .get(MessageKey::NodeDepthExceeded)
            .replace("{max}", &max_depth.to_string());
        Self {
            key: MessageKey::NodeDepthExceeded,
            message: format!("{text}{CLAUSE_END}"),
        }
    }

    pub fn empty_module_name(catalog: &dyn MessageCatalog) -> Self {
        Self::plain(catalog, MessageKey::EmptyModuleName)
    }

    pub fn method_type_incompatible(catalog: &dyn MessageCatalog) -> Self {
        Self::plain(catalog, MessageKey::MethodTypeIncompatible)
    }

    pub fn already_exists(catalog: &dyn MessageCatalog, name: &str) -> Self {
        Self {
            key: MessageKey::AlreadyExists,
            message: format!(
                "{}: {name}{CLAUSE_END}",
                catalog.get(MessageKey::AlreadyExists)
            ),
        }
    }

    /// Rejection of a case node found at the top level. This message replaces the
    /// whole log, so it carries no clause terminator.
    pub fn create_module_fail(catalog: &dyn MessageCatalog, case_name: &str) -> Self {
        Self {
            key: MessageKey::CreateModuleFail,
            message: format!(
                "{case_name}: {}",
                catalog.get(MessageKey::CreateModuleFail)
            ),
        }
    }

    /// Generic failure reported when the run aborts.
    pub fn parse_failure(catalog: &dyn MessageCatalog) -> Self {
        Self {
            key: MessageKey::ParseFailure,
            message: catalog.get(MessageKey::ParseFailure).into_owned(),
        }
    }

    fn plain(catalog: &dyn MessageCatalog, key: MessageKey) -> Self {
        Self {
            key,
            message: format!("{}{CLAUSE_END}", catalog.get(key)),
        }
    }
}

/// Ordered buffer of diagnostics for one run.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticLog {
    entries: Vec<Diagnostic>,
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    pub fn append(&mut self, diagnostics: &mut Vec<Diagnostic>) {
        self.entries.append(diagnostics);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Number of entries with the given key.
    pub fn count(&self, key: MessageKey) -> usize {
        self.entries.iter().filter(|d| d.key == key).count()
    }

    /// Concatenate all clauses; empty when nothing went wrong.
    pub fn render(&self) -> String {
        self.entries.iter().map(|d| d.message.as_str()).collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
