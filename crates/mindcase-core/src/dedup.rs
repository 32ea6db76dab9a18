//! Duplicate detection within a batch and against persisted cases.

use crate::Result;
use crate::diagnostics::Diagnostic;
use crate::messages::MessageCatalog;
use crate::types::{CaseRecord, ComparisonKey};
use std::collections::HashSet;

/// Answers whether an equivalent case is already persisted.
///
/// Called at most once per repeated case name in a run, synchronously.
pub trait ExistenceChecker {
    fn exists(&self, candidate: &CaseRecord) -> Result<bool>;
}

impl<F> ExistenceChecker for F
where
    F: Fn(&CaseRecord) -> Result<bool>,
{
    fn exists(&self, candidate: &CaseRecord) -> Result<bool> {
        self(candidate)
    }
}

/// Checker for imports with no backing store.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStore;

impl ExistenceChecker for NoStore {
    fn exists(&self, _candidate: &CaseRecord) -> Result<bool> {
        Ok(false)
    }
}

/// Comparison keys of every case node visited in one run.
#[derive(Debug, Default)]
pub struct DedupEngine {
    seen: HashSet<ComparisonKey>,
    visited: usize,
}

impl DedupEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if an identical case node was already visited, accepted or not.
    pub fn is_batch_duplicate(&self, key: &ComparisonKey) -> bool {
        self.seen.contains(key)
    }

    /// Remember a visited case node.
    pub fn record(&mut self, key: ComparisonKey) {
        self.seen.insert(key);
        self.visited += 1;
    }

    /// Check `candidate`'s name against the run-wide name set.
    ///
    /// A new name is added to `known_names` and passes. A repeated name passes
    /// unless `checker` finds it in storage.
    pub fn check_name(
        &self,
        candidate: &CaseRecord,
        known_names: &mut HashSet<String>,
        checker: &dyn ExistenceChecker,
        catalog: &dyn MessageCatalog,
    ) -> Result<Option<Diagnostic>> {
        if known_names.contains(&candidate.name) {
            if checker.exists(candidate)? {
                tracing::debug!(name = %candidate.name, "case already persisted");
                return Ok(Some(Diagnostic::already_exists(catalog, &candidate.name)));
            }
        } else {
            known_names.insert(candidate.name.clone());
        }
        Ok(None)
    }

    /// Number of case nodes visited.
    pub const fn visited(&self) -> usize {
        self.visited
    }

    pub fn clear(&mut self) {
        self.seen.clear();
        self.visited = 0;
    }
}
