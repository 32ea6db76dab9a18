//! In-memory snapshot of persisted cases, usable as an [`ExistenceChecker`].
//!
//! A host application backed by a database implements [`ExistenceChecker`]
//! directly. `CaseStore` covers tools and tests that only have an export of
//! existing cases, as a JSON list:
//!
//! ```json
//! [
//!   { "name": "Valid login", "nodePath": "/Login" },
//!   { "name": "Logout", "nodePath": "/Login/Session" }
//! ]
//! ```

use crate::builder::normalize_node_path;
use crate::dedup::ExistenceChecker;
use crate::types::CaseRecord;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Identity of a persisted case within one project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredCase {
    pub name: String,
    pub node_path: String,
}

impl StoredCase {
    pub fn new(name: impl Into<String>, node_path: &str) -> Self {
        Self {
            name: name.into(),
            node_path: normalize_node_path(node_path),
        }
    }
}

impl From<&CaseRecord> for StoredCase {
    fn from(record: &CaseRecord) -> Self {
        Self::new(record.name.clone(), &record.node_path)
    }
}

/// Cases of one project known to be persisted.
#[derive(Debug, Clone, Default)]
pub struct CaseStore {
    project_id: String,
    cases: HashSet<StoredCase>,
}

impl CaseStore {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            cases: HashSet::new(),
        }
    }

    /// Parse a JSON list of stored cases.
    pub fn from_json(project_id: impl Into<String>, json: &str) -> Result<Self> {
        let entries: Vec<StoredCase> = serde_json::from_str(json)?;
        let mut store = Self::new(project_id);
        for entry in entries {
            store.insert(StoredCase::new(entry.name, &entry.node_path));
        }
        Ok(store)
    }

    /// Read a JSON list of stored cases from disk.
    pub fn load(project_id: impl Into<String>, path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Storage(format!("Failed to read case store {}: {e}", path.display()))
        })?;
        Self::from_json(project_id, &content)
    }

    pub fn insert(&mut self, case: StoredCase) -> bool {
        self.cases.insert(case)
    }

    /// Record accepted cases as persisted.
    pub fn extend<'a>(&mut self, records: impl IntoIterator<Item = &'a CaseRecord>) {
        self.cases.extend(records.into_iter().map(StoredCase::from));
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Names of all stored cases, for pre-populating an import's name set.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.cases.iter().map(|c| c.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

impl ExistenceChecker for CaseStore {
    fn exists(&self, candidate: &CaseRecord) -> Result<bool> {
        Ok(candidate.project_id == self.project_id
            && self.cases.contains(&StoredCase::from(candidate)))
    }
}
