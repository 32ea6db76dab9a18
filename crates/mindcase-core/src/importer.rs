//! Outline walking and per-run state.
//!
//! A [`CaseImporter`] owns everything one import produces: the accepted
//! records, the comparison keys of every case node it visited and the
//! diagnostic log. The set of already-known case names belongs to the caller
//! and is borrowed mutably for the lifetime of the importer, so two imports
//! can never share one set at the same time.
//!
//! ```rust
//! use mindcase_core::{CaseImporter, NoStore, OutlineNode};
//! use std::collections::HashSet;
//!
//! let outline = OutlineNode::new("Shop").with_children(vec![
//!     OutlineNode::new("Login").with_children(vec![
//!         OutlineNode::new("P1-功能测试:tc:Valid login")
//!             .with_children(vec![OutlineNode::new("Enter credentials")]),
//!     ]),
//! ]);
//!
//! let mut names = HashSet::new();
//! let mut importer = CaseImporter::new("proj-1", "alice", &mut names, &NoStore);
//! let diagnostics = importer.import(&outline);
//!
//! assert!(diagnostics.is_empty());
//! assert_eq!(importer.records()[0].node_path, "/Login");
//! importer.reset();
//! ```

use crate::builder::CaseBuilder;
use crate::config::ImportConfig;
use crate::dedup::{DedupEngine, ExistenceChecker};
use crate::diagnostics::{Diagnostic, DiagnosticLog};
use crate::messages::{BuiltinCatalog, MessageCatalog, MessageKey};
use crate::outline::OutlineExtractor;
use crate::tag::{CASE_TAG, NodeRole};
use crate::types::{CaseRecord, OutlineNode};
use crate::validator::Validator;
use crate::{Error, Result};
use serde::Serialize;
use std::collections::HashSet;

/// Summary of a finished run.
#[derive(Debug, Clone, Serialize)]
pub struct ImportReport {
    pub accepted: usize,
    pub visited: usize,
    pub diagnostics: Vec<Diagnostic>,
    pub message: String,
}

impl ImportReport {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn rejected(&self) -> usize {
        self.visited.saturating_sub(self.accepted)
    }
}

/// Converts one outline into test case records.
pub struct CaseImporter<'a> {
    project_id: String,
    maintainer: String,
    config: ImportConfig,
    catalog: Box<dyn MessageCatalog + 'a>,
    custom_catalog: bool,
    checker: &'a dyn ExistenceChecker,
    known_names: &'a mut HashSet<String>,
    records: Vec<CaseRecord>,
    dedup: DedupEngine,
    log: DiagnosticLog,
}

impl<'a> CaseImporter<'a> {
    pub fn new(
        project_id: impl Into<String>,
        maintainer: impl Into<String>,
        known_names: &'a mut HashSet<String>,
        checker: &'a dyn ExistenceChecker,
    ) -> Self {
        let config = ImportConfig::default();
        Self {
            project_id: project_id.into(),
            maintainer: maintainer.into(),
            catalog: Box::new(BuiltinCatalog::new(config.messages.locale)),
            custom_catalog: false,
            config,
            checker,
            known_names,
            records: Vec::new(),
            dedup: DedupEngine::new(),
            log: DiagnosticLog::new(),
        }
    }

    /// Use `config`. Also selects the built-in message language unless a
    /// custom catalog was set.
    #[must_use]
    pub fn with_config(mut self, config: ImportConfig) -> Self {
        if !self.custom_catalog {
            self.catalog = Box::new(BuiltinCatalog::new(config.messages.locale));
        }
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_catalog(mut self, catalog: Box<dyn MessageCatalog + 'a>) -> Self {
        self.catalog = catalog;
        self.custom_catalog = true;
        self
    }

    /// Walk `root` and collect records.
    ///
    /// Returns the rendered diagnostics: empty on full success. Per-node
    /// problems do not stop the walk, so records may have been accepted even
    /// when the result is not empty. A case node directly under `root`, or a
    /// failing existence check, aborts the run: every record and diagnostic of
    /// the run is discarded and only the abort message remains.
    pub fn import(&mut self, root: &OutlineNode) -> String {
        match self.try_import(root) {
            Ok(()) => {
                tracing::info!(
                    accepted = self.records.len(),
                    visited = self.dedup.visited(),
                    problems = self.log.len(),
                    "outline import finished"
                );
            },
            Err(Error::Structure(message)) => {
                tracing::warn!("outline rejected: {message}");
                self.abort(Diagnostic {
                    key: MessageKey::CreateModuleFail,
                    message,
                });
            },
            Err(e) => {
                tracing::warn!(category = e.category(), "outline import aborted: {e}");
                let failure = Diagnostic::parse_failure(&*self.catalog);
                self.abort(failure);
            },
        }
        self.log.render()
    }

    /// Extract an outline from `bytes` and import it.
    ///
    /// An extraction failure aborts the run with the generic parse-failure message.
    pub fn import_bytes(&mut self, extractor: &dyn OutlineExtractor, bytes: &[u8]) -> String {
        match extractor.extract(bytes) {
            Ok(root) => self.import(&root),
            Err(e) => {
                tracing::warn!(category = e.category(), "outline extraction failed: {e}");
                let failure = Diagnostic::parse_failure(&*self.catalog);
                self.abort(failure);
                self.log.render()
            },
        }
    }

    fn try_import(&mut self, root: &OutlineNode) -> Result<()> {
        if let Some(case) = root
            .children
            .iter()
            .find(|child| NodeRole::of_outline_node(&child.title) == NodeRole::Case)
        {
            let rejection =
                Diagnostic::create_module_fail(&*self.catalog, &CASE_TAG.strip(&case.title));
            return Err(Error::Structure(rejection.message));
        }

        self.walk(root, "", 0)
    }

    fn walk(&mut self, node: &OutlineNode, parent_path: &str, depth: usize) -> Result<()> {
        for child in &node.children {
            match NodeRole::of_outline_node(&child.title) {
                NodeRole::Case => self.visit_case(child, parent_path)?,
                _ => {
                    if child.has_children() {
                        let path = format!("{parent_path}/{}", child.title);
                        tracing::trace!(depth = depth + 1, path = %path, "entering module");
                        self.walk(child, &path, depth + 1)?;
                    }
                },
            }
        }
        Ok(())
    }

    fn visit_case(&mut self, node: &OutlineNode, module_path: &str) -> Result<()> {
        let builder = CaseBuilder::new(&self.project_id, &self.maintainer, &self.config);
        match builder.build(&node.title, module_path, &node.children) {
            Some(candidate) => self.consider(candidate),
            None => {
                tracing::debug!(title = %node.title, "malformed case title");
                self.log
                    .push(Diagnostic::incorrect_format(&*self.catalog, &node.title));
                Ok(())
            },
        }
    }

    fn consider(&mut self, mut candidate: CaseRecord) -> Result<()> {
        let key = candidate.comparison_key();

        if self.dedup.is_batch_duplicate(&key) {
            tracing::debug!(name = %candidate.name, "duplicate case node in outline");
            self.log
                .push(Diagnostic::already_exists(&*self.catalog, &candidate.name));
        } else {
            let catalog = &*self.catalog;
            let mut problems =
                Validator::new(catalog, self.config.validation.max_node_depth).check(&candidate);
            if let Some(conflict) =
                self.dedup
                    .check_name(&candidate, self.known_names, self.checker, catalog)?
            {
                problems.push(conflict);
            }

            if problems.is_empty() {
                candidate.accept();
                tracing::debug!(name = %candidate.name, path = %candidate.node_path, "case accepted");
                self.records.push(candidate);
            } else {
                tracing::debug!(name = %candidate.name, problems = problems.len(), "case rejected");
                self.log.append(&mut problems);
            }
        }

        self.dedup.record(key);
        Ok(())
    }

    /// Drop everything the run produced and keep only `reason`.
    fn abort(&mut self, reason: Diagnostic) {
        self.records.clear();
        self.dedup.clear();
        self.log.clear();
        self.log.push(reason);
    }

    /// Accepted records, in outline order.
    pub fn records(&self) -> &[CaseRecord] {
        &self.records
    }

    /// Move the accepted records out, leaving the list empty.
    pub fn take_records(&mut self) -> Vec<CaseRecord> {
        std::mem::take(&mut self.records)
    }

    pub fn diagnostics(&self) -> &DiagnosticLog {
        &self.log
    }

    pub fn known_names(&self) -> &HashSet<String> {
        &*self.known_names
    }

    pub fn report(&self) -> ImportReport {
        ImportReport {
            accepted: self.records.len(),
            visited: self.dedup.visited(),
            diagnostics: self.log.entries().to_vec(),
            message: self.log.render(),
        }
    }

    /// Release records, keys and diagnostics. Safe to call repeatedly.
    ///
    /// The caller's name set is left as is.
    pub fn reset(&mut self) {
        self.records = Vec::new();
        self.dedup = DedupEngine::new();
        self.log = DiagnosticLog::new();
    }
}
