//! Structural and business checks on a candidate record.

use crate::diagnostics::Diagnostic;
use crate::messages::MessageCatalog;
use crate::types::{CaseRecord, CaseType, ExecutionMethod};

pub struct Validator<'a> {
    catalog: &'a dyn MessageCatalog,
    max_node_depth: usize,
}

impl<'a> Validator<'a> {
    pub fn new(catalog: &'a dyn MessageCatalog, max_node_depth: usize) -> Self {
        Self {
            catalog,
            max_node_depth,
        }
    }

    /// Every problem with `record` that does not need storage to detect.
    ///
    /// An empty result means the record passed.
    pub fn check(&self, record: &CaseRecord) -> Vec<Diagnostic> {
        let mut problems = Vec::new();

        let segments: Vec<&str> = record.node_path.split('/').collect();
        if segments.len() > self.max_node_depth + 1 {
            problems.push(Diagnostic::depth_exceeded(self.catalog, self.max_node_depth));
        }
        if segments.iter().skip(1).any(|s| s.trim().is_empty()) {
            problems.push(Diagnostic::empty_module_name(self.catalog));
        }

        if record.case_type == CaseType::Functional && record.method == ExecutionMethod::Automated {
            problems.push(Diagnostic::method_type_incompatible(self.catalog));
        }

        problems
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::builder::CaseBuilder;
    use crate::config::{ImportConfig, MAX_NODE_DEPTH};
    use crate::messages::{BuiltinCatalog, MessageKey};

    fn record_at(path: &str) -> CaseRecord {
        let config = ImportConfig::default();
        CaseBuilder::new("proj-1", "alice", &config)
            .build("tc:Case", path, &[])
            .unwrap()
    }

    fn keys(problems: &[Diagnostic]) -> Vec<MessageKey> {
        problems.iter().map(|d| d.key).collect()
    }

    fn path_with_segments(count: usize) -> String {
        // `count` includes the leading empty segment
        (1..count).map(|i| format!("/M{i}")).collect()
    }

    #[test]
    fn test_depth_limit_is_inclusive() {
        let catalog = BuiltinCatalog::default();
        let validator = Validator::new(&catalog, MAX_NODE_DEPTH);

        // Given: Paths at and just over the limit
        let at_limit = record_at(&path_with_segments(MAX_NODE_DEPTH + 1));
        let over_limit = record_at(&path_with_segments(MAX_NODE_DEPTH + 2));

        // Then: Only the deeper one is flagged
        assert!(validator.check(&at_limit).is_empty());
        assert_eq!(keys(&validator.check(&over_limit)), vec![MessageKey::NodeDepthExceeded]);
    }

    #[test]
    fn test_blank_module_reported_once() {
        let catalog = BuiltinCatalog::default();
        let validator = Validator::new(&catalog, MAX_NODE_DEPTH);
        let record = record_at("/Login/  /Form/ ");
        assert_eq!(keys(&validator.check(&record)), vec![MessageKey::EmptyModuleName]);
    }

    #[test]
    fn test_leading_segment_is_not_a_module() {
        let catalog = BuiltinCatalog::default();
        let validator = Validator::new(&catalog, MAX_NODE_DEPTH);
        assert!(validator.check(&record_at("/Login")).is_empty());
    }

    #[test]
    fn test_functional_cases_cannot_be_automated() {
        let catalog = BuiltinCatalog::default();
        let validator = Validator::new(&catalog, MAX_NODE_DEPTH);
        let mut record = record_at("/Login");
        record.method = ExecutionMethod::Automated;
        assert_eq!(
            keys(&validator.check(&record)),
            vec![MessageKey::MethodTypeIncompatible]
        );

        record.case_type = CaseType::Api;
        assert!(validator.check(&record).is_empty());
    }

    #[test]
    fn test_problems_accumulate() {
        let catalog = BuiltinCatalog::default();
        let validator = Validator::new(&catalog, 1);
        let mut record = record_at("/A/ /C");
        record.method = ExecutionMethod::Automated;
        assert_eq!(
            keys(&validator.check(&record)),
            vec![
                MessageKey::NodeDepthExceeded,
                MessageKey::EmptyModuleName,
                MessageKey::MethodTypeIncompatible
            ]
        );
    }
}
