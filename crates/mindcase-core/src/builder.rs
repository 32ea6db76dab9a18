//! Turns one case node into a candidate [`CaseRecord`].
//!
//! A case title has the shape `<attributes>:<name>`, for example
//! `P1-功能测试:tc:Valid login`. The attributes segment is a `-`-separated list
//! of tokens naming the priority (`P1`) and the case type (`功能测试`). The case
//! marker itself may appear anywhere and is stripped from both segments.
//!
//! The children of a case node become its prerequisite (`pc:`), remark (`rc:`)
//! and ordered steps (everything else). A step's expected result is the title
//! of its first child.

use crate::config::{ImportConfig, KeywordsConfig};
use crate::tag::{CASE_TAG, NodeRole, PREREQUISITE_TAG, REMARK_TAG};
use crate::types::{CaseRecord, CaseStep, CaseType, ExecutionMethod, OutlineNode};

/// Builds candidate records for one run.
#[derive(Debug, Clone, Copy)]
pub struct CaseBuilder<'a> {
    project_id: &'a str,
    maintainer: &'a str,
    config: &'a ImportConfig,
}

impl<'a> CaseBuilder<'a> {
    pub const fn new(project_id: &'a str, maintainer: &'a str, config: &'a ImportConfig) -> Self {
        Self {
            project_id,
            maintainer,
            config,
        }
    }

    /// Build the candidate for a case node titled `title` that lives under
    /// `module_path`.
    ///
    /// Returns `None` when the title is not `<attributes>:<name>`.
    pub fn build(
        &self,
        title: &str,
        module_path: &str,
        children: &[OutlineNode],
    ) -> Option<CaseRecord> {
        let CaseTitle {
            priority,
            case_type,
            name,
        } = CaseTitle::parse(title, &self.config.defaults.priority, &self.config.keywords)?;

        let (prerequisite, remark, steps) = partition_children(children);

        Some(CaseRecord {
            id: None,
            project_id: self.project_id.to_string(),
            maintainer: self.maintainer.to_string(),
            priority,
            method: ExecutionMethod::Manual,
            case_type,
            name,
            node_path: normalize_node_path(module_path),
            prerequisite,
            remark,
            steps,
            created_at: None,
            updated_at: None,
        })
    }
}

/// Metadata carried by a case title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseTitle {
    pub priority: String,
    pub case_type: CaseType,
    pub name: String,
}

impl CaseTitle {
    /// Parse a case title. Conflicting tokens resolve last-write-wins.
    pub fn parse(title: &str, default_priority: &str, keywords: &KeywordsConfig) -> Option<Self> {
        let (attributes, name) = split_case_title(title)?;

        let mut parsed = Self {
            priority: default_priority.to_string(),
            case_type: CaseType::default(),
            name: CASE_TAG.strip(&name),
        };

        let attributes = CASE_TAG.strip(&attributes);
        if attributes.contains('-') {
            for token in attributes.split('-') {
                if token.starts_with(['P', 'p']) {
                    parsed.priority = token.to_uppercase();
                } else if let Some(case_type) = keywords.case_type_of(token) {
                    parsed.case_type = case_type;
                }
            }
        }

        Some(parsed)
    }
}

/// Split a case title into its attributes and name segments.
///
/// Full-width colons count as ASCII colons. A title with a single colon splits
/// there. With several colons, the ones that close a `tc:` marker are skipped
/// and exactly one colon must remain. An empty name segment is malformed.
///
/// ```rust
/// use mindcase_core::builder::split_case_title;
///
/// assert_eq!(
///     split_case_title("P1-功能测试：tc：Valid login"),
///     Some(("P1-功能测试".to_string(), "tc:Valid login".to_string()))
/// );
/// assert_eq!(split_case_title("tc Valid login"), None);
/// assert_eq!(split_case_title("a:b:c"), None);
/// ```
pub fn split_case_title(title: &str) -> Option<(String, String)> {
    let normalized = title.replace('：', ":");
    let colons: Vec<usize> = normalized.match_indices(':').map(|(i, _)| i).collect();

    let separator = match colons.as_slice() {
        [] => return None,
        [only] => *only,
        many => {
            let mut separators = many
                .iter()
                .copied()
                .filter(|&i| !closes_case_marker(&normalized, i));
            match (separators.next(), separators.next()) {
                (Some(only), None) => only,
                _ => return None,
            }
        },
    };

    let (attributes, rest) = normalized.split_at(separator);
    let name = &rest[1..];
    if name.is_empty() {
        return None;
    }
    Some((attributes.to_string(), name.to_string()))
}

fn closes_case_marker(text: &str, colon: usize) -> bool {
    colon
        .checked_sub(2)
        .and_then(|start| text.get(start..colon))
        .is_some_and(|marker| marker.eq_ignore_ascii_case("tc"))
}

/// Force a leading `/` and drop trailing ones. Idempotent.
///
/// ```rust
/// use mindcase_core::builder::normalize_node_path;
///
/// assert_eq!(normalize_node_path("Login/Form/"), "/Login/Form");
/// assert_eq!(normalize_node_path("/Login"), "/Login");
/// ```
pub fn normalize_node_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

fn partition_children(
    children: &[OutlineNode],
) -> (Option<String>, Option<String>, Vec<CaseStep>) {
    let mut prerequisite = None;
    let mut remark = None;
    let mut step_nodes = Vec::new();

    for child in children {
        match NodeRole::of_case_child(&child.title) {
            NodeRole::Prerequisite => prerequisite = Some(PREREQUISITE_TAG.strip(&child.title)),
            NodeRole::Remark => remark = Some(REMARK_TAG.strip(&child.title)),
            _ => step_nodes.push(child),
        }
    }

    let steps = if step_nodes.is_empty() {
        vec![CaseStep::placeholder()]
    } else {
        step_nodes
            .into_iter()
            .enumerate()
            .map(|(i, node)| CaseStep {
                index: i + 1,
                description: node.title.clone(),
                expected_result: node.children.first().map(|result| result.title.clone()),
            })
            .collect()
    };

    (prerequisite, remark, steps)
}
