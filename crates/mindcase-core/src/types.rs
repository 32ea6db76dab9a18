use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A node of an extracted outline tree.
///
/// Nodes do not point back at their parent; the walker threads the enclosing
/// module path down the recursion instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineNode {
    pub title: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            children: Vec::new(),
        }
    }

    /// Builder-style helper used by extractors and tests.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Self>) -> Self {
        self.children = children;
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseType {
    #[default]
    Functional,
    Performance,
    Api,
}

impl CaseType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Functional => "functional",
            Self::Performance => "performance",
            Self::Api => "api",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMethod {
    #[default]
    Manual,
    #[serde(rename = "auto")]
    Automated,
}

impl ExecutionMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Automated => "auto",
        }
    }
}

/// One ordered step of a test case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStep {
    /// 1-based position.
    pub index: usize,
    pub description: String,
    pub expected_result: Option<String>,
}

impl CaseStep {
    /// The step used when a case has no step children.
    pub fn placeholder() -> Self {
        Self {
            index: 1,
            description: String::new(),
            expected_result: Some(String::new()),
        }
    }
}

/// A test case produced from one case node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseRecord {
    pub id: Option<Uuid>,
    pub project_id: String,
    pub maintainer: String,
    pub priority: String,
    pub method: ExecutionMethod,
    pub case_type: CaseType,
    pub name: String,
    pub node_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prerequisite: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    pub steps: Vec<CaseStep>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl CaseRecord {
    /// Stamp an accepted record with a fresh id and the current time.
    pub fn accept(&mut self) {
        let now = Utc::now();
        self.id = Some(Uuid::new_v4());
        self.created_at = Some(now);
        self.updated_at = Some(now);
    }

    pub fn is_accepted(&self) -> bool {
        self.id.is_some()
    }

    /// Steps as compact JSON, in insertion order, for stores that keep them in one column.
    pub fn steps_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(&self.steps)?)
    }

    pub fn comparison_key(&self) -> ComparisonKey {
        ComparisonKey::from(self)
    }
}

/// Everything about a record except its generated id and timestamps.
///
/// Two case nodes that produce equal keys are duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComparisonKey {
    pub project_id: String,
    pub maintainer: String,
    pub priority: String,
    pub method: ExecutionMethod,
    pub case_type: CaseType,
    pub name: String,
    pub node_path: String,
    pub prerequisite: Option<String>,
    pub remark: Option<String>,
    pub steps: Vec<CaseStep>,
}

impl From<&CaseRecord> for ComparisonKey {
    fn from(record: &CaseRecord) -> Self {
        Self {
            project_id: record.project_id.clone(),
            maintainer: record.maintainer.clone(),
            priority: record.priority.clone(),
            method: record.method,
            case_type: record.case_type,
            name: record.name.clone(),
            node_path: record.node_path.clone(),
            prerequisite: record.prerequisite.clone(),
            remark: record.remark.clone(),
            steps: record.steps.clone(),
        }
    }
}
