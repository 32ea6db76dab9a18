//! Outline extraction.
//!
//! Decoding a mind-map file into a tree is the job of an [`OutlineExtractor`].
//! The crate ships [`JsonOutlineExtractor`] for outlines already converted to
//! JSON; binary container formats are left to the host application.

use crate::types::OutlineNode;
use crate::{Error, Result};
use serde::Deserialize;
use serde_json::Value;

/// Converts raw uploaded bytes into an outline tree rooted at the document's
/// central topic.
pub trait OutlineExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<OutlineNode>;
}

/// Reads JSON outlines in any of these shapes:
///
/// - a sheet: `{"rootTopic": {"title": "...", "children": {"attached": [...]}}}`
/// - a list of sheets, of which the first is used
/// - a bare topic whose `children` is either a list or `{"attached": [...]}`
///
/// ```rust
/// use mindcase_core::{JsonOutlineExtractor, OutlineExtractor};
///
/// let json = br#"{"rootTopic":{"title":"Root","children":{"attached":[{"title":"Login"}]}}}"#;
/// let root = JsonOutlineExtractor.extract(json)?;
/// assert_eq!(root.children[0].title, "Login");
/// # Ok::<(), mindcase_core::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonOutlineExtractor;

#[derive(Debug, Deserialize)]
struct RawTopic {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    children: Option<RawChildren>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawChildren {
    List(Vec<RawTopic>),
    Attached {
        #[serde(default)]
        attached: Vec<RawTopic>,
    },
}

impl From<RawTopic> for OutlineNode {
    fn from(raw: RawTopic) -> Self {
        let children = match raw.children {
            Some(RawChildren::List(list) | RawChildren::Attached { attached: list }) => {
                list.into_iter().map(Self::from).collect()
            },
            None => Vec::new(),
        };
        Self {
            title: raw.title.unwrap_or_default(),
            children,
        }
    }
}

impl OutlineExtractor for JsonOutlineExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<OutlineNode> {
        let document: Value = serde_json::from_slice(bytes)
            .map_err(|e| Error::Parse(format!("Outline is not valid JSON: {e}")))?;

        let sheet = match document {
            Value::Array(sheets) => sheets
                .into_iter()
                .next()
                .ok_or_else(|| Error::Parse("Outline has no sheets".into()))?,
            other => other,
        };

        let topic = match sheet {
            Value::Object(mut fields) if fields.contains_key("rootTopic") => {
                fields.remove("rootTopic").unwrap_or(Value::Null)
            },
            other => other,
        };

        if !topic.is_object() {
            return Err(Error::Parse("Outline has no root topic".into()));
        }

        let raw: RawTopic = serde_json::from_value(topic)
            .map_err(|e| Error::Parse(format!("Unexpected outline shape: {e}")))?;
        Ok(raw.into())
    }
}
