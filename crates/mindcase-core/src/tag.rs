//! Title tag conventions.
//!
//! Outline titles carry short, case-insensitive markers that decide what a
//! node means:
//!
//! - `tc` (optionally followed by `:` or `：`) marks a test case
//! - `pc:` / `pc：` marks a case's prerequisite
//! - `rc:` / `rc：` marks a case's remark
//!
//! Everything else under a case is a step, and everything else outside a case
//! is a module.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// A compiled, case-insensitive title marker.
#[derive(Debug, Clone)]
pub struct Tag {
    regex: Regex,
}

impl Tag {
    /// Compile `pattern` as a case-insensitive regular expression.
    ///
    /// Returns `None` for an empty pattern or one that does not compile.
    pub fn new(pattern: &str) -> Option<Self> {
        if pattern.is_empty() {
            return None;
        }
        RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .ok()
            .map(|regex| Self { regex })
    }

    /// True if the marker occurs anywhere in `title`.
    pub fn matches(&self, title: &str) -> bool {
        !title.is_empty() && self.regex.is_match(title)
    }

    /// Remove every occurrence of the marker. The rest of the title, including
    /// surrounding whitespace, is left untouched.
    pub fn strip(&self, title: &str) -> String {
        if title.is_empty() {
            return String::new();
        }
        self.regex.replace_all(title, "").into_owned()
    }
}

fn builtin(pattern: &str) -> Tag {
    // Built-in patterns are literals; failing to compile one is a programming error.
    #[allow(clippy::expect_used)]
    Tag::new(pattern).expect("built-in tag pattern must compile")
}

/// Marks a case node. Longer alternatives come first so `tc:` is consumed whole.
pub static CASE_TAG: Lazy<Tag> = Lazy::new(|| builtin("(?:tc:|tc：|tc)"));

/// Marks a prerequisite child of a case node.
pub static PREREQUISITE_TAG: Lazy<Tag> = Lazy::new(|| builtin("(?:pc:|pc：)"));

/// Marks a remark child of a case node.
pub static REMARK_TAG: Lazy<Tag> = Lazy::new(|| builtin("(?:rc:|rc：)"));

/// True if `title` contains a case-insensitive match of `pattern`.
///
/// Empty titles and empty patterns never match, and neither does a pattern
/// that fails to compile.
///
/// ```rust
/// use mindcase_core::tag::matches_tag;
///
/// assert!(matches_tag("TC: login works", "tc:"));
/// assert!(!matches_tag("", "tc"));
/// assert!(!matches_tag("tc", ""));
/// ```
pub fn matches_tag(title: &str, pattern: &str) -> bool {
    if title.is_empty() {
        return false;
    }
    Tag::new(pattern).is_some_and(|tag| tag.matches(title))
}

/// Remove every case-insensitive match of `pattern` from `title` without trimming.
///
/// ```rust
/// use mindcase_core::tag::strip_tag;
///
/// assert_eq!(strip_tag("pc: user exists", "pc:"), " user exists");
/// assert_eq!(strip_tag("PC:logged in", "pc:"), "logged in");
/// ```
pub fn strip_tag(title: &str, pattern: &str) -> String {
    match Tag::new(pattern) {
        Some(tag) => tag.strip(title),
        None => title.to_string(),
    }
}

/// What a node means, decided once from its title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRole {
    /// Organizational node contributing a path segment.
    Module,
    /// Test case node.
    Case,
    /// Prerequisite text of the enclosing case.
    Prerequisite,
    /// Remark text of the enclosing case.
    Remark,
    /// Ordered test step of the enclosing case.
    Step,
}

impl NodeRole {
    /// Classify a node met while walking modules.
    pub fn of_outline_node(title: &str) -> Self {
        if CASE_TAG.matches(title) {
            Self::Case
        } else {
            Self::Module
        }
    }

    /// Classify a direct child of a case node.
    ///
    /// Prerequisite wins over remark when a title carries both markers.
    pub fn of_case_child(title: &str) -> Self {
        if PREREQUISITE_TAG.matches(title) {
            Self::Prerequisite
        } else if REMARK_TAG.matches(title) {
            Self::Remark
        } else {
            Self::Step
        }
    }
}
