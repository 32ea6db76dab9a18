//! Import configuration.
//!
//! Settings are stored in TOML. Every section is optional; missing keys fall
//! back to the defaults used by the outline convention.
//!
//! ## Example Configuration File
//!
//! ```toml
//! [validation]
//! max_node_depth = 5
//!
//! [defaults]
//! priority = "P0"
//!
//! [keywords]
//! functional = ["功能测试", "functional"]
//! performance = ["性能测试"]
//! api = ["接口测试"]
//!
//! [messages]
//! locale = "zh-cn"
//! ```
//!
//! ## Loading
//!
//! ```rust,no_run
//! use mindcase_core::{ImportConfig, Result};
//! use std::path::Path;
//!
//! // Explicit file
//! let config = ImportConfig::load(Path::new("mindcase.toml"))?;
//! // Platform config directory, or defaults when absent
//! let fallback = ImportConfig::load_default()?;
//! # Ok::<(), mindcase_core::Error>(())
//! ```

use crate::messages::Locale;
use crate::types::CaseType;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Deepest module nesting a case may live under.
pub const MAX_NODE_DEPTH: usize = 5;

/// Priority assigned when a case title does not name one.
pub const DEFAULT_PRIORITY: &str = "P0";

/// Settings for one import run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Structural limits checked by the validator
    pub validation: ValidationConfig,
    /// Values used when a case title omits them
    pub defaults: DefaultsConfig,
    /// Title keywords that select the case type
    pub keywords: KeywordsConfig,
    /// Diagnostic language
    pub messages: MessagesConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum number of module levels above a case.
    ///
    /// A node path may have at most `max_node_depth + 1` segments once split on
    /// `/` (the leading empty segment included).
    pub max_node_depth: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_node_depth: MAX_NODE_DEPTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub priority: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            priority: DEFAULT_PRIORITY.to_string(),
        }
    }
}

/// Suffixes that mark an attribute token as a case type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordsConfig {
    pub functional: Vec<String>,
    pub performance: Vec<String>,
    pub api: Vec<String>,
}

impl Default for KeywordsConfig {
    fn default() -> Self {
        Self {
            functional: vec!["功能测试".to_string()],
            performance: vec!["性能测试".to_string()],
            api: vec!["接口测试".to_string()],
        }
    }
}

impl KeywordsConfig {
    /// The case type named by `token`, checked functional, then performance, then api.
    pub fn case_type_of(&self, token: &str) -> Option<CaseType> {
        let ends_with_any =
            |keywords: &[String]| keywords.iter().any(|k| !k.is_empty() && token.ends_with(k));

        if ends_with_any(&self.functional) {
            Some(CaseType::Functional)
        } else if ends_with_any(&self.performance) {
            Some(CaseType::Performance)
        } else if ends_with_any(&self.api) {
            Some(CaseType::Api)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessagesConfig {
    pub locale: Locale,
}

impl ImportConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML for
    /// this schema.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config: {e}")))?;
        toml::from_str(&content).map_err(|e| Error::Config(format!("Failed to parse config: {e}")))
    }

    /// Load from the platform config directory, or return defaults when no file exists.
    ///
    /// - Linux: `~/.config/mindcase/config.toml`
    /// - macOS: `~/Library/Application Support/dev.outfitter.mindcase/config.toml`
    /// - Windows: `%APPDATA%\outfitter\mindcase\config\config.toml`
    pub fn load_default() -> Result<Self> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            Self::load(&config_path)
        } else {
            tracing::debug!("No config at {}, using defaults", config_path.display());
            Ok(Self::default())
        }
    }

    /// Save the configuration as pretty TOML, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create config directory: {e}")))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))?;

        fs::write(path, content).map_err(|e| Error::Config(format!("Failed to write config: {e}")))?;
        Ok(())
    }

    /// Location of the default config file.
    pub fn config_path() -> Result<PathBuf> {
        let project_dirs = directories::ProjectDirs::from("dev", "outfitter", "mindcase")
            .ok_or_else(|| Error::Config("Failed to determine project directories".into()))?;
        Ok(project_dirs.config_dir().join("config.toml"))
    }
}
