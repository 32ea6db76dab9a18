//! Diagnostic message lookup.
//!
//! The importer never hard-codes user-facing text. It asks a [`MessageCatalog`]
//! for each fragment by [`MessageKey`] and composes the clause itself, so a host
//! application can plug in its own translations.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Identifies one translatable diagnostic fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKey {
    /// Label placed before a malformed case title.
    CaseName,
    /// A case title does not have the `<attributes>:<name>` shape.
    IncorrectFormat,
    /// The node path is deeper than allowed. Text may contain `{max}`.
    NodeDepthExceeded,
    /// A module in the node path has a blank title.
    EmptyModuleName,
    /// Functional cases cannot use the automated method.
    MethodTypeIncompatible,
    /// The case duplicates one in this batch or in storage.
    AlreadyExists,
    /// A case node sits directly under the document root.
    CreateModuleFail,
    /// The import failed as a whole.
    ParseFailure,
}

impl MessageKey {
    pub const ALL: [Self; 8] = [
        Self::CaseName,
        Self::IncorrectFormat,
        Self::NodeDepthExceeded,
        Self::EmptyModuleName,
        Self::MethodTypeIncompatible,
        Self::AlreadyExists,
        Self::CreateModuleFail,
        Self::ParseFailure,
    ];
}

/// Resolves message keys to display text.
pub trait MessageCatalog {
    fn get(&self, key: MessageKey) -> Cow<'_, str>;
}

/// Languages shipped with [`BuiltinCatalog`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh-cn")]
    ZhCn,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::En => f.write_str("en"),
            Self::ZhCn => f.write_str("zh-cn"),
        }
    }
}

impl FromStr for Locale {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" => Ok(Self::En),
            "zh" | "zh-cn" => Ok(Self::ZhCn),
            other => Err(crate::Error::Config(format!("Unsupported locale: {other}"))),
        }
    }
}

/// Message tables compiled into the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog {
    locale: Locale,
}

impl BuiltinCatalog {
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub const fn locale(&self) -> Locale {
        self.locale
    }

    const fn text(&self, key: MessageKey) -> &'static str {
        match self.locale {
            Locale::En => match key {
                MessageKey::CaseName => "Test case name",
                MessageKey::IncorrectFormat => "incorrect format",
                MessageKey::NodeDepthExceeded => "The node tree maximum depth is {max} levels",
                MessageKey::EmptyModuleName => "The module name cannot be empty",
                MessageKey::MethodTypeIncompatible => {
                    "Functional test cases cannot use the auto method"
                },
                MessageKey::AlreadyExists => "Test case already exists",
                MessageKey::CreateModuleFail => "create module fail",
                MessageKey::ParseFailure => "The file has an incorrect format",
            },
            Locale::ZhCn => match key {
                MessageKey::CaseName => "用例名称",
                MessageKey::IncorrectFormat => "格式错误",
                MessageKey::NodeDepthExceeded => "模块树最大深度为{max}层",
                MessageKey::EmptyModuleName => "模块名称不能为空",
                MessageKey::MethodTypeIncompatible => "功能测试的测试方式不能为自动",
                MessageKey::AlreadyExists => "用例已存在",
                MessageKey::CreateModuleFail => "创建模块失败",
                MessageKey::ParseFailure => "文件格式错误",
            },
        }
    }
}

impl MessageCatalog for BuiltinCatalog {
    fn get(&self, key: MessageKey) -> Cow<'_, str> {
        Cow::Borrowed(self.text(key))
    }
}
