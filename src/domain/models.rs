use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of a palette search. Rebuilt on every query; `usage_count` is
/// display data only.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SnippetResult {
    pub abbv: String,
    pub value: String,
    #[serde(default)]
    pub usage_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Snippet {
    pub abbv: String,
    pub value: String,
}

impl Snippet {
    pub fn new(abbv: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            abbv: abbv.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationResult {
    pub status: OperationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl OperationResult {
    #[must_use]
    pub fn success() -> Self {
        Self {
            status: OperationStatus::Success,
            message: None,
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: OperationStatus::Error,
            message: Some(message.into()),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == OperationStatus::Success
    }
}

/// Translation key to display string. May be partial.
pub type TranslationMap = HashMap<String, String>;
