use serde::{Deserialize, Serialize};

use crate::error::Result;

/// What `start_session` does when a session is already open.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateStartPolicy {
    /// Refuse with `FeedbackError::SessionAlreadyActive`.
    #[default]
    Reject,
    /// Discard the open session and start a new one.
    Replace,
}

/// Behavior switches for the feedback store.
///
/// Loaded from the `config.toml` file; every key is optional.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct StoreConfig {
    pub duplicate_start: DuplicateStartPolicy,
    /// Count the open session's items in analytics queries
    pub include_active_in_analytics: bool,
    /// Default `created_by` for items captured from the CLI
    pub operator: Option<String>,
}

impl StoreConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
