//! Replacement settings.
//!
//! This module contains the `ReplaceConfig` struct which holds
//! the placeholder text.

use mathmask_core::DEFAULT_PLACEHOLDER;
use serde::{Deserialize, Serialize};

/// The `[replace]` section.
///
/// Fields are optional so that a partial override file only changes
/// what it names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReplaceConfig {
    /// Text substituted for each equation span.
    /// Default: "[EQUATION]"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl ReplaceConfig {
    /// The effective placeholder.
    pub fn placeholder(&self) -> &str {
        self.placeholder.as_deref().unwrap_or(DEFAULT_PLACEHOLDER)
    }

    /// Merge another ReplaceConfig into this one.
    ///
    /// Only values set in `other` are copied.
    pub fn merge(&mut self, other: &ReplaceConfig) {
        if other.placeholder.is_some() {
            self.placeholder = other.placeholder.clone();
        }
    }
}
