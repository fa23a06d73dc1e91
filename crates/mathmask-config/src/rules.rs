//! Rule selection.
//!
//! This module contains the `RulesConfig` struct which selects the
//! equation kinds to replace.

use mathmask_core::EquationKind;
use serde::{Deserialize, Serialize};

/// The `[rules]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RulesConfig {
    /// Kinds to replace. Listing order does not change application order.
    /// Default: all kinds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<Vec<EquationKind>>,
}

impl RulesConfig {
    /// The effective set of enabled kinds.
    pub fn enabled(&self) -> Vec<EquationKind> {
        match &self.enabled {
            Some(kinds) => kinds.clone(),
            None => EquationKind::ALL.to_vec(),
        }
    }

    /// Whether a particular kind is enabled.
    pub fn is_enabled(&self, kind: EquationKind) -> bool {
        self.enabled().contains(&kind)
    }

    /// Merge another RulesConfig into this one.
    pub fn merge(&mut self, other: &RulesConfig) {
        if other.enabled.is_some() {
            self.enabled = other.enabled.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enables_all() {
        let config = RulesConfig::default();
        for kind in EquationKind::ALL {
            assert!(config.is_enabled(kind));
        }
    }

    #[test]
    fn test_serde_lowercase_kinds() {
        let config: RulesConfig = toml::from_str(r#"Enabled = ["align", "inline"]"#).unwrap();
        assert!(config.is_enabled(EquationKind::Inline));
        assert!(!config.is_enabled(EquationKind::Equation));
        assert!(config.is_enabled(EquationKind::Align));
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let result: Result<RulesConfig, _> = toml::from_str(r#"Enabled = ["gather"]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_merge() {
        let mut base = RulesConfig::default();
        base.merge(&RulesConfig {
            enabled: Some(vec![EquationKind::Inline]),
        });
        assert_eq!(base.enabled(), vec![EquationKind::Inline]);

        base.merge(&RulesConfig::default());
        assert_eq!(base.enabled(), vec![EquationKind::Inline]);
    }
}
