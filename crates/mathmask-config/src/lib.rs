//! Mathmask Config
//!
//! This crate handles configuration loading and management
//! for mathmask, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/mathmask/config.toml`
//! - macOS: `~/Library/Application Support/mathmask/config.toml`
//! - Windows: `%APPDATA%\mathmask\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use mathmask_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or load with an inline override
//! let config = Config::load_with_override(Some("[replace]\nPlaceholder = \"<M>\"")).unwrap();
//! ```

mod replace;
mod rules;

pub use replace::ReplaceConfig;
pub use rules::RulesConfig;

use log::{debug, warn};
use mathmask_core::{MathmaskError, Replacer, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[replace]
Placeholder = "[EQUATION]"

[rules]
Enabled = ["inline", "equation", "align"]
"#;

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Placeholder settings
    #[serde(default)]
    pub replace: ReplaceConfig,

    /// Rule selection
    #[serde(default)]
    pub rules: RulesConfig,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use mathmask_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[replace]"));
    /// assert!(toml.contains("[rules]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "mathmask")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Ensures the config file exists, creating it with defaults if not.
    ///
    /// # Returns
    ///
    /// The path to the config file.
    pub fn ensure_config_file() -> Result<PathBuf> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| MathmaskError::Config("Could not determine config directory".into()))?;

        std::fs::create_dir_all(&config_dir)?;

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            std::fs::write(&config_path, DEFAULT_TOML)?;
        }

        Ok(config_path)
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                debug!("Loading config from {}", config_path.display());
                return Self::load_from(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    ///
    /// Keys missing from the file fall back to the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let parsed: Config = toml::from_str(&content).map_err(|e| {
            MathmaskError::Config(format!("Parse error in {}: {}", path.display(), e))
        })?;

        let mut config = Self::default();
        config.merge(&parsed);
        Ok(config)
    }

    /// Load configuration with an optional override file or string.
    ///
    /// 1. Load the base config from the default location; a broken base
    ///    file is logged and replaced by the defaults
    /// 2. If an override is provided:
    ///    - If it's a path to an existing file, load and merge it
    ///    - Otherwise, treat it as a TOML string and parse it
    ///
    /// A broken override is an error.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use mathmask_config::Config;
    ///
    /// let config = Config::load_with_override(Some("[rules]\nEnabled = [\"inline\"]")).unwrap();
    /// ```
    pub fn load_with_override(override_config: Option<&str>) -> Result<Self> {
        let mut config = Self::load().unwrap_or_else(|e| {
            warn!("Ignoring config file: {}", e);
            Self::default()
        });

        if let Some(override_str) = override_config {
            config.merge(&Self::parse_override(override_str)?);
            debug!("Merged config override: {}", override_str);
        }

        Ok(config)
    }

    /// Parse an override given either as a file path or inline TOML.
    pub fn parse_override(override_str: &str) -> Result<Self> {
        let override_path = Path::new(override_str);

        let override_toml = if override_path.exists() {
            debug!("Reading config override from {}", override_path.display());
            std::fs::read_to_string(override_path)?
        } else {
            override_str.to_string()
        };

        toml::from_str(&override_toml)
            .map_err(|e| MathmaskError::Config(format!("Override parse error: {}", e)))
    }

    /// Merge another config into this one.
    ///
    /// Values set in `other` take precedence over values in `self`.
    ///
    /// # Example
    ///
    /// ```
    /// use mathmask_config::Config;
    ///
    /// let mut base = Config::default();
    /// let override_config: Config = toml::from_str(r#"
    ///     [replace]
    ///     Placeholder = "<MATH>"
    /// "#).unwrap();
    ///
    /// base.merge(&override_config);
    /// assert_eq!(base.replace.placeholder(), "<MATH>");
    /// ```
    pub fn merge(&mut self, other: &Config) {
        self.replace.merge(&other.replace);
        self.rules.merge(&other.rules);
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| MathmaskError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }

    /// Build a [`Replacer`] from this configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use mathmask_config::Config;
    /// let replacer = Config::default().replacer();
    /// assert_eq!(replacer.replace("$x$"), "[EQUATION]");
    /// ```
    pub fn replacer(&self) -> Replacer {
        Replacer::new(self.replace.placeholder()).with_kinds(self.rules.enabled())
    }
}
