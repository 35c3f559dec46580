//! Linter configuration
//!
//! Read from `.workflow-lint.toml` at the project root. The file is optional;
//! without it every rule runs with the built-in name filters.
//!
//! ```toml
//! [rules]
//! disabled = ["doc-links"]
//!
//! [names]
//! min_length = 3
//! stop_words = ["the", "a", "an"]
//! role_suffixes = ["writer", "reviewer"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::services::NameFilter;
use crate::core::services::names::{DEFAULT_MIN_LENGTH, DEFAULT_ROLE_SUFFIXES, DEFAULT_STOP_WORDS};
use crate::paths;

/// Errors loading the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        /// Config file path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid configuration
    #[error("invalid config {path}: {source}")]
    Parse {
        /// Config file path
        path: PathBuf,
        /// TOML error
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level linter configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LintConfig {
    /// Rule selection
    #[serde(default)]
    pub rules: RulesConfig,
    /// Bare-name filter tuning
    #[serde(default)]
    pub names: NamesConfig,
}

/// Rule selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RulesConfig {
    /// Names of rules to skip (e.g. `"doc-links"`)
    #[serde(default)]
    pub disabled: Vec<String>,
}

/// Bare-name filter tuning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamesConfig {
    /// Names shorter than this are ignored
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    /// Words never treated as skill names
    ///
    /// A keyword followed by plain whitespace counts as an invocation, so
    /// prose like "call when ready" reports `when` as a skill name. Add such
    /// words here. Setting this list replaces the defaults rather than
    /// extending them.
    #[serde(default = "default_stop_words")]
    pub stop_words: Vec<String>,
    /// Role suffixes a code-styled name must carry
    #[serde(default = "default_role_suffixes")]
    pub role_suffixes: Vec<String>,
}

const fn default_min_length() -> usize {
    DEFAULT_MIN_LENGTH
}

fn default_stop_words() -> Vec<String> {
    DEFAULT_STOP_WORDS.iter().map(ToString::to_string).collect()
}

fn default_role_suffixes() -> Vec<String> {
    DEFAULT_ROLE_SUFFIXES.iter().map(ToString::to_string).collect()
}

impl Default for NamesConfig {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            stop_words: default_stop_words(),
            role_suffixes: default_role_suffixes(),
        }
    }
}

impl NamesConfig {
    /// Build the bare-name filter these settings describe
    #[must_use]
    pub fn filter(&self) -> NameFilter {
        NameFilter::new(self.min_length, self.stop_words.clone(), self.role_suffixes.clone())
    }
}

impl LintConfig {
    /// Load `.workflow-lint.toml` from `root`, or defaults if it does not exist
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = paths::config_file(root);
        if !path.is_file() {
            debug!("no {} at {}, using defaults", paths::CONFIG_FILE, root.display());
            return Ok(Self::default());
        }
        Self::load_file(&path)
    }

    /// Load a specific config file
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Whether the named rule should be skipped
    #[must_use]
    pub fn is_disabled(&self, rule: &str) -> bool {
        self.rules.disabled.iter().any(|r| r == rule)
    }
}
