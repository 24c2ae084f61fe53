//! The configuration record container.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::rule::RuleEntry;
use crate::types::Severity;

/// An ESLint configuration record.
///
/// Immutable by convention: construct it once and hand it to the host
/// engine, which performs its own lookups against `rules`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LintConfig {
    /// Plugin package identifiers the host engine must load to resolve
    /// scoped rule names.
    #[serde(default)]
    pub plugins: Vec<String>,

    /// Parser package identifier producing the syntax representation
    /// rules operate on.
    #[serde(default)]
    pub parser: String,

    /// Rule name to rule entry.
    #[serde(default)]
    pub rules: BTreeMap<String, RuleEntry>,
}

impl LintConfig {
    /// Loads a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&content)
    }

    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or an entry is malformed.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        debug!("parsed lint config with {} rule(s)", config.rules.len());
        Ok(config)
    }

    /// Serializes the configuration to compact JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string(self).map_err(|e| ConfigError::Serialize {
            message: e.to_string(),
        })
    }

    /// Serializes the configuration to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialize {
            message: e.to_string(),
        })
    }

    /// Checks if a rule is listed with a severity other than `off`.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .is_some_and(RuleEntry::is_enabled)
    }

    /// Gets the severity of a rule, if listed.
    #[must_use]
    pub fn rule_severity(&self, rule_name: &str) -> Option<Severity> {
        self.rules.get(rule_name).map(RuleEntry::severity)
    }

    /// Validates structural consistency.
    ///
    /// Checks that the parser and plugin identifiers are non-empty and
    /// that every plugin-scoped rule name references a loaded plugin.
    /// Selector patterns inside options are opaque and never inspected.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.parser.is_empty() {
            return Err(ConfigError::Validation("parser must not be empty".into()));
        }
        for plugin in &self.plugins {
            if plugin.is_empty() {
                return Err(ConfigError::Validation("empty plugin identifier".into()));
            }
        }
        for name in self.rules.keys() {
            if let Some(scope) = plugin_scope(name) {
                if !self.plugins.iter().any(|p| p == scope) {
                    return Err(ConfigError::Validation(format!(
                        "rule '{name}': plugin '{scope}' is not loaded"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Returns the plugin scope of a rule name, e.g. `"@typescript-eslint"`
/// for `"@typescript-eslint/array-type"`. Core rule names have none.
fn plugin_scope(rule_name: &str) -> Option<&str> {
    rule_name.rsplit_once('/').map(|(scope, _)| scope)
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading a config file.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in a config document.
    #[error("invalid config: {message}")]
    Parse {
        /// Parse error detail.
        message: String,
    },

    /// Serialization error.
    #[error("failed to serialize config: {message}")]
    Serialize {
        /// Serialization error detail.
        message: String,
    },

    /// Config is structurally invalid.
    #[error("config validation: {0}")]
    Validation(String),
}
