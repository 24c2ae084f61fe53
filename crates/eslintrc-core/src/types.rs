//! Severity atoms for lint rules.

use serde::{Deserialize, Serialize};

/// Reporting level for a lint rule.
///
/// ESLint recognizes exactly three atoms; anything else is invalid
/// configuration and fails to deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Rule is disabled and reports nothing.
    Off,
    /// Violations are reported but do not fail the lint run.
    Warn,
    /// Violations fail the lint run.
    Error,
}

impl Severity {
    /// Returns the lowercase atom string for this severity.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Returns true unless the severity is `off`.
    #[must_use]
    pub fn is_enabled(self) -> bool {
        self != Self::Off
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized severity atom.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity '{0}', expected off, warn, or error")]
pub struct ParseSeverityError(pub String);

impl std::str::FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off" => Ok(Self::Off),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(ParseSeverityError(other.to_string())),
        }
    }
}
