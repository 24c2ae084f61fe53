//! Rule entries and typed option records.
//!
//! An ESLint rule entry is either a bare severity atom (`"warn"`) or a
//! sequence whose first element is the severity and whose remaining
//! elements are rule-specific option values. The sequence shape is
//! positional and heterogeneous, so (de)serialization is hand-written.

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::types::Severity;

/// One entry in the `rules` map.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleEntry {
    /// A bare severity atom, e.g. `"warn"`.
    Severity(Severity),
    /// A severity atom followed by rule-specific option values,
    /// e.g. `["warn", { "default": "generic" }]`.
    WithOptions {
        /// Reporting level for the rule.
        severity: Severity,
        /// Option values, opaque to this crate unless decoded via
        /// [`RuleEntry::option_as`].
        options: Vec<Value>,
    },
}

impl RuleEntry {
    /// Creates an entry with options.
    #[must_use]
    pub fn with_options(severity: Severity, options: Vec<Value>) -> Self {
        Self::WithOptions { severity, options }
    }

    /// Returns the entry's severity.
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Self::Severity(severity) | Self::WithOptions { severity, .. } => *severity,
        }
    }

    /// Returns the option values, empty for a bare severity.
    #[must_use]
    pub fn options(&self) -> &[Value] {
        match self {
            Self::Severity(_) => &[],
            Self::WithOptions { options, .. } => options,
        }
    }

    /// Returns true unless the severity is `off`.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.severity().is_enabled()
    }

    /// Decodes the option value at `index` into a typed record.
    ///
    /// Returns `None` if the index is out of range or the value does not
    /// have the requested shape.
    #[must_use]
    pub fn option_as<T: serde::de::DeserializeOwned>(&self, index: usize) -> Option<T> {
        self.options()
            .get(index)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }
}

impl From<Severity> for RuleEntry {
    fn from(severity: Severity) -> Self {
        Self::Severity(severity)
    }
}

impl Serialize for RuleEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Severity(severity) => severity.serialize(serializer),
            Self::WithOptions { severity, options } => {
                let mut seq = serializer.serialize_seq(Some(1 + options.len()))?;
                seq.serialize_element(severity)?;
                for option in options {
                    seq.serialize_element(option)?;
                }
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for RuleEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntryVisitor;

        impl<'de> Visitor<'de> for EntryVisitor {
            type Value = RuleEntry;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a severity atom or a [severity, options...] sequence")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse::<Severity>()
                    .map(RuleEntry::Severity)
                    .map_err(E::custom)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let severity: Severity = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let mut options = Vec::new();
                while let Some(value) = seq.next_element::<Value>()? {
                    options.push(value);
                }
                Ok(RuleEntry::WithOptions { severity, options })
            }
        }

        deserializer.deserialize_any(EntryVisitor)
    }
}

/// One selector/message pair for the restricted-syntax rule.
///
/// The selector is an opaque pattern naming a syntax-node shape; it is
/// meaningful only to the engine that evaluates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxRestriction {
    /// Pattern identifying the forbidden syntax-node shape.
    pub selector: String,
    /// Explanation shown when the pattern matches.
    pub message: String,
}

impl SyntaxRestriction {
    /// Creates a new restriction.
    #[must_use]
    pub fn new(selector: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            message: message.into(),
        }
    }
}

impl From<SyntaxRestriction> for Value {
    fn from(restriction: SyntaxRestriction) -> Self {
        serde_json::json!({
            "selector": restriction.selector,
            "message": restriction.message,
        })
    }
}

/// Array type notation accepted by the array-type formatting rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArrayTypeStyle {
    /// `T[]` notation.
    Array,
    /// `T[]` for simple types, `Array<T>` otherwise.
    ArraySimple,
    /// `Array<T>` notation.
    Generic,
}

/// Options for the array-type formatting rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayTypeOptions {
    /// Notation required for array types.
    pub default: ArrayTypeStyle,
}

impl From<ArrayTypeOptions> for Value {
    fn from(options: ArrayTypeOptions) -> Self {
        serde_json::json!({ "default": options.default })
    }
}
