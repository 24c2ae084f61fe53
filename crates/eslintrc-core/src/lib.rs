//! # eslintrc-core
//!
//! Typed model of ESLint configuration records.
//!
//! This crate provides the building blocks of an ESLint config:
//!
//! - [`Severity`] for the `off`/`warn`/`error` atom set
//! - [`RuleEntry`] for bare-severity and severity-with-options entries
//! - [`LintConfig`] for the full record (plugins, parser, rules)
//!
//! It models and (de)serializes configuration only. Evaluating rules
//! against source code is the host engine's job, not this crate's.
//!
//! ## Example
//!
//! ```
//! use eslintrc_core::{LintConfig, Severity};
//!
//! let config = LintConfig::from_json(
//!     r#"{ "rules": { "@typescript-eslint/no-namespace": "warn" } }"#,
//! )?;
//! assert_eq!(
//!     config.rule_severity("@typescript-eslint/no-namespace"),
//!     Some(Severity::Warn),
//! );
//! # Ok::<(), eslintrc_core::ConfigError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod rule;
mod types;

pub use config::{ConfigError, LintConfig};
pub use rule::{ArrayTypeOptions, ArrayTypeStyle, RuleEntry, SyntaxRestriction};
pub use types::{ParseSeverityError, Severity};
