//! # eslintrc
//!
//! ESLint shareable configuration as a typed Rust value.
//!
//! This is the facade crate: it re-exports the configuration model from
//! `eslintrc-core` and ships the **classes-first** TypeScript preset,
//! which warns on interface declarations, enum declarations, type-alias
//! declarations, and namespaces, and requires `Array<T>` notation.
//!
//! ## Quick Start
//!
//! ```
//! use eslintrc::presets;
//!
//! let config = presets::classes_first_cached();
//! assert!(config.is_rule_enabled("no-restricted-syntax"));
//!
//! // Hand the record to the host engine in its native wire shape.
//! let json = config.to_json_pretty()?;
//! # let _ = json;
//! # Ok::<(), eslintrc::ConfigError>(())
//! ```

#![forbid(unsafe_code)]

// Re-export the configuration model
pub use eslintrc_core::*;

pub mod presets;
