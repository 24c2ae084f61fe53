//! Shipped configuration presets.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use eslintrc_core::{
    ArrayTypeOptions, ArrayTypeStyle, LintConfig, RuleEntry, Severity, SyntaxRestriction,
};

/// Identifiers used by the shipped presets, so callers never retype them.
pub mod names {
    /// Plugin supplying the TypeScript rule set.
    pub const TYPESCRIPT_PLUGIN: &str = "@typescript-eslint";
    /// Parser producing the TypeScript-aware syntax tree.
    pub const TYPESCRIPT_PARSER: &str = "@typescript-eslint/parser";
    /// Core rule forbidding arbitrary syntax-node shapes by selector.
    pub const NO_RESTRICTED_SYNTAX: &str = "no-restricted-syntax";
    /// Rule enforcing one array type notation.
    pub const ARRAY_TYPE: &str = "@typescript-eslint/array-type";
    /// Rule flagging namespace declarations.
    pub const NO_NAMESPACE: &str = "@typescript-eslint/no-namespace";
}

/// Preset configurations shipped by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Classes-first TypeScript: steer code toward classes by warning on
    /// interfaces, enums, type aliases, and namespaces.
    ClassesFirst,
}

impl Preset {
    /// Builds the configuration record for this preset.
    #[must_use]
    pub fn config(self) -> LintConfig {
        match self {
            Self::ClassesFirst => classes_first(),
        }
    }
}

/// Builds the classes-first TypeScript configuration.
///
/// Rules:
/// - `no-restricted-syntax` (warn) - forbids interface declarations,
///   enum declarations, and type-alias declarations
/// - `@typescript-eslint/array-type` (warn) - requires `Array<T>` notation
/// - `@typescript-eslint/no-namespace` (warn) - flags namespace declarations
#[must_use]
pub fn classes_first() -> LintConfig {
    let restrictions = [
        SyntaxRestriction::new(
            "TSInterfaceDeclaration",
            "Classes are preferred over TypeScript-specific interfaces.",
        ),
        SyntaxRestriction::new(
            "TSEnumDeclaration",
            "Classes are preferred over TypeScript-specific enums.",
        ),
        SyntaxRestriction::new(
            "TSTypeAliasDeclaration",
            "TypeScript-specific type aliases are forbidden.",
        ),
    ];

    LintConfig {
        plugins: vec![names::TYPESCRIPT_PLUGIN.to_string()],
        parser: names::TYPESCRIPT_PARSER.to_string(),
        rules: BTreeMap::from([
            (
                names::NO_RESTRICTED_SYNTAX.to_string(),
                RuleEntry::with_options(
                    Severity::Warn,
                    restrictions.into_iter().map(Into::into).collect(),
                ),
            ),
            (
                names::ARRAY_TYPE.to_string(),
                RuleEntry::with_options(
                    Severity::Warn,
                    vec![ArrayTypeOptions {
                        default: ArrayTypeStyle::Generic,
                    }
                    .into()],
                ),
            ),
            (
                names::NO_NAMESPACE.to_string(),
                RuleEntry::from(Severity::Warn),
            ),
        ]),
    }
}

/// Returns the classes-first configuration, built once.
///
/// Repeated calls return the same reference, so retrieval is idempotent.
pub fn classes_first_cached() -> &'static LintConfig {
    static CONFIG: OnceLock<LintConfig> = OnceLock::new();
    CONFIG.get_or_init(classes_first)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_dispatch_matches_constructor() {
        assert_eq!(Preset::ClassesFirst.config(), classes_first());
    }

    #[test]
    fn cached_retrieval_is_referentially_identical() {
        assert!(std::ptr::eq(classes_first_cached(), classes_first_cached()));
        assert_eq!(*classes_first_cached(), classes_first());
    }

    #[test]
    fn preset_is_structurally_valid() {
        assert!(classes_first().validate().is_ok());
    }
}
