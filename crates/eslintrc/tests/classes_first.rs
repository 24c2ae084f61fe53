//! Integration tests for the classes-first preset.

use eslintrc::presets::{self, names};
use eslintrc::{ArrayTypeOptions, ArrayTypeStyle, LintConfig, RuleEntry, Severity, SyntaxRestriction};
use serde_json::json;

#[test]
fn retrieval_is_idempotent() {
    assert_eq!(presets::classes_first(), presets::classes_first());
    assert!(std::ptr::eq(
        presets::classes_first_cached(),
        presets::classes_first_cached()
    ));
}

#[test]
fn rule_map_contains_exactly_the_documented_rules() {
    let config = presets::classes_first();
    let mut rule_names: Vec<&str> = config.rules.keys().map(String::as_str).collect();
    rule_names.sort_unstable();
    assert_eq!(
        rule_names,
        vec![names::ARRAY_TYPE, names::NO_NAMESPACE, names::NO_RESTRICTED_SYNTAX]
    );
    for entry in config.rules.values() {
        assert_eq!(entry.severity(), Severity::Warn);
    }
}

#[test]
fn restricted_syntax_forbids_three_shapes_in_order() {
    let config = presets::classes_first();
    let entry = &config.rules[names::NO_RESTRICTED_SYNTAX];
    assert_eq!(entry.severity(), Severity::Warn);
    assert_eq!(entry.options().len(), 3);

    let restrictions: Vec<SyntaxRestriction> = (0..3)
        .map(|i| entry.option_as(i).unwrap())
        .collect();
    assert_eq!(
        restrictions,
        vec![
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
        ]
    );
}

#[test]
fn array_type_requires_generic_notation() {
    let config = presets::classes_first();
    let entry = &config.rules[names::ARRAY_TYPE];
    assert_eq!(entry.severity(), Severity::Warn);
    assert_eq!(
        entry.option_as::<ArrayTypeOptions>(0),
        Some(ArrayTypeOptions {
            default: ArrayTypeStyle::Generic,
        })
    );
    assert_eq!(
        serde_json::to_value(entry).unwrap(),
        json!(["warn", { "default": "generic" }])
    );
}

#[test]
fn namespace_rule_is_a_bare_warn() {
    let config = presets::classes_first();
    assert_eq!(
        config.rules[names::NO_NAMESPACE],
        RuleEntry::Severity(Severity::Warn)
    );
    assert_eq!(
        serde_json::to_value(&config.rules[names::NO_NAMESPACE]).unwrap(),
        json!("warn")
    );
}

#[test]
fn serialized_record_matches_the_host_engine_wire_shape() {
    let config = presets::classes_first();
    let expected = json!({
        "plugins": ["@typescript-eslint"],
        "parser": "@typescript-eslint/parser",
        "rules": {
            "no-restricted-syntax": [
                "warn",
                {
                    "selector": "TSInterfaceDeclaration",
                    "message": "Classes are preferred over TypeScript-specific interfaces.",
                },
                {
                    "selector": "TSEnumDeclaration",
                    "message": "Classes are preferred over TypeScript-specific enums.",
                },
                {
                    "selector": "TSTypeAliasDeclaration",
                    "message": "TypeScript-specific type aliases are forbidden.",
                },
            ],
            "@typescript-eslint/array-type": [
                "warn",
                { "default": "generic" },
            ],
            "@typescript-eslint/no-namespace": "warn",
        },
    });
    assert_eq!(serde_json::to_value(&config).unwrap(), expected);
}

#[test]
fn record_round_trips_through_its_own_json() {
    let config = presets::classes_first();
    let parsed = LintConfig::from_json(&config.to_json_pretty().unwrap()).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn record_passes_validation() {
    assert!(presets::classes_first_cached().validate().is_ok());
}
