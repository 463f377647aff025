//! Integration tests for frontkit-config

use frontkit_config::*;
use proptest::prelude::*;
use serde_json::{Value, json};

fn map(value: Value) -> ConfigMap {
    serde_json::from_value(value).unwrap()
}

fn dataset(pairs: &[(&str, &str)]) -> Dataset {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// =============================================================================
// Merge properties
// =============================================================================

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        (-1000i64..1000).prop_map(Value::from),
        "[a-z]{0,6}".prop_map(Value::String),
    ]
}

fn config_map() -> impl Strategy<Value = ConfigMap> {
    let value = leaf().prop_recursive(3, 24, 4, |inner| {
        prop::collection::btree_map("[a-d]", inner, 0..4)
            .prop_map(|m| Value::Object(m.into_iter().collect()))
    });

    prop::collection::btree_map("[a-d]", value, 0..5).prop_map(|m| m.into_iter().collect())
}

proptest! {
    #[test]
    fn merge_is_associative(a in config_map(), b in config_map(), c in config_map()) {
        let flat = merge_configs([&a, &b, &c]);
        let ab = merge_configs([&a, &b]);
        let nested = merge_configs([&ab, &c]);
        prop_assert_eq!(flat, nested);
    }

    #[test]
    fn merge_identity(a in config_map()) {
        let empty = ConfigMap::new();
        prop_assert_eq!(&merge_configs([&a]), &a);
        prop_assert_eq!(&merge_configs([&empty, &a]), &a);
        prop_assert_eq!(&merge_configs([&a, &empty]), &a);
    }

    #[test]
    fn later_scalars_always_win(a in config_map(), key in "[a-d]", scalar in leaf()) {
        let mut c = ConfigMap::new();
        c.insert(key.clone(), scalar.clone());
        let merged = merge_configs([&a, &c]);
        prop_assert_eq!(&merged[&key], &scalar);
    }

    #[test]
    fn merge_invents_no_keys(a in config_map(), b in config_map()) {
        let merged = merge_configs([&a, &b]);
        for key in merged.keys() {
            prop_assert!(a.contains_key(key) || b.contains_key(key));
        }
    }
}

// =============================================================================
// Namespace extraction
// =============================================================================

#[test]
fn test_extract_documented_cases() {
    let flat = dataset(&[
        ("a", "aardvark"),
        ("b.a", "bat"),
        ("b.e", "bear"),
        ("b.o", "boar"),
        ("c", "jellyfish"),
        ("c.a", "cat"),
        ("c.o", "cow"),
        ("i18n.key2.one", "The"),
        ("i18n.key2.other", "Other"),
    ]);

    assert_eq!(
        Value::Object(extract_config_by_namespace(&flat, "b")),
        json!({ "a": "bat", "e": "bear", "o": "boar" })
    );
    assert_eq!(
        Value::Object(extract_config_by_namespace(&flat, "c")),
        json!({ "a": "cat", "o": "cow" })
    );
    assert_eq!(
        Value::Object(extract_config_by_namespace(&flat, "i18n")),
        json!({ "key2": { "one": "The", "other": "Other" } })
    );
}

// =============================================================================
// End to end
// =============================================================================

fn character_count_schema() -> ConfigSchema {
    ConfigSchema::new()
        .property("i18n", PropertyType::Object)
        .property("maxwords", PropertyType::Number)
        .property("maxlength", PropertyType::Number)
        .property("threshold", PropertyType::Number)
        .any_of(["maxwords"], "Either \"maxlength\" or \"maxwords\" must be provided")
        .any_of(["maxlength"], "Either \"maxlength\" or \"maxwords\" must be provided")
}

#[test]
fn test_resolve_from_attributes() {
    let defaults = map(json!({
        "threshold": 0,
        "i18n": {
            "charactersAtLimit": "You have 0 characters remaining",
            "charactersUnderLimit": {
                "one": "You have %{count} character remaining",
                "other": "You have %{count} characters remaining"
            }
        }
    }));
    let attributes = dataset(&[
        ("module", "govuk-character-count"),
        ("maxlength", "10"),
        ("threshold", "75"),
        ("i18n.charactersUnderLimit.one", "Un nod ar ôl"),
    ]);

    let config = resolve_config(
        "CharacterCount",
        &character_count_schema(),
        &defaults,
        None,
        Some(&attributes),
    )
    .unwrap();

    assert_eq!(config.get_int("maxlength").unwrap(), 10);
    assert_eq!(config.get_int("threshold").unwrap(), 75);
    assert!(!config.has("module"));
    assert_eq!(
        config.get_string("i18n.charactersUnderLimit.one").unwrap(),
        "Un nod ar ôl"
    );
    assert_eq!(
        config.get_string("i18n.charactersUnderLimit.other").unwrap(),
        "You have %{count} characters remaining"
    );
    assert_eq!(
        config.get_string("i18n.charactersAtLimit").unwrap(),
        "You have 0 characters remaining"
    );
}

#[test]
fn test_resolve_rejects_missing_limit() {
    let err = resolve_config(
        "CharacterCount",
        &character_count_schema(),
        &ConfigMap::new(),
        Some(&map(json!({ "threshold": 50 }))),
        None,
    )
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "CharacterCount: Either \"maxlength\" or \"maxwords\" must be provided"
    );
}

#[test]
fn test_resolver_from_files() {
    let dir = std::env::temp_dir().join(format!("frontkit-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let schema_path = dir.join("schema.json");
    std::fs::write(
        &schema_path,
        r#"{ "properties": { "i18n": { "type": "object" }, "rememberExpanded": { "type": "boolean" } } }"#,
    )
    .unwrap();

    let defaults_path = dir.join("defaults.toml");
    std::fs::write(
        &defaults_path,
        "rememberExpanded = true\n\n[i18n]\nshowSection = \"Show\"\n",
    )
    .unwrap();

    let resolver = ConfigResolver::builder("Accordion")
        .schema_file(&schema_path, FileFormat::Json)
        .defaults_file(&defaults_path, FileFormat::Toml)
        .build()
        .unwrap();

    let config = resolver
        .resolve(None, Some(&dataset(&[("rememberExpanded", "false")])))
        .unwrap();

    assert!(!config.get_bool("rememberExpanded").unwrap());
    assert_eq!(config.get_string("i18n.showSection").unwrap(), "Show");

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::ParseError("bad toml".to_string());
    assert!(err.to_string().contains("bad toml"));
}
