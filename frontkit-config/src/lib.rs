//! Configuration resolution for frontkit components
//!
//! Every component instance is configured from three layers: the
//! component's hard-coded defaults, options supplied by the caller, and the
//! `data-*` attributes found on its root element. This crate merges those
//! layers into one immutable [`ResolvedConfig`]:
//!
//! - [`merge_configs`] deep-merges mappings, later sources winning.
//! - [`extract_config_by_namespace`] turns dotted attribute names such as
//!   `i18n.charactersUnderLimit.one` into nested mappings.
//! - [`normalise_string`] / [`normalise_dataset`] give attribute strings
//!   their declared (or sniffed) boolean and number types.
//! - [`validate_config`] applies the schema's `anyOf` rules.
//! - [`resolve_config`] and [`ConfigResolver`] put it all together.

pub mod error;
pub mod loader;
pub mod merge;
pub mod namespace;
pub mod normalise;
pub mod resolver;
pub mod schema;
pub mod validation;

pub use error::{ConfigError, Result};
pub use loader::{ConfigLoader, FileFormat};
pub use merge::merge_configs;
pub use namespace::{extract_config_by_namespace, extract_config_by_schema};
pub use normalise::{normalise_dataset, normalise_string};
pub use resolver::{ConfigResolver, ConfigResolverBuilder, resolve_config};
pub use schema::{ConfigSchema, PropertyType, SchemaCondition, SchemaProperty};
pub use validation::{is_truthy, validate_config};

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;

/// A configuration mapping: string keys to scalars or nested mappings.
pub type ConfigMap = serde_json::Map<String, Value>;

/// Flat data attributes of an element, keyed by attribute name without the
/// `data-` prefix. Iteration order is lexicographic, which namespace
/// extraction relies on.
pub type Dataset = BTreeMap<String, String>;

/// The final, merged configuration of one component instance.
///
/// Keys may be read as dotted paths (`"i18n.showSection"`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedConfig {
    values: ConfigMap,
}

impl ResolvedConfig {
    pub fn new(values: ConfigMap) -> Self {
        Self { values }
    }

    /// Look up a value by dotted path
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let first = self.values.get(segments.next()?)?;
        segments.try_fold(first, |value, segment| value.as_object()?.get(segment))
    }

    /// Get a configuration value
    pub fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let value = self
            .lookup(path)
            .ok_or_else(|| ConfigError::KeyNotFound(path.to_string()))?;

        serde_json::from_value(value.clone())
            .map_err(|e| ConfigError::DeserializationError(format!("{}: {}", path, e)))
    }

    /// Get a configuration value with default
    pub fn get_or<T: DeserializeOwned>(&self, path: &str, default: T) -> T {
        self.get(path).unwrap_or(default)
    }

    pub fn get_string(&self, path: &str) -> Result<String> {
        self.get(path)
    }

    pub fn get_bool(&self, path: &str) -> Result<bool> {
        self.get(path)
    }

    pub fn get_number(&self, path: &str) -> Result<f64> {
        self.get(path)
    }

    pub fn get_int(&self, path: &str) -> Result<i64> {
        self.get(path)
    }

    /// Check if a path exists
    pub fn has(&self, path: &str) -> bool {
        self.lookup(path).is_some()
    }

    /// Top-level keys
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.values.keys()
    }

    /// The `i18n` mapping handed to the translator, if configured
    pub fn i18n(&self) -> Option<&ConfigMap> {
        self.values.get("i18n").and_then(Value::as_object)
    }

    pub fn as_map(&self) -> &ConfigMap {
        &self.values
    }

    pub fn into_inner(self) -> ConfigMap {
        self.values
    }
}

impl From<ConfigMap> for ResolvedConfig {
    fn from(values: ConfigMap) -> Self {
        Self::new(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resolved(value: Value) -> ResolvedConfig {
        ResolvedConfig::new(serde_json::from_value(value).unwrap())
    }

    #[test]
    fn test_typed_getters() {
        let config = resolved(json!({
            "label": "Show",
            "maxlength": 10,
            "threshold": 75.5,
            "rememberExpanded": true
        }));

        assert_eq!(config.get_string("label").unwrap(), "Show");
        assert_eq!(config.get_int("maxlength").unwrap(), 10);
        assert_eq!(config.get_number("threshold").unwrap(), 75.5);
        assert!(config.get_bool("rememberExpanded").unwrap());
    }

    #[test]
    fn test_dotted_lookup() {
        let config = resolved(json!({ "i18n": { "words": { "one": "word" } } }));

        assert_eq!(config.get_string("i18n.words.one").unwrap(), "word");
        assert!(config.has("i18n.words"));
        assert!(!config.has("i18n.words.one.deeper"));
        assert!(!config.has("i18n.missing"));
    }

    #[test]
    fn test_missing_and_mistyped() {
        let config = resolved(json!({ "label": "Show" }));

        assert!(matches!(config.get_string("nope"), Err(ConfigError::KeyNotFound(_))));
        assert!(matches!(
            config.get_bool("label"),
            Err(ConfigError::DeserializationError(_))
        ));
        assert_eq!(config.get_or("nope", 3i64), 3);
    }

    #[test]
    fn test_i18n_slice() {
        let config = resolved(json!({ "i18n": { "showSection": "Show" } }));
        assert_eq!(config.i18n().unwrap()["showSection"], "Show");

        assert!(resolved(json!({ "i18n": "off" })).i18n().is_none());
        assert!(resolved(json!({})).i18n().is_none());
    }

    #[test]
    fn test_keys() {
        let config = resolved(json!({ "b": 1, "a": 2 }));
        let mut keys: Vec<&String> = config.keys().collect();
        keys.sort();
        assert_eq!(keys, ["a", "b"]);
    }
}
