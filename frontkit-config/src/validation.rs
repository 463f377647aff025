// Configuration validation against a schema's anyOf rules

use crate::{ConfigMap, ConfigSchema};
use serde_json::Value;

/// Check a resolved configuration against the schema's `anyOf` alternatives.
///
/// An alternative is satisfied when every one of its `required` keys holds a
/// truthy value. If at least one alternative is satisfied (or the schema
/// declares none) the result is empty; otherwise it holds the error message
/// of every alternative, in declaration order. Never fails: the caller
/// decides whether a non-empty list is fatal.
pub fn validate_config(schema: &ConfigSchema, config: &ConfigMap) -> Vec<String> {
    if schema.any_of.is_empty() {
        return Vec::new();
    }

    let errors: Vec<String> = schema
        .any_of
        .iter()
        .filter(|condition| {
            !condition
                .required
                .iter()
                .all(|key| config.get(key).is_some_and(is_truthy))
        })
        .map(|condition| condition.error_message.clone())
        .collect();

    if errors.len() < schema.any_of.len() {
        return Vec::new();
    }

    frontkit_log::debug!("configuration failed {} anyOf rules", errors.len());
    errors
}

/// JavaScript truthiness of a configuration value.
///
/// `null`, `false`, `0`, NaN and `""` are falsy; everything else,
/// including empty arrays and objects, is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
