// Typed conversion of data-attribute strings

use crate::namespace::extract_config_by_schema;
use crate::{ConfigMap, ConfigSchema, Dataset, PropertyType};
use serde_json::{Number, Value};

/// Convert a raw attribute string into a typed configuration value.
///
/// With a declared type the value is coerced strictly: booleans are `true`
/// only for the exact (trimmed) text `"true"`, numbers follow JavaScript
/// `Number()` parsing. Without one, the trimmed text is sniffed: `"true"` /
/// `"false"` become booleans and finite numeric text becomes a number.
/// Anything else comes back as the original, untrimmed string.
///
/// ```
/// use frontkit_config::{PropertyType, normalise_string};
/// use serde_json::json;
///
/// assert_eq!(normalise_string("1000", None), json!(1000));
/// assert_eq!(normalise_string("100.50", None), json!(100.5));
/// assert_eq!(normalise_string(" true ", None), json!(true));
/// assert_eq!(normalise_string("", None), json!(""));
/// assert_eq!(normalise_string("yes", Some(PropertyType::Boolean)), json!(false));
/// ```
pub fn normalise_string(raw: &str, declared: Option<PropertyType>) -> Value {
    let trimmed = raw.trim();

    let kind = declared.or_else(|| {
        if trimmed == "true" || trimmed == "false" {
            Some(PropertyType::Boolean)
        } else if !trimmed.is_empty() && parse_js_number(trimmed).is_finite() {
            Some(PropertyType::Number)
        } else {
            None
        }
    });

    match kind {
        Some(PropertyType::Boolean) => Value::Bool(trimmed == "true"),
        Some(PropertyType::Number) => number_value(parse_js_number(trimmed)),
        _ => Value::String(raw.to_string()),
    }
}

/// Convert a component's data attributes using its schema.
///
/// Only declared properties are read. A property present verbatim in the
/// dataset is converted with its declared type; `object` properties are
/// replaced by the nested mapping built from their dotted keys.
pub fn normalise_dataset(schema: &ConfigSchema, dataset: &Dataset) -> ConfigMap {
    let mut out = ConfigMap::new();

    for (field, property) in &schema.properties {
        if let Some(raw) = dataset.get(field) {
            out.insert(field.clone(), normalise_string(raw, property.kind));
        }

        if property.is_object() {
            match extract_config_by_schema(schema, dataset, field) {
                Some(nested) if !nested.is_empty() => {
                    out.insert(field.clone(), Value::Object(nested));
                }
                _ => {
                    out.remove(field);
                }
            }
        }
    }

    frontkit_log::trace!(
        "normalised {} of {} data attributes",
        out.len(),
        dataset.len()
    );

    out
}

/// JavaScript `Number()` on already-trimmed text. Returns NaN on failure.
pub(crate) fn parse_js_number(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }

    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match text.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };

    if let Some(radix) = radix {
        return parse_radix(&text[2..], radix);
    }

    // Rust's float grammar also admits "inf" and "nan"; JavaScript doesn't.
    if !text
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
    {
        return f64::NAN;
    }

    text.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }

    digits
        .chars()
        .try_fold(0f64, |acc, c| {
            c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN)
}

// Largest integer an f64 holds exactly (2^53 - 1).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Integral values become JSON integers so `"1000"` equals `json!(1000)`.
/// NaN and infinities have no JSON form and become `null`.
pub(crate) fn number_value(n: f64) -> Value {
    if n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        return Value::from(n as i64);
    }

    Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
}
