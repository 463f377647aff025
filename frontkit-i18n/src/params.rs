//! Placeholder parameters
//!
//! Values substituted into `%{name}` placeholders. A `count` parameter
//! holding a number also selects the plural form.

use serde_json::Value;
use std::collections::BTreeMap;

/// A scalar placeholder value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Substituted verbatim
    Text(String),
    /// Formatted with the translator's locale conventions
    Number(f64),
    /// `false` (and `true`) substitute as an empty string
    Bool(bool),
    /// Anything else; substitutes as an empty string
    Null,
}

impl ParamValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ParamValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

macro_rules! number_param {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    ParamValue::Number(value as f64)
                }
            }
        )*
    };
}

number_param!(f64, f32, i32, i64, u32, u64, usize);

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ParamValue::Null, Into::into)
    }
}

impl From<&Value> for ParamValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::String(s) => ParamValue::Text(s.clone()),
            Value::Number(n) => n.as_f64().map_or(ParamValue::Null, ParamValue::Number),
            Value::Bool(b) => ParamValue::Bool(*b),
            Value::Null | Value::Array(_) | Value::Object(_) => ParamValue::Null,
        }
    }
}

impl From<Value> for ParamValue {
    fn from(value: Value) -> Self {
        ParamValue::from(&value)
    }
}

/// Named placeholder parameters.
///
/// ```
/// use frontkit_i18n::Params;
///
/// let params = Params::new().with("count", 3).with("name", "John");
/// assert_eq!(params.count(), Some(3.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    values: BTreeMap<String, ParamValue>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters holding only a count.
    pub fn count_of(count: impl Into<ParamValue>) -> Self {
        Self::new().with("count", count)
    }

    /// Add a parameter (builder style).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    /// The `count` parameter, when it is a number.
    pub fn count(&self) -> Option<f64> {
        self.get("count").and_then(ParamValue::as_number)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<&serde_json::Map<String, Value>> for Params {
    fn from(map: &serde_json::Map<String, Value>) -> Self {
        map.iter().map(|(k, v)| (k.clone(), ParamValue::from(v))).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_conversions() {
        assert_eq!(ParamValue::from("a"), ParamValue::Text("a".into()));
        assert_eq!(ParamValue::from(2usize), ParamValue::Number(2.0));
        assert_eq!(ParamValue::from(false), ParamValue::Bool(false));
        assert_eq!(ParamValue::from(None::<i32>), ParamValue::Null);
        assert_eq!(ParamValue::from(json!([1])), ParamValue::Null);
        assert_eq!(ParamValue::from(json!(1.5)), ParamValue::Number(1.5));
    }

    #[test]
    fn test_count_must_be_numeric() {
        assert_eq!(Params::count_of(0).count(), Some(0.0));
        assert_eq!(Params::count_of("3").count(), None);
        assert_eq!(Params::new().count(), None);
    }

    #[test]
    fn test_from_json_map() {
        let map = json!({ "name": "John", "age": 30, "admin": false });
        let params = Params::from(map.as_object().unwrap());

        assert_eq!(params.len(), 3);
        assert_eq!(params.get("name"), Some(&ParamValue::Text("John".into())));
        assert_eq!(params.get("age"), Some(&ParamValue::Number(30.0)));
        assert_eq!(params.get("admin"), Some(&ParamValue::Bool(false)));
    }

    #[test]
    fn test_from_iter() {
        let params: Params = [("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(params.len(), 2);
        assert!(!params.is_empty());
    }
}
