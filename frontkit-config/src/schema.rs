// Component configuration schemas

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Declared type of a schema property.
///
/// Drives how a raw data-attribute string is converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    String,
    Boolean,
    Number,
    Object,
}

/// A single declared property.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaProperty {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<PropertyType>,
}

impl SchemaProperty {
    pub fn new(kind: PropertyType) -> Self {
        Self { kind: Some(kind) }
    }

    pub fn is_object(&self) -> bool {
        self.kind == Some(PropertyType::Object)
    }
}

/// One `anyOf` alternative: every `required` key must be truthy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaCondition {
    pub required: Vec<String>,
    #[serde(rename = "errorMessage")]
    pub error_message: String,
}

/// Configuration schema owned by a component as plain data.
///
/// Deserialises from the same JSON shape components publish:
///
/// ```
/// use frontkit_config::{ConfigSchema, PropertyType};
///
/// let schema: ConfigSchema = serde_json::from_str(r#"{
///     "properties": { "i18n": { "type": "object" }, "maxlength": { "type": "number" } },
///     "anyOf": [{ "required": ["maxlength"], "errorMessage": "maxlength is required" }]
/// }"#).unwrap();
///
/// assert_eq!(schema.property_type("maxlength"), Some(PropertyType::Number));
/// assert_eq!(schema.any_of.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigSchema {
    #[serde(default)]
    pub properties: BTreeMap<String, SchemaProperty>,
    #[serde(rename = "anyOf", default, skip_serializing_if = "Vec::is_empty")]
    pub any_of: Vec<SchemaCondition>,
}

impl ConfigSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a property.
    pub fn property(mut self, name: impl Into<String>, kind: PropertyType) -> Self {
        self.properties.insert(name.into(), SchemaProperty::new(kind));
        self
    }

    /// Add an `anyOf` alternative.
    pub fn any_of<I, S>(mut self, required: I, error_message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.any_of.push(SchemaCondition {
            required: required.into_iter().map(Into::into).collect(),
            error_message: error_message.into(),
        });
        self
    }

    pub fn property_type(&self, name: &str) -> Option<PropertyType> {
        self.properties.get(name).and_then(|p| p.kind)
    }
}
