use super::{Component, config_map};
use frontkit_config::{ConfigMap, ConfigSchema, PropertyType};
use serde_json::json;

/// A button that can ignore accidental double clicks.
pub struct Button;

impl Component for Button {
    const NAME: &'static str = "Button";

    fn schema() -> ConfigSchema {
        ConfigSchema::new().property("preventDoubleClick", PropertyType::Boolean)
    }

    fn defaults() -> ConfigMap {
        config_map(json!({ "preventDoubleClick": false }))
    }
}
