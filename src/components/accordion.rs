use super::{Component, config_map};
use frontkit_config::{ConfigMap, ConfigSchema, PropertyType};
use serde_json::json;

/// Expandable sections with a show/hide-all control.
pub struct Accordion;

impl Component for Accordion {
    const NAME: &'static str = "Accordion";

    fn schema() -> ConfigSchema {
        ConfigSchema::new()
            .property("i18n", PropertyType::Object)
            .property("rememberExpanded", PropertyType::Boolean)
    }

    fn defaults() -> ConfigMap {
        config_map(json!({
            "i18n": {
                "hideAllSections": "Hide all sections",
                "hideSection": "Hide",
                "hideSectionAriaLabel": "Hide this section",
                "showAllSections": "Show all sections",
                "showSection": "Show",
                "showSectionAriaLabel": "Show this section"
            },
            "rememberExpanded": true
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontkit_config::Dataset;

    #[test]
    fn test_remember_expanded_from_attribute() {
        let dataset: Dataset = [("rememberExpanded".to_string(), "false".to_string())]
            .into_iter()
            .collect();

        let config = Accordion::resolve(None, Some(&dataset)).unwrap();
        assert!(!config.get_bool("rememberExpanded").unwrap());

        let config = Accordion::resolve(None, None).unwrap();
        assert!(config.get_bool("rememberExpanded").unwrap());
    }

    #[test]
    fn test_section_label_override() {
        let dataset: Dataset = [("i18n.showSection".to_string(), "Dangos".to_string())]
            .into_iter()
            .collect();

        let config = Accordion::resolve(None, Some(&dataset)).unwrap();
        assert_eq!(config.get_string("i18n.showSection").unwrap(), "Dangos");
        assert_eq!(config.get_string("i18n.hideSection").unwrap(), "Hide");
    }
}
