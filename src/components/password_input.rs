use super::{Component, config_map};
use frontkit_config::{ConfigMap, ConfigSchema, PropertyType};
use serde_json::json;

/// A password field with a show/hide toggle.
pub struct PasswordInput;

impl Component for PasswordInput {
    const NAME: &'static str = "PasswordInput";

    fn schema() -> ConfigSchema {
        ConfigSchema::new().property("i18n", PropertyType::Object)
    }

    fn defaults() -> ConfigMap {
        config_map(json!({
            "i18n": {
                "showPassword": "Show",
                "hidePassword": "Hide",
                "showPasswordAriaLabel": "Show password",
                "hidePasswordAriaLabel": "Hide password",
                "passwordShownAnnouncement": "Your password is visible",
                "passwordHiddenAnnouncement": "Your password is hidden"
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::translator_builder;

    #[test]
    fn test_default_labels() {
        let config = PasswordInput::resolve(None, None).unwrap();
        let translator = translator_builder(&config).build();

        assert_eq!(translator.t("showPassword"), "Show");
        assert_eq!(translator.t("passwordHiddenAnnouncement"), "Your password is hidden");
    }

    #[test]
    fn test_welsh_labels_from_attributes() {
        let dataset = [
            ("i18n.showPassword".to_string(), "Datgelu".to_string()),
            ("i18n.hidePassword".to_string(), "Cuddio".to_string()),
        ]
        .into_iter()
        .collect();

        let config = PasswordInput::resolve(None, Some(&dataset)).unwrap();
        let translator = translator_builder(&config).locale("cy").build();

        assert_eq!(translator.t("showPassword"), "Datgelu");
        assert_eq!(translator.t("hidePassword"), "Cuddio");
        assert_eq!(translator.t("showPasswordAriaLabel"), "Show password");
    }
}
