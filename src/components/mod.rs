//! Component configuration contracts
//!
//! Each component declares a name, a schema and default configuration.
//! Instances resolve their configuration through [`Component::resolve`]
//! and get a translator for their messages from [`translator_builder`].

mod accordion;
mod button;
mod character_count;
mod password_input;

pub use accordion::Accordion;
pub use button::Button;
pub use character_count::{CharacterCount, CountType};
pub use password_input::PasswordInput;

use frontkit_config::{ConfigMap, ConfigResolver, ConfigSchema, Dataset, ResolvedConfig};
use frontkit_i18n::{Translations, Translator, TranslatorBuilder};
use serde_json::Value;

/// A component's configuration contract.
pub trait Component {
    /// Name used in validation errors
    const NAME: &'static str;

    fn schema() -> ConfigSchema;

    fn defaults() -> ConfigMap;

    fn resolver() -> ConfigResolver {
        ConfigResolver::new(Self::NAME, Self::schema(), Self::defaults())
    }

    /// Resolve one instance's configuration from caller options and the
    /// data attributes of its root element.
    fn resolve(
        options: Option<&ConfigMap>,
        dataset: Option<&Dataset>,
    ) -> frontkit_config::Result<ResolvedConfig> {
        Self::resolver().resolve(options, dataset)
    }
}

/// A translator builder over the `i18n` slice of a resolved configuration.
///
/// A missing or non-object `i18n` value gives an empty table, so every key
/// renders as itself.
pub fn translator_builder(config: &ResolvedConfig) -> TranslatorBuilder {
    let translations = config
        .i18n()
        .map(Translations::from_map)
        .unwrap_or_default();

    Translator::builder(translations)
}

/// Build a [`ConfigMap`] from a JSON object literal.
pub(crate) fn config_map(value: Value) -> ConfigMap {
    match value {
        Value::Object(map) => map,
        _ => ConfigMap::new(),
    }
}
