// Frontkit - configuration and translation for progressively-enhanced UI components
//
// Every component resolves its configuration from defaults, caller options
// and data attributes, then renders its messages through a translator built
// from the `i18n` slice of that configuration.

// Logging is always available
pub use frontkit_log;

#[cfg(feature = "config")]
pub use frontkit_config;

#[cfg(feature = "i18n")]
pub use frontkit_i18n;

#[cfg(feature = "components")]
pub mod components;

#[cfg(feature = "components")]
mod error;

#[cfg(feature = "components")]
pub use error::{Error, Result};

// Prelude for common imports
pub mod prelude {
    #[cfg(feature = "config")]
    pub use frontkit_config::{
        ConfigError, ConfigMap, ConfigResolver, ConfigSchema, Dataset, PropertyType,
        ResolvedConfig, resolve_config,
    };

    #[cfg(feature = "i18n")]
    pub use frontkit_i18n::{I18nError, Params, PluralCategory, Translations, Translator};

    #[cfg(feature = "components")]
    pub use crate::components::{
        Accordion, Button, CharacterCount, Component, CountType, PasswordInput,
    };
}
