//! Character count
//!
//! Tells users how many characters or words they have left in a textarea.

use super::{Component, config_map, translator_builder};
use crate::Result;
use frontkit_config::{
    ConfigError, ConfigMap, ConfigSchema, Dataset, PropertyType, ResolvedConfig,
};
use frontkit_i18n::{Params, Translator};
use serde::{Deserialize, Serialize};
use serde_json::json;

const LIMIT_REQUIRED: &str = "Either \"maxlength\" or \"maxwords\" must be provided";

/// What the limit counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountType {
    Characters,
    Words,
}

impl CountType {
    /// Prefix of this count's message keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            CountType::Characters => "characters",
            CountType::Words => "words",
        }
    }
}

/// Message model of one character count instance.
#[derive(Debug)]
pub struct CharacterCount {
    config: ResolvedConfig,
    translator: Translator,
    count_type: CountType,
    max_length: f64,
}

impl Component for CharacterCount {
    const NAME: &'static str = "CharacterCount";

    fn schema() -> ConfigSchema {
        ConfigSchema::new()
            .property("i18n", PropertyType::Object)
            .property("maxwords", PropertyType::Number)
            .property("maxlength", PropertyType::Number)
            .property("threshold", PropertyType::Number)
            .any_of(["maxwords"], LIMIT_REQUIRED)
            .any_of(["maxlength"], LIMIT_REQUIRED)
    }

    fn defaults() -> ConfigMap {
        config_map(json!({
            "threshold": 0,
            "i18n": {
                "charactersUnderLimit": {
                    "one": "You have %{count} character remaining",
                    "other": "You have %{count} characters remaining"
                },
                "charactersAtLimit": "You have 0 characters remaining",
                "charactersOverLimit": {
                    "one": "You have %{count} character too many",
                    "other": "You have %{count} characters too many"
                },
                "wordsUnderLimit": {
                    "one": "You have %{count} word remaining",
                    "other": "You have %{count} words remaining"
                },
                "wordsAtLimit": "You have 0 words remaining",
                "wordsOverLimit": {
                    "one": "You have %{count} word too many",
                    "other": "You have %{count} words too many"
                },
                "textareaDescription": {
                    "other": ""
                }
            }
        }))
    }
}

impl CharacterCount {
    /// Resolve configuration and build the translator in one step.
    pub fn from_sources(
        options: Option<&ConfigMap>,
        dataset: Option<&Dataset>,
        locale: Option<&str>,
    ) -> Result<Self> {
        let config = Self::resolve(options, dataset)?;

        let mut builder = translator_builder(&config);
        if let Some(locale) = locale {
            builder = builder.locale(locale);
        }
        let translator = builder.build();

        Self::new(config, translator)
    }

    /// Build from an already resolved configuration.
    ///
    /// `maxwords` takes precedence over `maxlength`.
    pub fn new(config: ResolvedConfig, translator: Translator) -> Result<Self> {
        let limit = |path: &str| -> Result<Option<f64>> {
            if !config.lookup(path).is_some_and(frontkit_config::is_truthy) {
                return Ok(None);
            }
            Ok(Some(config.get_number(path)?))
        };

        let (count_type, max_length) = match (limit("maxwords")?, limit("maxlength")?) {
            (Some(words), _) => (CountType::Words, words),
            (None, Some(characters)) => (CountType::Characters, characters),
            (None, None) => {
                return Err(ConfigError::Validation {
                    component: Self::NAME.to_string(),
                    message: LIMIT_REQUIRED.to_string(),
                }
                .into());
            }
        };

        Ok(Self {
            config,
            translator,
            count_type,
            max_length,
        })
    }

    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn count_type(&self) -> CountType {
        self.count_type
    }

    pub fn max_length(&self) -> f64 {
        self.max_length
    }

    /// Words (runs of non-whitespace) or UTF-16 code units in `text`.
    pub fn count(&self, text: &str) -> usize {
        match self.count_type {
            CountType::Words => text.split_whitespace().count(),
            CountType::Characters => text.encode_utf16().count(),
        }
    }

    /// Whether `text` has reached the configured percentage of the limit.
    pub fn is_over_threshold(&self, text: &str) -> bool {
        let threshold = self.config.get_number("threshold").unwrap_or(0.0);
        self.max_length * threshold / 100.0 <= self.count(text) as f64
    }

    /// The status message for the current contents of the textarea.
    pub fn count_message(&self, text: &str) -> Result<String> {
        self.format_count_message(self.max_length - self.count(text) as f64)
    }

    /// The status message for `remaining` characters or words (negative
    /// when over the limit).
    pub fn format_count_message(&self, remaining: f64) -> Result<String> {
        let prefix = self.count_type.as_str();

        if remaining == 0.0 {
            return Ok(self.translator.translate(&format!("{prefix}AtLimit"), None)?);
        }

        let suffix = if remaining < 0.0 { "OverLimit" } else { "UnderLimit" };
        let params = Params::count_of(remaining.abs());

        Ok(self
            .translator
            .translate(&format!("{prefix}{suffix}"), Some(&params))?)
    }

    /// Hint shown under the textarea before scripting takes over.
    pub fn textarea_description(&self) -> Result<String> {
        let params = Params::count_of(self.max_length);
        Ok(self.translator.translate("textareaDescription", Some(&params))?)
    }
}
