//! Translation tables
//!
//! A component's `i18n` configuration maps message keys to either a plain
//! string or a set of plural forms:
//!
//! ```json
//! {
//!   "charactersAtLimit": "You have 0 characters remaining",
//!   "charactersUnderLimit": {
//!     "one": "You have %{count} character remaining",
//!     "other": "You have %{count} characters remaining"
//!   }
//! }
//! ```

use crate::{PluralCategory, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Messages for each plural category of one key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluralForms {
    forms: BTreeMap<PluralCategory, String>,
}

impl PluralForms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a form (builder style).
    pub fn with(mut self, category: PluralCategory, message: impl Into<String>) -> Self {
        self.insert(category, message);
        self
    }

    pub fn insert(&mut self, category: PluralCategory, message: impl Into<String>) {
        self.forms.insert(category, message.into());
    }

    pub fn get(&self, category: PluralCategory) -> Option<&str> {
        self.forms.get(&category).map(String::as_str)
    }

    pub fn contains(&self, category: PluralCategory) -> bool {
        self.forms.contains_key(&category)
    }

    /// Categories present, in CLDR order.
    pub fn categories(&self) -> impl Iterator<Item = PluralCategory> + '_ {
        self.forms.keys().copied()
    }

    /// Keep only recognised category keys holding strings.
    fn from_object(object: &serde_json::Map<String, Value>) -> Self {
        let forms = object
            .iter()
            .filter_map(|(tag, message)| {
                Some((PluralCategory::parse(tag)?, message.as_str()?.to_string()))
            })
            .collect();

        Self { forms }
    }
}

/// One entry of a translation table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationEntry {
    /// A message, possibly with `%{name}` placeholders
    Text(String),
    /// Plural forms selected by a `count` parameter
    Plural(PluralForms),
    /// A value that is neither; lookups fall back to the key
    Unusable,
}

impl From<&Value> for TranslationEntry {
    fn from(value: &Value) -> Self {
        match value {
            Value::String(s) => TranslationEntry::Text(s.clone()),
            Value::Object(object) => TranslationEntry::Plural(PluralForms::from_object(object)),
            _ => TranslationEntry::Unusable,
        }
    }
}

/// Message keys to translation entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translations {
    entries: BTreeMap<String, TranslationEntry>,
}

impl Translations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an `i18n` configuration mapping.
    pub fn from_map(map: &serde_json::Map<String, Value>) -> Self {
        let entries = map
            .iter()
            .map(|(key, value)| (key.clone(), TranslationEntry::from(value)))
            .collect();

        Self { entries }
    }

    /// Build from any JSON value; non-objects give an empty table.
    pub fn from_value(value: &Value) -> Self {
        value.as_object().map(Self::from_map).unwrap_or_default()
    }

    /// Load from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(&value))
    }

    /// Load a JSON file.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Add a plain message.
    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.entries
            .insert(key.into(), TranslationEntry::Text(message.into()));
    }

    /// Add a plural form, creating the form set if needed.
    ///
    /// Replaces a plain message stored under the same key.
    pub fn insert_plural(
        &mut self,
        key: impl Into<String>,
        category: PluralCategory,
        message: impl Into<String>,
    ) {
        let entry = self
            .entries
            .entry(key.into())
            .or_insert_with(|| TranslationEntry::Plural(PluralForms::new()));

        match entry {
            TranslationEntry::Plural(forms) => forms.insert(category, message),
            other => *other = TranslationEntry::Plural(PluralForms::new().with(category, message)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&TranslationEntry> {
        self.entries.get(key)
    }

    /// The plural forms stored under `key`, if it holds a form set.
    pub fn plural_forms(&self, key: &str) -> Option<&PluralForms> {
        match self.entries.get(key)? {
            TranslationEntry::Plural(forms) => Some(forms),
            _ => None,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
