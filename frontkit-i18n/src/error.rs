//! Error types for i18n operations
//!
//! All of these are configuration or programming errors; none is transient.

use thiserror::Error;

/// Errors that can occur during translation.
#[derive(Debug, Error)]
pub enum I18nError {
    /// `translate` was called with an empty key
    #[error("i18n: lookup key missing")]
    LookupKeyMissing,

    /// The message has placeholders but no parameters were passed at all
    #[error("i18n: cannot replace placeholders in string if no option data provided")]
    MissingPlaceholderData,

    /// A named placeholder has no matching parameter
    #[error("i18n: no data found to replace {placeholder} placeholder in string")]
    PlaceholderNotFound { placeholder: String },

    /// A plural lookup needed the `other` form and there was none
    #[error("i18n: Plural form \".other\" is required for \"{locale}\" locale (key \"{key}\")")]
    MissingOtherForm { key: String, locale: String },

    /// Invalid locale string
    #[error("Invalid locale: {0}")]
    InvalidLocale(String),

    /// Invalid plural category
    #[error("Invalid plural category: {0}")]
    InvalidPluralCategory(String),

    /// Translation file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse error
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}
