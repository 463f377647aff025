//! Message lookup and pluralisation for frontkit components
//!
//! A [`Translator`] is built once per component instance from the `i18n`
//! slice of its resolved configuration and a locale:
//!
//! - **Lookup**: keys map to plain messages or plural form sets; unknown
//!   keys come back unchanged.
//! - **Pluralisation**: a numeric `count` parameter selects the CLDR
//!   category (`zero`, `one`, `two`, `few`, `many`, `other`) for the
//!   locale, falling back to `other` with a warning.
//! - **Interpolation**: `%{name}` placeholders are filled from
//!   [`Params`], numbers formatted with the locale's separators.
//!
//! # Quick Start
//!
//! ```
//! use frontkit_i18n::{Params, Translations, Translator};
//! use serde_json::json;
//!
//! let translations = Translations::from_value(&json!({
//!     "charactersUnderLimit": {
//!         "one": "You have %{count} character remaining",
//!         "other": "You have %{count} characters remaining"
//!     }
//! }));
//!
//! let translator = Translator::builder(translations)
//!     .locale_hint("en-GB")
//!     .build();
//!
//! assert_eq!(
//!     translator.translate("charactersUnderLimit", Some(&Params::count_of(1))).unwrap(),
//!     "You have 1 character remaining"
//! );
//! ```
//!
//! # Features
//!
//! - `icu`: use ICU4X CLDR plural rules where available instead of the
//!   built-in table.

mod error;
mod format;
mod locale;
mod params;
mod plural;
mod translations;
mod translator;

pub use error::I18nError;
pub use format::{NumberFormatter, format_number};
pub use locale::{DEFAULT_LOCALE, Locale, resolve_locale};
pub use params::{ParamValue, Params};
#[cfg(feature = "icu")]
pub use plural::NativeRules;
pub use plural::{FallbackRules, PluralCategory, PluralRules, plural_category, rules_for_locale};
pub use translations::{PluralForms, TranslationEntry, Translations};
pub use translator::{Translator, TranslatorBuilder, WarningSink, log_warning_sink};

/// Result type for i18n operations
pub type Result<T> = std::result::Result<T, I18nError>;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        I18nError, Locale, ParamValue, Params, PluralCategory, Result, Translations, Translator,
        format_number, plural_category,
    };
}
