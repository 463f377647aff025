//! Message lookup with pluralisation and placeholder interpolation

use crate::format::{NumberFormatter, plain_number};
use crate::plural::{PluralRules, rules_for_locale};
use crate::{
    I18nError, Locale, ParamValue, Params, PluralCategory, Result, TranslationEntry, Translations,
    resolve_locale,
};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use regex::Regex;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// `%{name}`, where `name` is any run of non-space characters other than `}`.
static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"%\{([^\s}]+)\}").unwrap());

/// Receives plural-fallback diagnostics.
pub type WarningSink = Arc<dyn Fn(&str) + Send + Sync>;

/// The sink used when none is configured: a `warn` level log record.
pub fn log_warning_sink() -> WarningSink {
    Arc::new(|message: &str| frontkit_log::warn!(target: "frontkit_i18n", "{}", message))
}

type LocaleHint = Box<dyn FnOnce() -> Option<String>>;

/// Translates message keys for one component instance.
///
/// # Example
///
/// ```
/// use frontkit_i18n::{Params, Translations, Translator};
/// use serde_json::json;
///
/// let translations = Translations::from_value(&json!({
///     "items": { "one": "%{count} item", "other": "%{count} items" }
/// }));
/// let translator = Translator::builder(translations).locale("en").build();
///
/// let message = translator.translate("items", Some(&Params::count_of(2000))).unwrap();
/// assert_eq!(message, "2,000 items");
/// ```
pub struct Translator {
    translations: Translations,
    locale: String,
    rules: Box<dyn PluralRules>,
    number_format: Option<NumberFormatter>,
    warning_sink: WarningSink,
    warned: Mutex<HashSet<(String, PluralCategory)>>,
}

impl Translator {
    /// Create a translator with an explicit locale, or `"en"`.
    pub fn new(translations: Translations, locale: Option<&str>) -> Self {
        let mut builder = Self::builder(translations);
        if let Some(locale) = locale {
            builder = builder.locale(locale);
        }
        builder.build()
    }

    pub fn builder(translations: Translations) -> TranslatorBuilder {
        TranslatorBuilder {
            translations,
            locale: None,
            hint: None,
            warning_sink: None,
        }
    }

    /// The locale tag in use.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn translations(&self) -> &Translations {
        &self.translations
    }

    /// Plural categories the locale distinguishes.
    pub fn plural_categories(&self) -> &[PluralCategory] {
        self.rules.categories()
    }

    /// Translate a message key.
    ///
    /// Keys with no usable message come back unchanged. A numeric `count`
    /// parameter selects among plural forms; other parameters fill `%{name}`
    /// placeholders, numbers formatted for the locale.
    ///
    /// # Errors
    ///
    /// - [`I18nError::LookupKeyMissing`] for an empty key
    /// - [`I18nError::MissingPlaceholderData`] when the message has
    ///   placeholders and `params` is `None`
    /// - [`I18nError::PlaceholderNotFound`] when a placeholder has no
    ///   parameter
    /// - [`I18nError::MissingOtherForm`] when plural fallback finds no
    ///   `other` form
    pub fn translate(&self, key: &str, params: Option<&Params>) -> Result<String> {
        if key.is_empty() {
            return Err(I18nError::LookupKeyMissing);
        }

        let message = match self.translations.get(key) {
            Some(TranslationEntry::Text(message)) => message.as_str(),
            Some(TranslationEntry::Plural(forms)) => {
                let count = params.and_then(Params::count).filter(|n| n.is_finite());
                let form = match count {
                    Some(count) => forms.get(self.select_plural_category(key, count)?),
                    None => None,
                };
                match form {
                    Some(form) => form,
                    None => return Ok(key.to_string()),
                }
            }
            Some(TranslationEntry::Unusable) | None => return Ok(key.to_string()),
        };

        self.interpolate(message, params)
    }

    /// Translate without parameters, falling back to the key on error.
    pub fn t(&self, key: &str) -> String {
        self.translate_or_key(key, None)
    }

    /// Translate with a count, falling back to the key on error.
    pub fn t_plural(&self, key: &str, count: impl Into<ParamValue>) -> String {
        self.translate_or_key(key, Some(&Params::count_of(count)))
    }

    fn translate_or_key(&self, key: &str, params: Option<&Params>) -> String {
        self.translate(key, params).unwrap_or_else(|e| {
            frontkit_log::error!(target: "frontkit_i18n", "{}", e);
            key.to_string()
        })
    }

    /// Select the plural form of `key` to use for `count`.
    ///
    /// The locale's preferred category is used if the key has that form.
    /// Otherwise `other` is used, with a warning the first time it happens
    /// for the key and category.
    ///
    /// # Errors
    ///
    /// [`I18nError::MissingOtherForm`] if the preferred form is missing and
    /// there is no `other` form either.
    pub fn select_plural_category(&self, key: &str, count: f64) -> Result<PluralCategory> {
        if !count.is_finite() {
            return Ok(PluralCategory::Other);
        }

        let preferred = self.rules.category(count);
        let forms = self.translations.plural_forms(key);

        if forms.is_some_and(|forms| forms.contains(preferred)) {
            return Ok(preferred);
        }

        if forms.is_some_and(|forms| forms.contains(PluralCategory::Other)) {
            self.warn_fallback(key, preferred);
            return Ok(PluralCategory::Other);
        }

        Err(I18nError::MissingOtherForm {
            key: key.to_string(),
            locale: self.locale.clone(),
        })
    }

    fn warn_fallback(&self, key: &str, preferred: PluralCategory) {
        if !self.warned.lock().insert((key.to_string(), preferred)) {
            return;
        }

        (self.warning_sink)(&format!(
            "i18n: Missing plural form \".{}\" for \"{}\" locale. Falling back to \".other\".",
            preferred, self.locale
        ));
    }

    fn interpolate(&self, message: &str, params: Option<&Params>) -> Result<String> {
        if !PLACEHOLDER.is_match(message) {
            return Ok(message.to_string());
        }
        let params = params.ok_or(I18nError::MissingPlaceholderData)?;

        let mut result = String::with_capacity(message.len());
        let mut last = 0;

        for captures in PLACEHOLDER.captures_iter(message) {
            let (Some(placeholder), Some(name)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            result.push_str(&message[last..placeholder.start()]);

            match params.get(name.as_str()) {
                Some(ParamValue::Text(text)) => result.push_str(text),
                Some(ParamValue::Number(n)) => result.push_str(&self.format_number(*n)),
                Some(ParamValue::Bool(_) | ParamValue::Null) => {}
                None => {
                    return Err(I18nError::PlaceholderNotFound {
                        placeholder: placeholder.as_str().to_string(),
                    });
                }
            }

            last = placeholder.end();
        }

        result.push_str(&message[last..]);
        Ok(result)
    }

    fn format_number(&self, n: f64) -> String {
        match &self.number_format {
            Some(formatter) => formatter.format(n),
            None => plain_number(n),
        }
    }
}

impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator")
            .field("locale", &self.locale)
            .field("translations", &self.translations)
            .field("number_format", &self.number_format)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Translator`].
pub struct TranslatorBuilder {
    translations: Translations,
    locale: Option<String>,
    hint: Option<LocaleHint>,
    warning_sink: Option<WarningSink>,
}

impl TranslatorBuilder {
    /// Use this locale. Blank tags are ignored.
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Ambient locale used when no explicit locale is set.
    pub fn locale_hint(self, hint: impl Into<String>) -> Self {
        let hint = hint.into();
        self.locale_hint_with(move || Some(hint))
    }

    /// Ambient locale computed on demand; only called when no explicit
    /// locale is set.
    pub fn locale_hint_with<F>(mut self, hint: F) -> Self
    where
        F: FnOnce() -> Option<String> + 'static,
    {
        self.hint = Some(Box::new(hint));
        self
    }

    /// Where plural-fallback warnings go.
    pub fn warning_sink<F>(mut self, sink: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.warning_sink = Some(Arc::new(sink));
        self
    }

    pub fn build(self) -> Translator {
        let hint = self.hint;
        let locale = resolve_locale(self.locale.as_deref(), || hint.and_then(|hint| hint()));

        let number_format = Locale::parse(&locale)
            .ok()
            .and_then(|parsed| NumberFormatter::for_locale(&parsed));

        frontkit_log::debug!(
            target: "frontkit_i18n",
            "translator ready: locale={} keys={}",
            locale,
            self.translations.len()
        );

        Translator {
            rules: rules_for_locale(&locale),
            number_format,
            translations: self.translations,
            warning_sink: self.warning_sink.unwrap_or_else(log_warning_sink),
            warned: Mutex::new(HashSet::new()),
            locale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn translator(value: serde_json::Value, locale: &str) -> Translator {
        Translator::new(Translations::from_value(&value), Some(locale))
    }

    fn collecting(value: serde_json::Value, locale: &str) -> (Translator, Arc<Mutex<Vec<String>>>) {
        let warnings = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&warnings);
        let translator = Translator::builder(Translations::from_value(&value))
            .locale(locale)
            .warning_sink(move |message| sink.lock().push(message.to_string()))
            .build();
        (translator, warnings)
    }

    #[test]
    fn test_empty_key() {
        let t = translator(json!({}), "en");
        assert!(matches!(t.translate("", None), Err(I18nError::LookupKeyMissing)));
    }

    #[test]
    fn test_missing_key_returns_key() {
        let t = translator(json!({ "other": "x" }), "en");
        assert_eq!(t.translate("missingString", None).unwrap(), "missingString");
    }

    #[test]
    fn test_plain_string() {
        let t = translator(json!({ "textString": "Hello world" }), "en");
        assert_eq!(t.translate("textString", None).unwrap(), "Hello world");
        assert_eq!(t.t("textString"), "Hello world");
    }

    #[test]
    fn test_placeholders() {
        let t = translator(json!({ "nameString": "My name is %{name}" }), "en");
        let params = Params::new().with("name", "John");

        assert_eq!(t.translate("nameString", Some(&params)).unwrap(), "My name is John");
        assert!(matches!(
            t.translate("nameString", None),
            Err(I18nError::MissingPlaceholderData)
        ));

        let err = t.translate("nameString", Some(&Params::new())).unwrap_err();
        assert!(matches!(
            &err,
            I18nError::PlaceholderNotFound { placeholder } if placeholder == "%{name}"
        ));
        assert_eq!(
            err.to_string(),
            "i18n: no data found to replace %{name} placeholder in string"
        );
    }

    #[test]
    fn test_falsy_values() {
        let t = translator(
            json!({ "stock": "Stock level: %{quantity}", "age": "Age: %{age}" }),
            "en",
        );

        let quantity = Params::new().with("quantity", 0);
        assert_eq!(t.translate("stock", Some(&quantity)).unwrap(), "Stock level: 0");

        let age = Params::new().with("age", false);
        assert_eq!(t.translate("age", Some(&age)).unwrap(), "Age: ");

        let null = Params::new().with("age", ParamValue::Null);
        assert_eq!(t.translate("age", Some(&null)).unwrap(), "Age: ");
    }

    #[test]
    fn test_no_recursive_interpolation() {
        let t = translator(json!({ "greeting": "Hi %{name}, %{name}" }), "en");
        let params = Params::new().with("name", "%{other}");
        assert_eq!(
            t.translate("greeting", Some(&params)).unwrap(),
            "Hi %{other}, %{other}"
        );
    }

    #[test]
    fn test_unmatched_percent_text_is_kept() {
        let t = translator(json!({ "rate": "100% of %{ what }" }), "en");
        assert_eq!(t.translate("rate", None).unwrap(), "100% of %{ what }");
    }

    #[test]
    fn test_locale_number_formatting() {
        let messages = json!({ "ageString": "I am %{age} years old" });
        let params = Params::new().with("age", 2000);

        let en = translator(messages.clone(), "en");
        assert_eq!(
            en.translate("ageString", Some(&params)).unwrap(),
            "I am 2,000 years old"
        );

        let de = translator(messages, "de");
        assert_eq!(
            de.translate("ageString", Some(&params)).unwrap(),
            "I am 2.000 years old"
        );
    }

    #[test]
    fn test_fractional_counts_round_half_up() {
        let messages = json!({ "weight": "%{kg} kg" });

        let en = translator(messages.clone(), "en");
        let params = Params::new().with("kg", 0.0625);
        assert_eq!(en.translate("weight", Some(&params)).unwrap(), "0.063 kg");

        let pt = translator(messages.clone(), "pt-BR");
        let params = Params::new().with("kg", 2000.0625);
        assert_eq!(pt.translate("weight", Some(&params)).unwrap(), "2.000,063 kg");

        let unknown = translator(messages, "tlh");
        let params = Params::new().with("kg", 1e21);
        assert_eq!(unknown.translate("weight", Some(&params)).unwrap(), "1e+21 kg");
    }

    #[test]
    fn test_plural_selection() {
        let t = translator(
            json!({ "items": { "one": "%{count} item", "other": "%{count} items" } }),
            "en",
        );

        assert_eq!(t.select_plural_category("items", 1.0).unwrap(), PluralCategory::One);
        assert_eq!(t.select_plural_category("items", 5.0).unwrap(), PluralCategory::Other);
        assert_eq!(t.t_plural("items", 1), "1 item");
        assert_eq!(t.t_plural("items", 5), "5 items");
    }

    #[test]
    fn test_plural_without_count_returns_key() {
        let t = translator(json!({ "items": { "other": "%{count} items" } }), "en");
        assert_eq!(t.translate("items", None).unwrap(), "items");

        let text_count = Params::count_of("3");
        assert_eq!(t.translate("items", Some(&text_count)).unwrap(), "items");
    }

    #[test]
    fn test_missing_form_falls_back_to_other_once() {
        let (t, warnings) = collecting(json!({ "items": { "other": "%{count} items" } }), "en");

        assert_eq!(t.select_plural_category("items", 1.0).unwrap(), PluralCategory::Other);
        assert_eq!(t.t_plural("items", 1), "1 items");

        let warnings = warnings.lock();
        assert_eq!(
            *warnings,
            ["i18n: Missing plural form \".one\" for \"en\" locale. Falling back to \".other\"."]
        );
    }

    #[test]
    fn test_missing_other_form() {
        let t = translator(json!({}), "en");
        let err = t.select_plural_category("anything", 1.0).unwrap_err();
        assert!(matches!(
            err,
            I18nError::MissingOtherForm { ref key, ref locale } if key == "anything" && locale == "en"
        ));

        let t = translator(json!({ "items": { "few": "few" } }), "en");
        assert!(t.translate("items", Some(&Params::count_of(1))).is_err());
        assert_eq!(t.t_plural("items", 1), "items");
    }

    #[test]
    fn test_non_finite_count_is_other() {
        let t = translator(json!({}), "en");
        assert_eq!(
            t.select_plural_category("x", f64::NAN).unwrap(),
            PluralCategory::Other
        );
        assert_eq!(
            t.select_plural_category("x", f64::INFINITY).unwrap(),
            PluralCategory::Other
        );
    }

    #[test]
    fn test_locale_resolution() {
        let t = Translator::builder(Translations::new())
            .locale_hint("cy")
            .build();
        assert_eq!(t.locale(), "cy");

        let t = Translator::builder(Translations::new())
            .locale("gd")
            .locale_hint_with(|| panic!("hint should not be consulted"))
            .build();
        assert_eq!(t.locale(), "gd");

        let t = Translator::new(Translations::new(), None);
        assert_eq!(t.locale(), "en");
    }

    #[test]
    fn test_welsh_forms() {
        let t = translator(
            json!({ "words": {
                "zero": "zero", "one": "one", "two": "two",
                "few": "few", "many": "many", "other": "other"
            } }),
            "cy",
        );

        let got: Vec<String> = (0..8).map(|n| t.t_plural("words", n)).collect();
        assert_eq!(got, ["zero", "one", "two", "few", "other", "other", "many", "other"]);
    }

    #[test]
    fn test_default_sink_logs_warning() {
        let t = translator(json!({ "items": { "other": "many" } }), "en");
        let (_, records) = frontkit_log::capture(|| t.t_plural("items", 1));

        assert!(records.iter().any(|r| {
            r.level == frontkit_log::Level::Warn && r.message.contains("Missing plural form \".one\"")
        }));
    }

    #[test]
    fn test_translator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Translator>();
    }
}
