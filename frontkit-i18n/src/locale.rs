//! Locale tags and locale resolution
//!
//! A translator's locale comes from the caller when known, otherwise from
//! an ambient hint (typically the `lang` of the surrounding document),
//! otherwise `"en"`.

use crate::{I18nError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Locale used when neither the caller nor the ambient hint provides one.
pub const DEFAULT_LOCALE: &str = "en";

/// Represents a locale (language + optional script and region).
///
/// # Examples
///
/// ```
/// use frontkit_i18n::Locale;
///
/// let cy_gb = Locale::parse("cy-GB").unwrap();
/// assert_eq!(cy_gb.language, "cy");
/// assert_eq!(cy_gb.region.as_deref(), Some("GB"));
/// assert_eq!(cy_gb.tag(), "cy-GB");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locale {
    /// Language code (ISO 639, e.g., "en", "cy", "gd")
    pub language: String,
    /// Optional script (e.g., "Latn", "Hans")
    pub script: Option<String>,
    /// Optional region code (e.g., "GB", "PT", "419")
    pub region: Option<String>,
}

impl Locale {
    /// Create a new locale.
    pub fn new(language: impl Into<String>, region: Option<impl Into<String>>) -> Self {
        Self {
            language: language.into().to_lowercase(),
            script: None,
            region: region.map(|r| r.into().to_uppercase()),
        }
    }

    /// Parse from a BCP 47 tag (e.g., "en-GB", "zh-Hans-CN", "pt_PT").
    ///
    /// Subtags other than script and region (variants, extensions) are
    /// ignored.
    pub fn parse(tag: &str) -> Result<Self> {
        let mut parts = tag.trim().split(['-', '_']);

        let language = parts.next().unwrap_or_default().to_lowercase();
        if language.len() < 2
            || language.len() > 3
            || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(I18nError::InvalidLocale(tag.to_string()));
        }

        let mut script = None;
        let mut region = None;

        for part in parts {
            if part.len() == 4 && part.chars().all(|c| c.is_ascii_alphabetic()) && script.is_none() {
                let mut chars = part.chars();
                script = chars.next().map(|first| {
                    first
                        .to_uppercase()
                        .chain(chars.flat_map(|c| c.to_lowercase()))
                        .collect()
                });
            } else if part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()) {
                region = Some(part.to_uppercase());
            } else if part.len() == 3 && part.chars().all(|c| c.is_ascii_digit()) {
                // UN M.49 area code
                region = Some(part.to_string());
            }
        }

        Ok(Self {
            language,
            script,
            region,
        })
    }

    /// Get the canonical tag (e.g., "en-GB").
    pub fn tag(&self) -> String {
        let mut tag = self.language.clone();
        if let Some(ref script) = self.script {
            tag.push('-');
            tag.push_str(script);
        }
        if let Some(ref region) = self.region {
            tag.push('-');
            tag.push_str(region);
        }
        tag
    }

    /// Get language-only locale (strips region).
    pub fn language_only(&self) -> Self {
        Self {
            language: self.language.clone(),
            script: self.script.clone(),
            region: None,
        }
    }

    /// English
    pub fn en() -> Self {
        Self::new("en", None::<&str>)
    }

    /// English (United Kingdom)
    pub fn en_gb() -> Self {
        Self::new("en", Some("GB"))
    }

    /// Welsh
    pub fn cy() -> Self {
        Self::new("cy", None::<&str>)
    }

    /// German
    pub fn de() -> Self {
        Self::new("de", None::<&str>)
    }

    /// French
    pub fn fr() -> Self {
        Self::new("fr", None::<&str>)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag())
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self> {
        Locale::parse(s)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::en()
    }
}

/// Pick the locale tag a translator should use.
///
/// The explicit locale wins when non-blank; otherwise `hint` is consulted
/// (only then); otherwise [`DEFAULT_LOCALE`]. Tags are returned as given,
/// trimmed, so region-specific rule lookups (`pt-PT`) still match.
///
/// ```
/// use frontkit_i18n::resolve_locale;
///
/// assert_eq!(resolve_locale(Some("cy"), || Some("de".into())), "cy");
/// assert_eq!(resolve_locale(None, || Some("de".into())), "de");
/// assert_eq!(resolve_locale(Some(" "), || None), "en");
/// ```
pub fn resolve_locale<F>(explicit: Option<&str>, hint: F) -> String
where
    F: FnOnce() -> Option<String>,
{
    let non_blank = |s: &str| {
        let s = s.trim();
        (!s.is_empty()).then(|| s.to_string())
    };

    explicit
        .and_then(non_blank)
        .or_else(|| hint().as_deref().and_then(non_blank))
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
}

/// Language subtag of a raw tag, as written.
pub(crate) fn language_subtag(tag: &str) -> &str {
    tag.split(['-', '_']).next().unwrap_or(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parse() {
        let en = Locale::parse("en").unwrap();
        assert_eq!(en.language, "en");
        assert!(en.region.is_none());

        let pt = Locale::parse("pt_pt").unwrap();
        assert_eq!(pt.tag(), "pt-PT");

        let zh = Locale::parse("zh-hans-CN").unwrap();
        assert_eq!(zh.script.as_deref(), Some("Hans"));
        assert_eq!(zh.region.as_deref(), Some("CN"));

        let es = Locale::parse("es-419").unwrap();
        assert_eq!(es.region.as_deref(), Some("419"));
    }

    #[test]
    fn test_locale_parse_rejects_garbage() {
        assert!(Locale::parse("").is_err());
        assert!(Locale::parse("e").is_err());
        assert!(Locale::parse("english").is_err());
        assert!(Locale::parse("12").is_err());
        assert!("x-klingon".parse::<Locale>().is_err());
    }

    #[test]
    fn test_language_only() {
        assert_eq!(Locale::en_gb().language_only(), Locale::en());
    }

    #[test]
    fn test_resolve_locale_order() {
        let mut consulted = false;
        let tag = resolve_locale(Some("gd"), || {
            consulted = true;
            None
        });
        assert_eq!(tag, "gd");
        assert!(!consulted);

        assert_eq!(resolve_locale(None, || Some(" cy-GB ".into())), "cy-GB");
        assert_eq!(resolve_locale(None, || Some(String::new())), DEFAULT_LOCALE);
        assert_eq!(resolve_locale(Some(""), || None), DEFAULT_LOCALE);
    }

    #[test]
    fn test_language_subtag() {
        assert_eq!(language_subtag("pt-PT"), "pt");
        assert_eq!(language_subtag("cy"), "cy");
        assert_eq!(language_subtag("en_GB"), "en");
    }
}
