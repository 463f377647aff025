//! Pluralization Rules
//!
//! Picks the CLDR plural category for a count. Different languages have
//! different plural forms: English has two (one, other), Russian uses
//! three of them for integers, Arabic and Welsh use all six.
//!
//! Two rule sources implement [`PluralRules`]:
//!
//! - [`FallbackRules`], a hand-written table covering the language
//!   families the default translations ship with. It always works on
//!   `abs(floor(count))`.
//! - `NativeRules` (with the `icu` feature), full CLDR data from ICU4X.
//!   Preferred whenever it can be built for the locale.

use crate::locale::language_subtag;
use crate::{I18nError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// CLDR plural categories.
///
/// Not all languages use all categories.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PluralCategory {
    /// Zero items (Arabic, Welsh)
    Zero,
    /// One item (most languages)
    One,
    /// Two items (Arabic, Welsh, Irish, Scottish Gaelic)
    Two,
    /// Few items (Slavic languages, Celtic languages, Arabic)
    Few,
    /// Many items (Slavic languages, Arabic, Spanish millions)
    Many,
    /// All other cases
    Other,
}

impl PluralCategory {
    /// Every category, in CLDR order.
    pub const ALL: [PluralCategory; 6] = [
        PluralCategory::Zero,
        PluralCategory::One,
        PluralCategory::Two,
        PluralCategory::Few,
        PluralCategory::Many,
        PluralCategory::Other,
    ];

    /// Parse a category tag. Tags are exact and lower-case, as used for
    /// translation keys.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "zero" => Some(Self::Zero),
            "one" => Some(Self::One),
            "two" => Some(Self::Two),
            "few" => Some(Self::Few),
            "many" => Some(Self::Many),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// Convert to string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::Two => "two",
            Self::Few => "few",
            Self::Many => "many",
            Self::Other => "other",
        }
    }
}

impl FromStr for PluralCategory {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| I18nError::InvalidPluralCategory(s.to_string()))
    }
}

impl std::fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Plural rules for a specific language.
pub trait PluralRules: Send + Sync {
    /// Get the plural category for a number.
    fn category(&self, n: f64) -> PluralCategory;

    /// Get all categories used by this language.
    fn categories(&self) -> &[PluralCategory];
}

/// Get the plural category for a count using the built-in table.
///
/// Unknown locales always yield [`PluralCategory::Other`].
///
/// # Example
///
/// ```
/// use frontkit_i18n::{plural_category, PluralCategory};
///
/// assert_eq!(plural_category(1, "en"), PluralCategory::One);
/// assert_eq!(plural_category(0, "en"), PluralCategory::Other);
/// assert_eq!(plural_category(6, "cy"), PluralCategory::Many);
/// assert_eq!(plural_category(1, "tlh"), PluralCategory::Other);
/// ```
pub fn plural_category(n: impl Into<f64>, locale: &str) -> PluralCategory {
    let n = n.into();
    match FallbackRules::for_locale(locale) {
        Some(rules) => rules.category(n),
        None => PluralCategory::Other,
    }
}

/// Choose the best available rules for a locale tag.
///
/// Native rules are used when compiled in and constructible; otherwise the
/// fallback table; otherwise a rule set that only knows `other`.
pub fn rules_for_locale(locale: &str) -> Box<dyn PluralRules> {
    #[cfg(feature = "icu")]
    if let Some(native) = NativeRules::try_new(locale) {
        return Box::new(native);
    }

    match FallbackRules::for_locale(locale) {
        Some(rules) => Box::new(rules),
        None => Box::new(OtherOnly),
    }
}

// ============================================================================
// Fallback Rule Table
// ============================================================================

/// Hand-written rule families, matching `Intl.PluralRules` for the
/// languages they list on non-negative integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackRules {
    Arabic,
    Chinese,
    French,
    German,
    Irish,
    Russian,
    Scottish,
    Spanish,
    Welsh,
}

impl FallbackRules {
    const TABLE: [(FallbackRules, &'static [&'static str]); 9] = [
        (FallbackRules::Arabic, &["ar"]),
        (
            FallbackRules::Chinese,
            &["my", "zh", "id", "ja", "jv", "ko", "ms", "th", "vi"],
        ),
        (
            FallbackRules::French,
            &["hy", "bn", "fr", "gu", "hi", "fa", "pa", "zu"],
        ),
        (
            FallbackRules::German,
            &[
                "af", "sq", "az", "eu", "bg", "ca", "da", "nl", "en", "et", "fi", "ka", "de",
                "el", "hu", "lb", "no", "so", "sw", "sv", "ta", "te", "tr", "ur",
            ],
        ),
        (FallbackRules::Irish, &["ga"]),
        (FallbackRules::Russian, &["ru", "uk"]),
        (FallbackRules::Scottish, &["gd"]),
        (FallbackRules::Spanish, &["pt-PT", "it", "es"]),
        (FallbackRules::Welsh, &["cy"]),
    ];

    /// Find the family for a locale tag: the full tag first, then its
    /// language subtag. Both comparisons ignore ASCII case.
    pub fn for_locale(locale: &str) -> Option<Self> {
        let language = language_subtag(locale);

        Self::TABLE.iter().find_map(|(rules, languages)| {
            languages
                .iter()
                .any(|l| l.eq_ignore_ascii_case(locale) || l.eq_ignore_ascii_case(language))
                .then_some(*rules)
        })
    }

    fn select(&self, n: f64) -> PluralCategory {
        use PluralCategory::*;

        match self {
            FallbackRules::Arabic => {
                let last_two = n % 100.0;
                if n == 0.0 {
                    Zero
                } else if n == 1.0 {
                    One
                } else if n == 2.0 {
                    Two
                } else if (3.0..=10.0).contains(&last_two) {
                    Few
                } else if (11.0..=99.0).contains(&last_two) {
                    Many
                } else {
                    Other
                }
            }
            FallbackRules::Chinese => Other,
            FallbackRules::French => {
                if n == 0.0 || n == 1.0 {
                    One
                } else {
                    Other
                }
            }
            FallbackRules::German => {
                if n == 1.0 {
                    One
                } else {
                    Other
                }
            }
            FallbackRules::Irish => {
                if n == 1.0 {
                    One
                } else if n == 2.0 {
                    Two
                } else if (3.0..=6.0).contains(&n) {
                    Few
                } else if (7.0..=10.0).contains(&n) {
                    Many
                } else {
                    Other
                }
            }
            FallbackRules::Russian => {
                let last_two = n % 100.0;
                let last = last_two % 10.0;
                if last == 1.0 && last_two != 11.0 {
                    One
                } else if (2.0..=4.0).contains(&last) && !(12.0..=14.0).contains(&last_two) {
                    Few
                } else if last == 0.0
                    || (5.0..=9.0).contains(&last)
                    || (11.0..=14.0).contains(&last_two)
                {
                    Many
                } else {
                    Other
                }
            }
            FallbackRules::Scottish => {
                if n == 1.0 || n == 11.0 {
                    One
                } else if n == 2.0 || n == 12.0 {
                    Two
                } else if (3.0..=10.0).contains(&n) || (13.0..=19.0).contains(&n) {
                    Few
                } else {
                    Other
                }
            }
            FallbackRules::Spanish => {
                if n == 1.0 {
                    One
                } else if n != 0.0 && n % 1_000_000.0 == 0.0 {
                    Many
                } else {
                    Other
                }
            }
            FallbackRules::Welsh => match n {
                0.0 => Zero,
                1.0 => One,
                2.0 => Two,
                3.0 => Few,
                6.0 => Many,
                _ => Other,
            },
        }
    }
}

impl PluralRules for FallbackRules {
    fn category(&self, n: f64) -> PluralCategory {
        if !n.is_finite() {
            return PluralCategory::Other;
        }
        self.select(n.floor().abs())
    }

    fn categories(&self) -> &[PluralCategory] {
        use PluralCategory::*;

        match self {
            FallbackRules::Arabic | FallbackRules::Welsh => &PluralCategory::ALL,
            FallbackRules::Chinese => &[Other],
            FallbackRules::French | FallbackRules::German => &[One, Other],
            FallbackRules::Irish => &[One, Two, Few, Many, Other],
            FallbackRules::Russian => &[One, Few, Many, Other],
            FallbackRules::Scottish => &[One, Two, Few, Other],
            FallbackRules::Spanish => &[One, Many, Other],
        }
    }
}

/// Rules for locales nothing else knows about.
struct OtherOnly;

impl PluralRules for OtherOnly {
    fn category(&self, _n: f64) -> PluralCategory {
        PluralCategory::Other
    }

    fn categories(&self) -> &[PluralCategory] {
        &[PluralCategory::Other]
    }
}

// ============================================================================
// Native (ICU4X) Rules
// ============================================================================

/// CLDR cardinal rules backed by ICU4X compiled data.
#[cfg(feature = "icu")]
pub struct NativeRules {
    rules: icu_plurals::PluralRules,
    categories: Vec<PluralCategory>,
}

#[cfg(feature = "icu")]
impl NativeRules {
    /// Build rules for a tag; `None` if ICU cannot parse it or has no data.
    pub fn try_new(locale: &str) -> Option<Self> {
        let locale: icu_locid::Locale = locale.parse().ok()?;
        let rules = icu_plurals::PluralRules::try_new(
            &(&locale).into(),
            icu_plurals::PluralRuleType::Cardinal,
        )
        .ok()?;
        let categories = rules.categories().map(PluralCategory::from).collect();

        Some(Self { rules, categories })
    }
}

#[cfg(feature = "icu")]
impl PluralRules for NativeRules {
    fn category(&self, n: f64) -> PluralCategory {
        if !n.is_finite() {
            return PluralCategory::Other;
        }

        match format!("{}", n.abs()).parse::<icu_plurals::PluralOperands>() {
            Ok(operands) => self.rules.category_for(operands).into(),
            Err(_) => PluralCategory::Other,
        }
    }

    fn categories(&self) -> &[PluralCategory] {
        &self.categories
    }
}

#[cfg(feature = "icu")]
impl From<icu_plurals::PluralCategory> for PluralCategory {
    fn from(category: icu_plurals::PluralCategory) -> Self {
        match category {
            icu_plurals::PluralCategory::Zero => Self::Zero,
            icu_plurals::PluralCategory::One => Self::One,
            icu_plurals::PluralCategory::Two => Self::Two,
            icu_plurals::PluralCategory::Few => Self::Few,
            icu_plurals::PluralCategory::Many => Self::Many,
            icu_plurals::PluralCategory::Other => Self::Other,
        }
    }
}
