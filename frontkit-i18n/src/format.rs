//! Number Formatting
//!
//! Locale-aware rendering of numeric placeholder values ("2,000" in
//! English, "2.000" in German).

use crate::Locale;

const NARROW_NBSP: &str = "\u{202F}";
const NBSP: &str = "\u{00A0}";

/// Number formatting configuration for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormatter {
    /// Decimal separator
    pub decimal_separator: &'static str,
    /// Grouping (thousands) separator
    pub group_separator: &'static str,
    /// Maximum fraction digits
    pub max_fraction_digits: usize,
    /// Use grouping separators
    pub use_grouping: bool,
    /// Digits required in the leading group before any grouping happens
    pub min_grouping_digits: usize,
}

impl NumberFormatter {
    /// Formatter for a locale, or `None` if its conventions are unknown.
    pub fn for_locale(locale: &Locale) -> Option<Self> {
        let (decimal_separator, group_separator) = number_separators(&locale.language)?;
        let min_grouping_digits = match (locale.language.as_str(), locale.region.as_deref()) {
            ("es" | "pl", _) | ("pt", Some("PT")) => 2,
            _ => 1,
        };

        Some(Self {
            decimal_separator,
            group_separator,
            max_fraction_digits: 3,
            use_grouping: true,
            min_grouping_digits,
        })
    }

    /// Set maximum fraction digits.
    pub fn max_fraction_digits(mut self, digits: usize) -> Self {
        self.max_fraction_digits = digits;
        self
    }

    /// Set whether to use grouping separators.
    pub fn use_grouping(mut self, use_grouping: bool) -> Self {
        self.use_grouping = use_grouping;
        self
    }

    /// Format a number.
    pub fn format(&self, n: f64) -> String {
        if n.is_nan() {
            return "NaN".to_string();
        }
        if n.is_infinite() {
            let infinity = if n < 0.0 { "-∞" } else { "∞" };
            return infinity.to_string();
        }

        let (integer_part, fraction_part) = round_half_expand(n.abs(), self.max_fraction_digits);

        let mut result = String::with_capacity(integer_part.len() + fraction_part.len() + 8);
        if n < 0.0 && (integer_part != "0" || !fraction_part.is_empty()) {
            result.push('-');
        }

        if self.use_grouping && integer_part.len() >= 3 + self.min_grouping_digits {
            result.push_str(&add_grouping(&integer_part, self.group_separator));
        } else {
            result.push_str(&integer_part);
        }

        if !fraction_part.is_empty() {
            result.push_str(self.decimal_separator);
            result.push_str(&fraction_part);
        }

        result
    }
}

/// Format a number for a locale tag.
///
/// Locales whose conventions are unknown get the plain number.
///
/// # Example
///
/// ```
/// use frontkit_i18n::format_number;
///
/// assert_eq!(format_number(1234567.891, "en"), "1,234,567.891");
/// assert_eq!(format_number(1234567.891, "de"), "1.234.567,891");
/// assert_eq!(format_number(2000.0, "es"), "2000");
/// assert_eq!(format_number(2000.0, "tlh"), "2000");
/// ```
pub fn format_number(n: f64, locale: &str) -> String {
    Locale::parse(locale)
        .ok()
        .and_then(|locale| NumberFormatter::for_locale(&locale))
        .map(|formatter| formatter.format(n))
        .unwrap_or_else(|| plain_number(n))
}

/// A number without any locale conventions.
///
/// Very large and very small magnitudes use exponent notation
/// (`1e+21`, `1.5e-7`).
pub(crate) fn plain_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let exponential = format!("{n:e}");
        match exponential.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => exponential,
        }
    } else {
        n.to_string()
    }
}

/// Round a non-negative number to `digits` fraction digits, ties away from
/// zero, returning the integer digits and the fraction digits without
/// trailing zeros.
///
/// Rounding works on the shortest decimal form of `n`, so `1.005` rounds
/// to two digits as `1.01`.
fn round_half_expand(n: f64, digits: usize) -> (String, String) {
    let shortest = n.to_string();
    let (integer, fraction) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    if fraction.len() <= digits {
        return (integer.to_string(), fraction.trim_end_matches('0').to_string());
    }

    let mut kept: Vec<u8> = integer.bytes().chain(fraction.bytes().take(digits)).collect();
    let mut integer_len = integer.len();

    if fraction.as_bytes()[digits] >= b'5' {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
            integer_len += 1;
        }
    }

    let kept = String::from_utf8_lossy(&kept);
    let (integer, fraction) = kept.split_at(integer_len);
    (integer.to_string(), fraction.trim_end_matches('0').to_string())
}

/// Get (decimal, grouping) separators for a language.
fn number_separators(language: &str) -> Option<(&'static str, &'static str)> {
    let separators = match language {
        // Period decimal, comma grouping
        "en" | "cy" | "ga" | "gd" | "zh" | "ja" | "ko" | "th" | "ms" | "he" | "sw" => {
            (".", ",")
        }

        // Comma decimal, period grouping
        "de" | "es" | "it" | "pt" | "nl" | "da" | "id" | "vi" | "tr" | "el" | "ro" | "ca"
        | "hr" | "sl" => (",", "."),

        // Comma decimal, narrow space grouping
        "fr" => (",", NARROW_NBSP),

        // Comma decimal, space grouping
        "sv" | "no" | "nb" | "fi" | "pl" | "cs" | "sk" | "hu" | "bg" | "ru" | "uk" | "et"
        | "lt" | "lv" | "af" => (",", NBSP),

        _ => return None,
    };

    Some(separators)
}

/// Add grouping separators to an integer string.
fn add_grouping(s: &str, sep: &str) -> String {
    let len = s.len();
    let mut result = String::with_capacity(len + (len / 3) * sep.len());

    for (i, c) in s.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push_str(sep);
        }
        result.push(c);
    }

    result
}
