//! Tick label formatting: currency, SI-prefixed currency, whole years, percentages.

use num_format::{Locale, ToFormattedString};

/// Map a user-provided locale tag to a `num_format::Locale` and its decimal separator char.
///
/// Supported tags (case-insensitive): `en`, `us`, `en_US`, `de`, `de_DE`, `german`,
/// `fr`, `es`, `it`, `pt`, `nl`. Defaults to English.
pub fn map_locale(tag: &str) -> (&'static Locale, char) {
    match tag.to_lowercase().as_str() {
        "de" | "de_de" | "german" => (&Locale::de, ','),
        "fr" | "fr_fr" => (&Locale::fr, ','),
        "es" | "es_es" => (&Locale::es, ','),
        "it" | "it_it" => (&Locale::it, ','),
        "pt" | "pt_pt" | "pt_br" => (&Locale::pt, ','),
        "nl" | "nl_nl" => (&Locale::nl, ','),
        _ => (&Locale::en, '.'), // default
    }
}

/// Formatting choices shared by all axes of one dashboard.
#[derive(Debug, Clone, Copy)]
pub struct NumberFormat {
    locale: &'static Locale,
    decimal: char,
}

impl NumberFormat {
    pub fn new(locale_tag: &str) -> Self {
        let (locale, decimal) = map_locale(locale_tag);
        Self { locale, decimal }
    }

    /// Whole dollars with thousands separators, e.g. `$120,000`.
    pub fn currency(&self, v: f64) -> String {
        let n = v.round() as i64;
        if n < 0 {
            format!("-${}", (-n).to_formatted_string(self.locale))
        } else {
            format!("${}", n.to_formatted_string(self.locale))
        }
    }

    /// Dollars with an SI prefix and two significant digits, e.g. `$150k`, `$1.2M`.
    pub fn currency_si(&self, v: f64) -> String {
        let sign = if v < 0.0 { "-" } else { "" };
        let a = v.abs();
        if a == 0.0 || !a.is_finite() {
            return "$0".to_string();
        }
        // Round to two significant digits first so 999_999 becomes "1.0M" territory.
        let magnitude = a.log10().floor();
        let rounded = (a / 10f64.powf(magnitude - 1.0)).round() * 10f64.powf(magnitude - 1.0);
        let exp3 = ((rounded.log10().floor() / 3.0).floor() * 3.0).clamp(-24.0, 24.0);
        let prefix = match exp3 as i32 {
            3 => "k",
            6 => "M",
            9 => "G",
            12 => "T",
            -3 => "m",
            -6 => "µ",
            _ => "",
        };
        let mantissa = rounded / 10f64.powf(exp3);
        let int_digits = mantissa.log10().floor() as i32 + 1;
        let decimals = (2 - int_digits).max(0) as usize;
        let body = format!("{:.*}", decimals, mantissa).replace('.', &self.decimal.to_string());
        format!("{sign}${body}{prefix}")
    }

    /// Integer labels (years); `None` for non-integer ticks so they can be skipped.
    pub fn integer(&self, v: f64) -> Option<String> {
        ((v - v.round()).abs() < 1e-9).then(|| format!("{}", v.round() as i64))
    }

    /// Percent labels for values already expressed in 0..100.
    pub fn percent(&self, v: f64) -> String {
        if (v - v.round()).abs() < 1e-9 {
            format!("{}%", v.round() as i64)
        } else {
            format!("{:.1}%", v).replace('.', &self.decimal.to_string())
        }
    }
}
