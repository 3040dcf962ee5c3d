//! Money formatting for console reports.

use serde::{Deserialize, Serialize};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("MXN")
    }
}

/// Separators used when rendering numbers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleConfig {
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

impl LocaleConfig {
    /// Resolves separators for a language tag; unknown tags use the defaults.
    pub fn for_tag(tag: &str) -> Self {
        match tag {
            "es-ES" | "de-DE" | "pt-BR" => Self {
                decimal_separator: ',',
                grouping_separator: '.',
            },
            "fr-FR" => Self {
                decimal_separator: ',',
                grouping_separator: ' ',
            },
            _ => Self::default(),
        }
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" | "MXN" | "ARS" | "CLP" | "COP" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" | "CLP" => 0,
        _ => 2,
    }
}

pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let mut body = format!("{:.*}", precision as usize, value);
    if locale.decimal_separator != '.' {
        if let Some(pos) = body.find('.') {
            body.replace_range(pos..=pos, &locale.decimal_separator.to_string());
        }
    }
    if let Some(pos) = body.find(locale.decimal_separator) {
        let int_part = group_signed(&body[..pos], locale.grouping_separator);
        body = format!("{}{}", int_part, &body[pos..]);
    } else {
        body = group_signed(&body, locale.grouping_separator);
    }
    body
}

fn group_signed(int_part: &str, separator: char) -> String {
    match int_part.strip_prefix('-') {
        Some(digits) => format!("-{}", group_digits(digits, separator)),
        None => group_digits(int_part, separator),
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}

/// Renders `amount` as `$12,345.67` style text.
pub fn format_money(amount: f64, code: &CurrencyCode, locale: &LocaleConfig) -> String {
    let precision = minor_units_for(code.as_str());
    let body = format_number(locale, amount.abs(), precision);
    let symbol = symbol_for(code.as_str());
    if amount < 0.0 {
        format!("-{}{}", symbol, body)
    } else {
        format!("{}{}", symbol, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        let locale = LocaleConfig::default();
        assert_eq!(format_number(&locale, 1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number(&locale, 999.0, 2), "999.00");
        assert_eq!(format_number(&locale, -1234.5, 1), "-1,234.5");
    }

    #[test]
    fn formats_money_with_symbol() {
        let code = CurrencyCode::default();
        let locale = LocaleConfig::default();
        assert_eq!(format_money(17500.0, &code, &locale), "$17,500.00");
        assert_eq!(format_money(-42.5, &code, &locale), "-$42.50");
    }

    #[test]
    fn european_locale_swaps_separators() {
        let locale = LocaleConfig::for_tag("es-ES");
        let code = CurrencyCode::new("eur");
        assert_eq!(format_money(12345.6, &code, &locale), "€12.345,60");
    }
}
