//! Locale-aware formatting of amounts, dates and percentages, plus the string
//! collation used by the sortable tables.

mod collate;

pub use collate::compare_locale;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{domain::CurrencySettings, errors::DataError};

/// Where the currency symbol sits relative to the number.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SymbolPosition {
    Prefix,
    Suffix,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DateOrder {
    MonthDayYear,
    DayMonthYear,
    YearMonthDay,
}

/// Separators and ordering conventions for one language tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub symbol_position: SymbolPosition,
    pub date_order: DateOrder,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "en-US".into(),
            decimal_separator: '.',
            grouping_separator: ',',
            symbol_position: SymbolPosition::Prefix,
            date_order: DateOrder::MonthDayYear,
        }
    }
}

impl LocaleConfig {
    /// Resolves conventions from a BCP 47 tag such as `en-US` or `de_DE`.
    ///
    /// Unknown languages fall back to `en-US` conventions.
    pub fn for_tag(tag: &str) -> Self {
        let normalized = tag.trim().replace('_', "-");
        let mut parts = normalized.split('-');
        let language = parts.next().unwrap_or("").to_ascii_lowercase();
        let region = parts.next().unwrap_or("").to_ascii_uppercase();

        let base = Self {
            language_tag: normalized.clone(),
            ..Self::default()
        };

        match language.as_str() {
            "en" => match region.as_str() {
                "" | "US" | "CA" | "PH" => base,
                _ => Self {
                    date_order: DateOrder::DayMonthYear,
                    ..base
                },
            },
            "de" | "es" | "it" | "nl" | "pt" | "da" | "id" | "tr" => Self {
                decimal_separator: ',',
                grouping_separator: '.',
                symbol_position: SymbolPosition::Suffix,
                date_order: DateOrder::DayMonthYear,
                ..base
            },
            "fr" | "sv" | "nb" | "fi" | "pl" | "cs" => Self {
                decimal_separator: ',',
                grouping_separator: ' ',
                symbol_position: SymbolPosition::Suffix,
                date_order: DateOrder::DayMonthYear,
                ..base
            },
            "ja" | "zh" | "ko" => Self {
                date_order: DateOrder::YearMonthDay,
                ..base
            },
            _ => base,
        }
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "CAD" => "CA$".into(),
        "AUD" => "A$".into(),
        "CHF" => "CHF".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" | "KRW" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let body = format!("{:.*}", precision as usize, value);
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (body.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };
    let mut out = String::from(sign);
    out.push_str(&group_digits(digits, locale.grouping_separator));
    if let Some(frac) = frac_part {
        out.push(locale.decimal_separator);
        out.push_str(frac);
    }
    out
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

/// Formats an amount in the reporting currency, e.g. `-$1,234.50` or `1.234,50 €`.
pub fn format_currency(amount: f64, currency: &CurrencySettings) -> String {
    let locale = LocaleConfig::for_tag(&currency.locale);
    let precision = minor_units_for(&currency.code);
    let body = format_number(&locale, amount.abs(), precision);
    let symbol = if currency.symbol.trim().is_empty() {
        symbol_for(&currency.code)
    } else {
        currency.symbol.clone()
    };
    let sign = if amount < 0.0 && body.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };
    match locale.symbol_position {
        SymbolPosition::Prefix => format!("{sign}{symbol}{body}"),
        SymbolPosition::Suffix => format!("{sign}{body} {symbol}"),
    }
}

/// Long-form date such as `January 15, 2025` (month-first locales) or
/// `15 January 2025` (day-first locales).
pub fn format_long_date(iso: &str, locale_tag: &str) -> Result<String, DataError> {
    let date = NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .map_err(|_| DataError::InvalidDate(iso.to_string()))?;
    let locale = LocaleConfig::for_tag(locale_tag);
    let month = month_label(date.month());
    Ok(match locale.date_order {
        DateOrder::MonthDayYear => format!("{} {}, {}", month, date.day(), date.year()),
        DateOrder::DayMonthYear => format!("{} {} {}", date.day(), month, date.year()),
        DateOrder::YearMonthDay => date.format("%Y-%m-%d").to_string(),
    })
}

/// Share of `total` held by `amount`, one decimal place. Non-positive totals yield `0.0%`.
pub fn format_percent(amount: f64, total: f64) -> String {
    if total > 0.0 {
        format!("{:.1}%", amount / total * 100.0)
    } else {
        "0.0%".to_string()
    }
}

fn month_label(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn currency(code: &str, symbol: &str, locale: &str) -> CurrencySettings {
        CurrencySettings {
            code: code.into(),
            symbol: symbol.into(),
            locale: locale.into(),
        }
    }

    #[test]
    fn formats_us_dollars() {
        let usd = currency("USD", "$", "en-US");
        assert_eq!(format_currency(1234567.891, &usd), "$1,234,567.89");
        assert_eq!(format_currency(-400.0, &usd), "-$400.00");
        assert_eq!(format_currency(0.0, &usd), "$0.00");
    }

    #[test]
    fn formats_euro_suffix_locale() {
        let eur = currency("EUR", "€", "de-DE");
        assert_eq!(format_currency(-1234.5, &eur), "-1.234,50 €");
    }

    #[test]
    fn yen_has_no_minor_units() {
        let jpy = currency("JPY", "", "ja-JP");
        assert_eq!(format_currency(1500.4, &jpy), "¥1,500");
    }

    #[test]
    fn long_date_follows_locale_order() {
        assert_eq!(
            format_long_date("2025-01-15", "en-US").unwrap(),
            "January 15, 2025"
        );
        assert_eq!(
            format_long_date("2025-01-15", "en-GB").unwrap(),
            "15 January 2025"
        );
        assert!(format_long_date("15/01/2025", "en-US").is_err());
    }

    #[test]
    fn percent_guards_zero_total() {
        assert_eq!(format_percent(250.0, 0.0), "0.0%");
        assert_eq!(format_percent(250.0, 1000.0), "25.0%");
        assert_eq!(format_percent(1.0, 3.0), "33.3%");
    }
}
