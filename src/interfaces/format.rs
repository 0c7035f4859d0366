//! Locale-aware rendering of money and dates for receipts.

use crate::domain::ports::{CurrencyFormatter, DateFormatter};
use chrono::{NaiveDate, NaiveTime};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en-US")]
    EnUs,
}

impl Locale {
    fn separators(self) -> (char, char) {
        match self {
            Locale::PtBr => ('.', ','),
            Locale::EnUs => (',', '.'),
        }
    }

    fn long_date_pattern(self) -> (&'static str, chrono::Locale) {
        match self {
            Locale::PtBr => ("%-d de %B de %Y", chrono::Locale::pt_BR),
            Locale::EnUs => ("%B %-d, %Y", chrono::Locale::en_US),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Brl,
    Usd,
    Eur,
}

impl Currency {
    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Brl => "R$",
            Currency::Usd => "$",
            Currency::Eur => "€",
        }
    }
}

/// Two-decimal currency rendering, e.g. `R$ 1.234,56` or `$1,234.56`.
///
/// `pt-BR` separates symbol and number with a no-break space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CurrencyFormat {
    locale: Locale,
    currency: Currency,
}

impl CurrencyFormat {
    pub fn new(locale: Locale, currency: Currency) -> Self {
        Self { locale, currency }
    }
}

impl CurrencyFormatter for CurrencyFormat {
    fn format(&self, amount: Decimal) -> String {
        let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);

        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let digits = rounded.abs().to_string();
        let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

        let (group, decimal) = self.locale.separators();
        let number = format!("{}{}{}", group_thousands(int_part, group), decimal, frac_part);

        match self.locale {
            Locale::PtBr => format!("{sign}{}\u{a0}{number}", self.currency.symbol()),
            Locale::EnUs => format!("{sign}{}{number}", self.currency.symbol()),
        }
    }
}

fn group_thousands(digits: &str, separator: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

/// Long-form date, e.g. `10 de novembro de 2020` or `November 10, 2020`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LongDateFormat {
    locale: Locale,
}

impl LongDateFormat {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }
}

impl DateFormatter for LongDateFormat {
    fn format(&self, date: NaiveDate) -> String {
        let (pattern, locale) = self.locale.long_date_pattern();
        date.and_time(NaiveTime::MIN)
            .and_utc()
            .format_localized(pattern, locale)
            .to_string()
    }
}
