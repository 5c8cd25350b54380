//! Currency and percentage display formatting

use clinica_common::ClinicaError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Display locale for amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    /// Brazilian Portuguese, BRL
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    /// US English, USD
    #[serde(rename = "en-US")]
    EnUs,
}

impl Locale {
    pub fn currency_format(&self) -> CurrencyFormat {
        match self {
            Locale::PtBr => CurrencyFormat::pt_br(),
            Locale::EnUs => CurrencyFormat::en_us(),
        }
    }
}

impl FromStr for Locale {
    type Err = ClinicaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().replace('_', "-").to_ascii_lowercase().as_str() {
            "pt-br" => Ok(Locale::PtBr),
            "en-us" => Ok(Locale::EnUs),
            other => Err(ClinicaError::Config(format!("unsupported locale: {}", other))),
        }
    }
}

/// Symbol and separators for rendering amounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    /// Prefix including any spacing, e.g. `"R$\u{a0}"`
    pub symbol: &'static str,
    pub decimal_separator: char,
    pub group_separator: char,
}

impl CurrencyFormat {
    pub fn pt_br() -> Self {
        Self {
            symbol: "R$\u{a0}",
            decimal_separator: ',',
            group_separator: '.',
        }
    }

    pub fn en_us() -> Self {
        Self {
            symbol: "$",
            decimal_separator: '.',
            group_separator: ',',
        }
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::pt_br()
    }
}

/// Render `amount` with two decimals and thousands grouping
pub fn format_currency(amount: Decimal, format: &CurrencyFormat) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let (integer, fraction) = split_fixed(rounded.abs(), 2);
    format!(
        "{}{}{}{}{}",
        sign,
        format.symbol,
        group_digits(&integer, format.group_separator),
        format.decimal_separator,
        fraction
    )
}

/// Render `value` percent with one decimal, e.g. `-10,0%`
pub fn format_percentage(value: Decimal, format: &CurrencyFormat) -> String {
    let rounded = value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let (integer, fraction) = split_fixed(rounded.abs(), 1);
    format!(
        "{}{}{}{}%",
        sign, integer, format.decimal_separator, fraction
    )
}

/// Integer and zero-padded fractional digits of a non-negative amount
fn split_fixed(amount: Decimal, dp: usize) -> (String, String) {
    let text = format!("{:.*}", dp, amount);
    match text.split_once('.') {
        Some((integer, fraction)) => (integer.to_string(), fraction.to_string()),
        None => (text, "0".repeat(dp)),
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_pt_br_currency() {
        let fmt = CurrencyFormat::pt_br();
        assert_eq!(format_currency(dec!(1234.56), &fmt), "R$\u{a0}1.234,56");
        assert_eq!(format_currency(dec!(900), &fmt), "R$\u{a0}900,00");
        assert_eq!(format_currency(dec!(0), &fmt), "R$\u{a0}0,00");
        assert_eq!(format_currency(dec!(1250000.5), &fmt), "R$\u{a0}1.250.000,50");
    }

    #[test]
    fn test_en_us_currency() {
        let fmt = CurrencyFormat::en_us();
        assert_eq!(format_currency(dec!(16100), &fmt), "$16,100.00");
        assert_eq!(format_currency(dec!(3351.04), &fmt), "$3,351.04");
    }

    #[test]
    fn test_negative_currency() {
        let fmt = CurrencyFormat::pt_br();
        assert_eq!(format_currency(dec!(-100), &fmt), "-R$\u{a0}100,00");
        assert_eq!(format_currency(dec!(-0.001), &fmt), "R$\u{a0}0,00");
    }

    #[test]
    fn test_currency_rounding() {
        let fmt = CurrencyFormat::en_us();
        assert_eq!(format_currency(dec!(10.005), &fmt), "$10.01");
        assert_eq!(format_currency(dec!(10.004), &fmt), "$10.00");
        assert_eq!(format_currency(dec!(999.999), &fmt), "$1,000.00");
    }

    #[test]
    fn test_percentage() {
        let pt = CurrencyFormat::pt_br();
        let us = CurrencyFormat::en_us();
        assert_eq!(format_percentage(dec!(-10), &pt), "-10,0%");
        assert_eq!(format_percentage(dec!(0), &pt), "0,0%");
        assert_eq!(format_percentage(dec!(12.345), &us), "12.3%");
        assert_eq!(format_percentage(dec!(-8.571428), &us), "-8.6%");
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!("pt-BR".parse::<Locale>().unwrap(), Locale::PtBr);
        assert_eq!("en_US".parse::<Locale>().unwrap(), Locale::EnUs);
        assert!("fr-FR".parse::<Locale>().is_err());
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("1", '.'), "1");
        assert_eq!(group_digits("123", '.'), "123");
        assert_eq!(group_digits("1234", '.'), "1.234");
        assert_eq!(group_digits("123456", ','), "123,456");
        assert_eq!(group_digits("1234567", ','), "1,234,567");
    }
}
