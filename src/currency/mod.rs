//! Amount rounding and rendering.
//!
//! Advice text depends on exact rounding. Every rendering path rounds the
//! exact binary value of the `f64` (converted losslessly to a [`Decimal`]),
//! halves away from zero, so `25.025` renders as `25.02` while `60.625`
//! renders as `60.63`.

use rust_decimal::{prelude::ToPrimitive, Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// The only currency the tracker displays.
pub const CURRENCY_SYMBOL: &str = "$";

const CENTS_PRECISION: u8 = 2;

/// Separator preferences for amounts shown in the shell.
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

fn rounded(value: f64, precision: u8) -> Option<Decimal> {
    Decimal::from_f64_retain(value).map(|exact| {
        exact.round_dp_with_strategy(
            u32::from(precision),
            RoundingStrategy::MidpointAwayFromZero,
        )
    })
}

/// Rounds `value` to `precision` decimal places.
///
/// Values outside the decimal range are returned unchanged.
pub fn round_to(value: f64, precision: u8) -> f64 {
    rounded(value, precision)
        .and_then(|decimal| decimal.to_f64())
        .unwrap_or(value)
}

pub fn round_to_cents(value: f64) -> f64 {
    round_to(value, CENTS_PRECISION)
}

fn fixed(value: f64, precision: u8) -> String {
    let places = usize::from(precision);
    match rounded(value, precision) {
        Some(decimal) => format!("{:.*}", places, decimal),
        None => format!("{:.*}", places, value),
    }
}

/// Two-decimal rendering without grouping, e.g. `30.00` or `1234.50`.
pub fn format_fixed(value: f64) -> String {
    fixed(value, CENTS_PRECISION)
}

/// `format_fixed` prefixed with the currency symbol, as embedded in advice text.
pub fn format_dollars(value: f64) -> String {
    format!("{}{}", CURRENCY_SYMBOL, format_fixed(value))
}

/// Share of `part` in `whole` as a whole percentage.
///
/// Returns 0 when `whole` is not positive.
pub fn percentage(part: f64, whole: f64) -> i64 {
    if whole <= 0.0 {
        return 0;
    }
    (part / whole * 100.0).round() as i64
}

/// Locale-aware number rendering with digit grouping.
pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let mut body = fixed(value, precision);
    let sign = if body.starts_with('-') {
        body.remove(0);
        "-"
    } else {
        ""
    };
    let (int_part, frac_part) = match body.find('.') {
        Some(pos) => (&body[..pos], Some(&body[pos + 1..])),
        None => (body.as_str(), None),
    };
    let grouped = group_digits(int_part, locale.grouping_separator);
    match frac_part {
        Some(frac) => format!("{sign}{grouped}{}{frac}", locale.decimal_separator),
        None => format!("{sign}{grouped}"),
    }
}

/// Currency rendering for the shell, e.g. `$1,234.50`.
pub fn format_currency(locale: &LocaleConfig, amount: f64) -> String {
    let body = format_number(locale, amount.abs(), CENTS_PRECISION);
    if amount < 0.0 && round_to_cents(amount) != 0.0 {
        format!("-{}{}", CURRENCY_SYMBOL, body)
    } else {
        format!("{}{}", CURRENCY_SYMBOL, body)
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_rounds_exact_halves_up() {
        assert_eq!(format_fixed(30.0), "30.00");
        assert_eq!(format_fixed(0.125), "0.13");
        assert_eq!(format_fixed(0.375), "0.38");
        assert_eq!(format_fixed(33.333333), "33.33");
        assert_eq!(format_fixed(1234.5), "1234.50");
    }

    #[test]
    fn fixed_follows_binary_value_below_half() {
        // Each of these is stored slightly below the written half.
        assert_eq!(format_fixed(2.675), "2.67");
        assert_eq!(format_fixed(1.005), "1.00");
        assert_eq!(format_fixed(25.025), "25.02");
        assert_eq!(format_fixed(30.005), "30.00");
        assert_eq!(format_fixed(50.025), "50.02");
    }

    #[test]
    fn fixed_rounds_exact_ties_away_from_zero() {
        assert_eq!(format_fixed(60.625), "60.63");
        assert_eq!(format_fixed(0.125), "0.13");
        assert_eq!(round_to_cents(60.625), 60.63);
    }

    #[test]
    fn percentage_rounds_to_nearest() {
        assert_eq!(percentage(60.0, 70.0), 86);
        assert_eq!(percentage(1.0, 8.0), 13);
        assert_eq!(percentage(1.0, 3.0), 33);
        assert_eq!(percentage(5.0, 5.0), 100);
        assert_eq!(percentage(5.0, 0.0), 0);
    }

    #[test]
    fn groups_thousands_with_locale_separators() {
        let locale = LocaleConfig::default();
        assert_eq!(format_number(&locale, 1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number(&locale, 999.0, 0), "999");

        let european = LocaleConfig {
            decimal_separator: ',',
            grouping_separator: '.',
        };
        assert_eq!(format_number(&european, 1234.5, 2), "1.234,50");
    }

    #[test]
    fn currency_prefixes_symbol() {
        let locale = LocaleConfig::default();
        assert_eq!(format_currency(&locale, 0.0), "$0.00");
        assert_eq!(format_currency(&locale, 1234.5), "$1,234.50");
        assert_eq!(format_currency(&locale, -2.5), "-$2.50");
        assert_eq!(format_dollars(70.0), "$70.00");
    }
}
