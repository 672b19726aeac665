//! Display formatting for amounts, dates, times, phones and zip codes (pt-BR conventions).
//!
//! Everything here is pure. Inputs that cannot be parsed are returned unchanged so a bad
//! stored value still shows up on screen.

use crate::model::Money;
use crate::order_table::{parse_time, DATE_FORMAT};
use chrono::NaiveDate;
use rust_decimal::RoundingStrategy;

pub const CURRENCY_SYMBOL: &str = "R$";

const MAX_PHONE_DIGITS: usize = 11;

/// `1234.5` → `R$ 1.234,50`.
pub fn format_currency(amount: Money) -> String {
    format_money(amount, CURRENCY_SYMBOL)
}

/// Two decimals, midpoint away from zero, `.` thousands separator and `,` decimal mark.
pub fn format_money(amount: Money, symbol: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let mut magnitude = rounded.abs();
    magnitude.rescale(2);
    let plain = magnitude.to_string();
    let (units, cents) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{symbol} {},{cents}", group_thousands(units))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

/// `YYYY-MM-DD` → `DD/MM/YYYY`. The date is pinned to noon before formatting so no zone
/// offset can move it to a neighbouring day.
pub fn format_date(iso_date: &str) -> String {
    NaiveDate::parse_from_str(iso_date.trim(), DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .map(|noon| noon.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| iso_date.to_string())
}

/// `HH:mm:ss` or `HH:mm` → `HH:mm`.
pub fn format_time(raw: &str) -> String {
    parse_time(raw.trim())
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Digits only, at most 11 (two-digit area code plus a nine-digit mobile number).
pub fn normalize_phone(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_digit)
        .take(MAX_PHONE_DIGITS)
        .collect()
}

/// `(11) 9 8765-4321` for mobiles, `(11) 3456-7890` for landlines, bare digits otherwise.
pub fn format_phone(input: &str) -> String {
    let digits = normalize_phone(input);
    match digits.len() {
        11 => format!(
            "({}) {} {}-{}",
            &digits[..2],
            &digits[2..3],
            &digits[3..7],
            &digits[7..]
        ),
        10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        _ => digits,
    }
}

/// `13010000` → `13010-000`.
pub fn format_zip_code(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    if digits.len() == 8 {
        format!("{}-{}", &digits[..5], &digits[5..])
    } else {
        input.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn currency_uses_brazilian_separators() {
        assert_eq!(format_currency(dec!(1234.5)), "R$ 1.234,50");
        assert_eq!(format_currency(dec!(0)), "R$ 0,00");
        assert_eq!(format_currency(dec!(102)), "R$ 102,00");
        assert_eq!(format_currency(dec!(1234567.891)), "R$ 1.234.567,89");
        assert_eq!(format_currency(dec!(-30)), "-R$ 30,00");
    }

    #[test]
    fn currency_rounds_midpoint_away_from_zero() {
        assert_eq!(format_currency(dec!(0.125)), "R$ 0,13");
        assert_eq!(format_currency(dec!(2.675)), "R$ 2,68");
        assert_eq!(format_currency(dec!(-0.001)), "R$ 0,00");
        assert_eq!(format_money(dec!(10), "US$"), "US$ 10,00");
    }

    #[test]
    fn dates_render_day_first() {
        assert_eq!(format_date("2024-01-31"), "31/01/2024");
        assert_eq!(format_date("2024-12-01"), "01/12/2024");
        assert_eq!(format_date("not a date"), "not a date");
    }

    #[test]
    fn times_drop_seconds() {
        assert_eq!(format_time("09:05:00"), "09:05");
        assert_eq!(format_time("23:59"), "23:59");
        assert_eq!(format_time("soon"), "soon");
    }

    #[test]
    fn phones_and_zip_codes() {
        assert_eq!(normalize_phone("(11) 9 8765-4321"), "11987654321");
        assert_eq!(normalize_phone("119876543219999"), "11987654321");
        assert_eq!(format_phone("11987654321"), "(11) 9 8765-4321");
        assert_eq!(format_phone("1134567890"), "(11) 3456-7890");
        assert_eq!(format_phone("12345"), "12345");
        assert_eq!(format_zip_code("13010000"), "13010-000");
        assert_eq!(format_zip_code("1301"), "1301");
    }
}
