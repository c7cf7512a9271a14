//! Rupiah formatting.

use rust_decimal::{Decimal, RoundingStrategy};

/// Non-breaking space between the currency symbol and the digits.
pub const RUPIAH_SEPARATOR: char = '\u{a0}';

/// Formats an amount as Indonesian rupiah with no decimal places.
///
/// Digits are grouped in thousands with `.`, fractions are rounded half away
/// from zero, and negatives carry a leading `-` before the symbol.
///
/// # Examples
///
/// ```
/// use pajak_engine::presentation::format_idr;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_idr(Decimal::from(111_000)), "Rp\u{a0}111.000");
/// assert_eq!(format_idr(Decimal::from(-2_000)), "-Rp\u{a0}2.000");
/// ```
pub fn format_idr(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}Rp{RUPIAH_SEPARATOR}{grouped}")
}
