//! Free-text amount entry.

use crate::error::{EngineError, EngineResult};

/// Parses the gross amount typed into the calculator.
///
/// Everything that is not an ASCII digit is dropped, so `"Rp 1.110.000"`
/// reads as `1110000`. Empty or digit-free text is zero.
///
/// # Errors
///
/// Returns [`EngineError::InvalidAmount`] when the digits do not fit in an
/// `i64`.
///
/// # Examples
///
/// ```
/// use pajak_engine::presentation::parse_gross_amount;
///
/// assert_eq!(parse_gross_amount("Rp 1.110.000").unwrap(), 1_110_000);
/// assert_eq!(parse_gross_amount("").unwrap(), 0);
/// ```
pub fn parse_gross_amount(text: &str) -> EngineResult<i64> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Ok(0);
    }

    digits.parse::<i64>().map_err(|e| EngineError::InvalidAmount {
        input: text.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_digits() {
        assert_eq!(parse_gross_amount("111000").unwrap(), 111_000);
    }

    #[test]
    fn test_strips_separators_and_symbols() {
        assert_eq!(parse_gross_amount("Rp 1.110.000").unwrap(), 1_110_000);
        assert_eq!(parse_gross_amount("1,110,000").unwrap(), 1_110_000);
        assert_eq!(parse_gross_amount(" 12 500 ").unwrap(), 12_500);
    }

    #[test]
    fn test_minus_sign_is_ignored() {
        assert_eq!(parse_gross_amount("-5000").unwrap(), 5_000);
    }

    #[test]
    fn test_empty_and_non_numeric_are_zero() {
        assert_eq!(parse_gross_amount("").unwrap(), 0);
        assert_eq!(parse_gross_amount("Rp").unwrap(), 0);
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(parse_gross_amount("000123").unwrap(), 123);
    }

    #[test]
    fn test_overflow_is_invalid_amount() {
        let result = parse_gross_amount("99999999999999999999999");
        match result {
            Err(EngineError::InvalidAmount { input, .. }) => {
                assert_eq!(input, "99999999999999999999999");
            }
            other => panic!("Expected InvalidAmount, got {:?}", other),
        }
    }
}
