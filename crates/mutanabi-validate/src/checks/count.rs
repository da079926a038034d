//! Poem length checks.

use mutanabi_model::{DEFAULT_COUNT, MessageCode, ValidationError};

use crate::normalize::normalize_digits;

/// Check the requested poem length.
///
/// Arabic-Indic digits are normalized first. An empty value means
/// [`DEFAULT_COUNT`]; a value made only of whitespace is not empty and reads
/// as zero. A number below 1 is reported before a non-integer, so `"0.5"` is
/// too small while `"3.5"` is not an integer.
pub fn check_count(count: &str) -> Result<u64, ValidationError> {
    if count.is_empty() {
        return Ok(DEFAULT_COUNT);
    }
    let normalized = normalize_digits(count);
    let value = normalized.trim();
    if value.is_empty() {
        return Err(MessageCode::CountTooSmall.into());
    }

    if let Ok(whole) = value.parse::<u64>() {
        return if whole >= 1 {
            Ok(whole)
        } else {
            Err(MessageCode::CountTooSmall.into())
        };
    }

    match parse_decimal(value) {
        Some(number) if number < 1.0 => Err(MessageCode::CountTooSmall.into()),
        // u64::MAX as f64 rounds up to 2^64, so this bound excludes it.
        Some(number)
            if number.is_finite() && number.fract() == 0.0 && number < u64::MAX as f64 =>
        {
            Ok(number as u64)
        }
        _ => Err(MessageCode::CountNotInteger.into()),
    }
}

/// Parse a decimal literal: digits, sign, point and exponent, or a signed
/// `Infinity`. Spellings such as `inf` or `nan` are not numbers.
fn parse_decimal(value: &str) -> Option<f64> {
    match value.strip_prefix(['+', '-']).unwrap_or(value) {
        "Infinity" => value.parse::<f64>().ok(),
        unsigned
            if unsigned
                .chars()
                .all(|ch| ch.is_ascii_digit() || matches!(ch, '.' | 'e' | 'E' | '+' | '-')) =>
        {
            value.parse::<f64>().ok()
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(count: &str) -> Option<MessageCode> {
        check_count(count).err().map(|e| e.code)
    }

    #[test]
    fn empty_defaults() {
        assert_eq!(check_count("").unwrap(), DEFAULT_COUNT);
    }

    #[test]
    fn whitespace_only_is_too_small() {
        assert_eq!(code("  "), Some(MessageCode::CountTooSmall));
        assert_eq!(code("\t"), Some(MessageCode::CountTooSmall));
    }

    #[test]
    fn plain_integers() {
        assert_eq!(check_count("5").unwrap(), 5);
        assert_eq!(check_count(" 42 ").unwrap(), 42);
        assert_eq!(check_count("١٠").unwrap(), 10);
        assert_eq!(check_count("18446744073709551615").unwrap(), u64::MAX);
    }

    #[test]
    fn integral_notation() {
        assert_eq!(check_count("1e3").unwrap(), 1000);
        assert_eq!(check_count("7.0").unwrap(), 7);
    }

    #[test]
    fn below_one() {
        assert_eq!(code("0"), Some(MessageCode::CountTooSmall));
        assert_eq!(code("-5"), Some(MessageCode::CountTooSmall));
        assert_eq!(code("0.5"), Some(MessageCode::CountTooSmall));
        assert_eq!(code("٠"), Some(MessageCode::CountTooSmall));
        assert_eq!(code("-Infinity"), Some(MessageCode::CountTooSmall));
    }

    #[test]
    fn not_integer() {
        assert_eq!(code("3.5"), Some(MessageCode::CountNotInteger));
        assert_eq!(code("٣.٥"), Some(MessageCode::CountNotInteger));
        assert_eq!(code("abc"), Some(MessageCode::CountNotInteger));
        assert_eq!(code("NaN"), Some(MessageCode::CountNotInteger));
        assert_eq!(code("Infinity"), Some(MessageCode::CountNotInteger));
    }

    #[test]
    fn foreign_number_spellings_are_not_integers() {
        assert_eq!(code("-inf"), Some(MessageCode::CountNotInteger));
        assert_eq!(code("inf"), Some(MessageCode::CountNotInteger));
        assert_eq!(code("nan"), Some(MessageCode::CountNotInteger));
    }

    #[test]
    fn counts_beyond_u64_are_rejected() {
        assert_eq!(
            code("99999999999999999999999"),
            Some(MessageCode::CountNotInteger)
        );
        assert_eq!(code("1e30"), Some(MessageCode::CountNotInteger));
    }
}
