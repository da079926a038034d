//! Character classes and digit normalization.

use mutanabi_model::ARABIC_BLOCK;

/// Arabic-Indic digits, indexed by their numeric value.
const ARABIC_INDIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

/// Returns true for a codepoint in the Arabic block (U+0600..=U+06FF).
#[must_use]
pub fn is_arabic_char(ch: char) -> bool {
    ARABIC_BLOCK.contains(&ch)
}

/// Returns true for one of the Arabic-Indic digits ٠..٩.
#[must_use]
pub fn is_arabic_indic_digit(ch: char) -> bool {
    ARABIC_INDIC_DIGITS.contains(&ch)
}

/// Replace every Arabic-Indic digit with the Western digit at the same index.
///
/// All other characters are kept as they are, so `"١٢٣"` becomes `"123"` and
/// `"٣.٥"` becomes `"3.5"`.
#[must_use]
pub fn normalize_digits(value: &str) -> String {
    value
        .chars()
        .map(|ch| {
            ARABIC_INDIC_DIGITS
                .iter()
                .position(|&digit| digit == ch)
                .and_then(|index| char::from_digit(index as u32, 10))
                .unwrap_or(ch)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_each_digit_by_position() {
        assert_eq!(normalize_digits("٠١٢٣٤٥٦٧٨٩"), "0123456789");
        assert_eq!(normalize_digits("١٢٣"), "123");
    }

    #[test]
    fn leaves_other_characters() {
        assert_eq!(normalize_digits("12٣"), "123");
        assert_eq!(normalize_digits("٣.٥"), "3.5");
        assert_eq!(normalize_digits("قمر"), "قمر");
        assert_eq!(normalize_digits(""), "");
    }

    #[test]
    fn character_classes() {
        assert!(is_arabic_char('ق'));
        assert!(is_arabic_char('٥'));
        assert!(!is_arabic_char('a'));
        assert!(!is_arabic_char('\u{0750}'));
        assert!(is_arabic_indic_digit('٠'));
        assert!(!is_arabic_indic_digit('0'));
    }
}
