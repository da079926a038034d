//! Keystroke filters.
//!
//! These only narrow what can be typed. Pasted or programmatic input can
//! still bypass them, so [`crate::validate`] must run before submission.

use crate::normalize::{is_arabic_char, is_arabic_indic_digit};

/// Whether a key typed into the word field is kept.
#[must_use]
pub fn accepts_word_key(ch: char) -> bool {
    ch.is_whitespace() || is_arabic_char(ch)
}

/// Whether a key typed into the count field is kept.
#[must_use]
pub fn accepts_count_key(ch: char) -> bool {
    ch.is_ascii_digit() || is_arabic_indic_digit(ch)
}

/// Drop every character the word field would reject while typing.
#[must_use]
pub fn filter_word_input(text: &str) -> String {
    text.chars().filter(|&ch| accepts_word_key(ch)).collect()
}

/// Drop every character the count field would reject while typing.
#[must_use]
pub fn filter_count_input(text: &str) -> String {
    text.chars().filter(|&ch| accepts_count_key(ch)).collect()
}
