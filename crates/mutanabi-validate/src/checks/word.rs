//! Seed word checks.

use mutanabi_model::{MessageCode, ValidationError};

use crate::normalize::is_arabic_char;

/// Check the seed word and return it trimmed.
///
/// Rules, first failure wins:
/// 1. not empty after trimming
/// 2. a single whitespace-delimited token
/// 3. only whitespace and Arabic-block characters
pub fn check_word(word: &str) -> Result<String, ValidationError> {
    let trimmed = word.trim();
    if trimmed.is_empty() {
        return Err(MessageCode::WordRequired.into());
    }
    if trimmed.split_whitespace().nth(1).is_some() {
        return Err(MessageCode::SingleWord.into());
    }
    if !word.chars().all(|ch| ch.is_whitespace() || is_arabic_char(ch)) {
        return Err(MessageCode::ArabicOnly.into());
    }
    Ok(trimmed.to_string())
}
