use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Poem length used when the count field is left empty.
pub const DEFAULT_COUNT: u64 = 1000;

/// Unicode Arabic block accepted in the seed word.
pub const ARABIC_BLOCK: RangeInclusive<char> = '\u{0600}'..='\u{06FF}';

/// Generation endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://mutanabi-api.onrender.com/generate";

/// Form input that passed validation and is ready to submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedInput {
    /// Seed word, trimmed.
    pub word: String,
    /// Requested poem length, at least 1.
    pub count: u64,
}

impl ValidatedInput {
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}
