use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::messages::{LocalizedText, MessageCode};

/// Input fields of the generation form.
///
/// Declaration order is display order: the word is reported before the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Word,
    Count,
}

impl Field {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Word => "word",
            Self::Count => "count",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "word" | "seed" => Ok(Self::Word),
            "count" | "number" | "length" => Ok(Self::Count),
            other => Err(ModelError::UnknownField(other.to_string())),
        }
    }
}

/// A failed check attached to a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub code: MessageCode,
}

impl ValidationError {
    #[must_use]
    pub const fn new(code: MessageCode) -> Self {
        Self { code }
    }

    #[must_use]
    pub const fn text(&self) -> LocalizedText {
        self.code.text()
    }

    /// English message.
    #[must_use]
    pub const fn primary(&self) -> &'static str {
        self.code.primary()
    }

    /// Arabic message.
    #[must_use]
    pub const fn secondary(&self) -> &'static str {
        self.code.secondary()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.text().fmt(f)
    }
}

impl From<MessageCode> for ValidationError {
    fn from(code: MessageCode) -> Self {
        Self::new(code)
    }
}

/// Active errors keyed by field. A map holds at most one error per field.
pub type FieldErrors = BTreeMap<Field, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_parses_aliases() {
        assert_eq!("seed".parse::<Field>().unwrap(), Field::Word);
        assert_eq!(" Length ".parse::<Field>().unwrap(), Field::Count);
        assert!(matches!(
            "poem".parse::<Field>(),
            Err(ModelError::UnknownField(name)) if name == "poem"
        ));
    }

    #[test]
    fn errors_iterate_word_first() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Count, MessageCode::CountTooSmall.into());
        errors.insert(Field::Word, MessageCode::ArabicOnly.into());
        let fields: Vec<Field> = errors.keys().copied().collect();
        assert_eq!(fields, vec![Field::Word, Field::Count]);
    }

    #[test]
    fn one_error_per_field() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Word, MessageCode::WordRequired.into());
        errors.insert(Field::Word, MessageCode::SingleWord.into());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&Field::Word].code, MessageCode::SingleWord);
    }
}
