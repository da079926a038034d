use serde::{Deserialize, Serialize};

use crate::field::{Field, FieldErrors, ValidationError};
use crate::messages::Label;

/// Everything the generation form shows.
///
/// Created empty, mutated by edits, validation and the submission
/// controller, and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub word: String,
    /// Raw count text as typed, after digit normalization.
    pub count: String,
    #[serde(default, skip_serializing_if = "FieldErrors::is_empty")]
    pub field_errors: FieldErrors,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_text: Option<String>,
    #[serde(default)]
    pub is_submitting: bool,
}

impl FormState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.field_errors.is_empty()
    }

    #[must_use]
    pub fn error(&self, field: Field) -> Option<&ValidationError> {
        self.field_errors.get(&field)
    }

    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Word => &self.word,
            Field::Count => &self.count,
        }
    }

    /// Label of the submit control for the current busy state.
    #[must_use]
    pub fn submit_label(&self) -> Label {
        if self.is_submitting {
            Label::Generating
        } else {
            Label::Submit
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::MessageCode;

    #[test]
    fn submit_label_follows_busy_flag() {
        let mut form = FormState::new();
        assert_eq!(form.submit_label(), Label::Submit);
        form.is_submitting = true;
        assert_eq!(form.submit_label(), Label::Generating);
        assert_eq!(form.submit_label().text().secondary, "...جار إنشاء قصيدة");
    }

    #[test]
    fn value_and_error_lookup() {
        let mut form = FormState {
            word: "قمر".to_string(),
            count: "5".to_string(),
            ..FormState::default()
        };
        form.field_errors
            .insert(Field::Count, ValidationError::new(MessageCode::CountTooSmall));
        assert_eq!(form.value(Field::Word), "قمر");
        assert_eq!(form.value(Field::Count), "5");
        assert!(form.error(Field::Word).is_none());
        assert_eq!(
            form.error(Field::Count).map(|e| e.code),
            Some(MessageCode::CountTooSmall)
        );
    }
}
