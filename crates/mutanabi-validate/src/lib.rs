//! Validation of the generation form.
//!
//! [`validate`] checks both fields independently and either returns the
//! normalized [`ValidatedInput`] or one error per failing field. Nothing here
//! has side effects; callers decide how to surface the errors.

mod checks;
pub mod keys;
pub mod normalize;

pub use checks::{check_count, check_word};
pub use keys::{accepts_count_key, accepts_word_key, filter_count_input, filter_word_input};
pub use normalize::{is_arabic_char, is_arabic_indic_digit, normalize_digits};

use mutanabi_model::{Field, FieldErrors, ValidatedInput};

/// Validate a raw word and count.
///
/// Both fields are always checked, so a caller can show every failing field
/// at once. The count is digit-normalized before numeric checks and an empty
/// count becomes [`mutanabi_model::DEFAULT_COUNT`].
pub fn validate(word: &str, count: &str) -> Result<ValidatedInput, FieldErrors> {
    let word_result = check_word(word);
    let count_result = check_count(count);

    match (word_result, count_result) {
        (Ok(word), Ok(count)) => Ok(ValidatedInput { word, count }),
        (word_result, count_result) => {
            let mut errors = FieldErrors::new();
            if let Err(error) = word_result {
                errors.insert(Field::Word, error);
            }
            if let Err(error) = count_result {
                errors.insert(Field::Count, error);
            }
            tracing::debug!(
                failed_fields = errors.len(),
                word_error = errors.get(&Field::Word).map(|e| e.code.as_str()),
                count_error = errors.get(&Field::Count).map(|e| e.code.as_str()),
                "form validation failed"
            );
            Err(errors)
        }
    }
}

/// Validate a single field, as done when it loses focus.
pub fn validate_field(field: Field, value: &str) -> Option<mutanabi_model::ValidationError> {
    match field {
        Field::Word => check_word(value).err(),
        Field::Count => check_count(value).err(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mutanabi_model::{DEFAULT_COUNT, MessageCode};

    #[test]
    fn valid_form() {
        let input = validate("قمر", "5").unwrap();
        assert_eq!(input, ValidatedInput::new("قمر", 5));
    }

    #[test]
    fn both_fields_fail_together() {
        let errors = validate("hello", "0").unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[&Field::Word].code, MessageCode::ArabicOnly);
        assert_eq!(errors[&Field::Count].code, MessageCode::CountTooSmall);
    }

    #[test]
    fn count_failure_alone() {
        let errors = validate("قمر", "3.5").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&Field::Count].code, MessageCode::CountNotInteger);
    }

    #[test]
    fn empty_count_defaults() {
        let input = validate("شمس", "").unwrap();
        assert_eq!(input.count, DEFAULT_COUNT);
        let errors = validate("شمس", " ").unwrap_err();
        assert_eq!(errors[&Field::Count].code, MessageCode::CountTooSmall);
    }

    #[test]
    fn single_field_validation() {
        assert_eq!(
            validate_field(Field::Word, "بيت شعر").map(|e| e.code),
            Some(MessageCode::SingleWord)
        );
        assert!(validate_field(Field::Count, "١٢").is_none());
        assert!(validate_field(Field::Count, "").is_none());
    }
}
