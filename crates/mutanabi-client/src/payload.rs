//! Response payload of the generation endpoint.

use serde::Deserialize;

use crate::error::{ClientError, Result};

/// JSON bodies accepted as a poem.
///
/// The service answers with a JSON string. A list of lines is accepted too
/// and joined with newlines.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PoemPayload {
    /// The whole poem as one string.
    Text(String),
    /// The poem as separate lines.
    Lines(Vec<String>),
}

impl PoemPayload {
    /// Parse a response body.
    pub fn from_body(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|err| {
            ClientError::Parse(format!("expected a JSON string or list of strings: {err}"))
        })
    }

    /// Poem text for display.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Lines(lines) => lines.join("\n"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_body() {
        let payload = PoemPayload::from_body(r#""على قدر أهل العزم""#).unwrap();
        assert_eq!(payload.into_text(), "على قدر أهل العزم");
    }

    #[test]
    fn test_lines_body() {
        let payload = PoemPayload::from_body(r#"["سطر", "آخر"]"#).unwrap();
        assert_eq!(payload.into_text(), "سطر\nآخر");
    }

    #[test]
    fn test_rejects_other_json() {
        assert!(matches!(
            PoemPayload::from_body(r#"{"poem": 1}"#),
            Err(ClientError::Parse(_))
        ));
        assert!(matches!(PoemPayload::from_body("42"), Err(ClientError::Parse(_))));
        assert!(matches!(
            PoemPayload::from_body("not json"),
            Err(ClientError::Parse(_))
        ));
    }
}
