//! Error types for generation requests.

use thiserror::Error;

/// Errors that can occur while requesting a poem.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// The configured endpoint is not a valid URL.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Network request failed or the service answered with an error status.
    #[error("network error: {0}")]
    Network(String),

    /// The response body was not the expected payload.
    #[error("response parse error: {0}")]
    Parse(String),
}

impl ClientError {
    /// Whether a retry could succeed. Used for diagnostics only; requests
    /// are never retried automatically.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable() {
        assert!(ClientError::Network("timeout".to_string()).is_retryable());
        assert!(!ClientError::Parse("expected string".to_string()).is_retryable());
        assert!(!ClientError::InvalidEndpoint("::".to_string()).is_retryable());
    }

    #[test]
    fn test_json_error_is_parse() {
        let err = serde_json::from_str::<String>("{").unwrap_err();
        assert!(matches!(ClientError::from(err), ClientError::Parse(_)));
    }
}
