//! The single failure type surfaced by a question search.

use thiserror::Error;

use super::network::NetworkError;

/// A failed search request.
///
/// The view-state only ever needs the message; the code is kept for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SearchFailure {
    message: String,
    code: &'static str,
}

impl SearchFailure {
    /// Create a failure with a free-form message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: "E_SEARCH",
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> &'static str {
        self.code
    }
}

impl From<NetworkError> for SearchFailure {
    fn from(err: NetworkError) -> Self {
        Self {
            message: err.to_string(),
            code: err.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_the_bare_message() {
        let failure = SearchFailure::new("Test");
        assert_eq!(failure.to_string(), "Test");
        assert_eq!(failure.code(), "E_SEARCH");
    }

    #[test]
    fn test_from_network_error_keeps_code() {
        let failure: SearchFailure = NetworkError::HttpStatus {
            status: 400,
            message: "bad".into(),
        }
        .into();
        assert_eq!(failure.message(), "HTTP 400 error: bad");
        assert_eq!(failure.code(), "E_NET_HTTP");
    }
}
