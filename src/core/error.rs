//! Custom error types for the application.
//!
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`DataError`] - Failures of the data access layer (transport, lookup)

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, DNS, offline, ...)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

/// Errors returned by a [`Backend`](crate::core::Backend).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    /// Transport or query failure.
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// A single-record lookup matched nothing.
    #[error("{kind} '{key}' not found")]
    NotFound { kind: &'static str, key: String },
    /// The request URL could not be built.
    #[error("invalid request url: {0}")]
    InvalidUrl(String),
}

impl DataError {
    pub fn not_found(kind: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            kind,
            key: key.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(FetchError::HttpError(503).to_string(), "HTTP error: 503");
        assert_eq!(
            DataError::not_found("product", "widget").to_string(),
            "product 'widget' not found"
        );
        assert_eq!(
            DataError::from(FetchError::Timeout).to_string(),
            "Request timed out"
        );
    }

    #[test]
    fn test_is_not_found() {
        assert!(DataError::not_found("company", 3).is_not_found());
        assert!(!DataError::Fetch(FetchError::NoWindow).is_not_found());
    }
}
