//! Error types for node API operations.
//!
//! This module defines the error type returned by the node client, providing
//! structured error handling with helpful messages.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for requests against the node's REST API.
///
/// Loader failures of this type are logged and swallowed by the application;
/// creation requests never surface it (their failures become a
/// [`Message`](super::Message) instead).
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-related errors from HTTP requests.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The node answered with a non-success status code.
    #[error("Request failed with status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// JSON parsing or data structure errors.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse.
        message: String,
    },

    /// The HTTP client could not be constructed.
    #[error("Failed to initialize HTTP client: {0}")]
    ClientInit(String),
}

impl ApiError {
    /// Create a new parse error with the given message.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new status error from a status code and response body.
    #[must_use]
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Create a new client initialization error.
    #[must_use]
    pub fn client_init(message: impl Into<String>) -> Self {
        Self::ClientInit(message.into())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let parse_err = ApiError::parse("missing 'me'");
        assert_eq!(format!("{}", parse_err), "Parse error: missing 'me'");

        let status_err = ApiError::status(500, "boom");
        assert_eq!(
            format!("{}", status_err),
            "Request failed with status 500: boom"
        );

        let init_err = ApiError::client_init("no TLS backend");
        assert_eq!(
            format!("{}", init_err),
            "Failed to initialize HTTP client: no TLS backend"
        );
    }

    #[test]
    fn test_status_error_creation() {
        match ApiError::status(404, "not found") {
            ApiError::Status { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body, "not found");
            }
            _ => panic!("Expected Status variant"),
        }
    }
}
