//! Creation responses shown to the user.
//!
//! Success and failure are deliberately the same type: whatever the node (or
//! the transport) produced becomes the message `data`, and the message dialog
//! renders it without distinguishing the two.

use chrono::{DateTime, Local};
use serde_json::Value;

/// The outcome of a creation request, passed opaquely to the message dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    /// HTTP status, when a response was received at all.
    pub status: Option<u16>,
    /// Response payload: parsed JSON when possible, otherwise the raw text.
    pub data: Value,
    /// Local time the response arrived.
    pub received_at: DateTime<Local>,
}

impl Message {
    /// Builds a message from a received response body.
    ///
    /// JSON bodies are kept structured; anything else is kept as a string.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let data = serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()));
        Self {
            status: Some(status),
            data,
            received_at: Local::now(),
        }
    }

    /// Builds a message for a request that never produced a response.
    #[must_use]
    pub fn transport_failure(error: impl Into<String>) -> Self {
        Self {
            status: None,
            data: Value::String(error.into()),
            received_at: Local::now(),
        }
    }

    /// Text shown in the message dialog: strings verbatim, other JSON pretty-printed.
    #[must_use]
    pub fn display_text(&self) -> String {
        match &self.data {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
        }
    }

    /// Whether the node reported success. Only used for logging.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_some_and(|s| (200..300).contains(&s))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_text_body_kept_verbatim() {
        let message = Message::from_response(201, "Transaction id 8F1A committed to ledger.");
        assert_eq!(message.data, json!("Transaction id 8F1A committed to ledger."));
        assert_eq!(message.display_text(), "Transaction id 8F1A committed to ledger.");
        assert!(message.is_success());
    }

    #[test]
    fn test_json_body_is_structured() {
        let message = Message::from_response(400, r#"{"error":"bad cusip"}"#);
        assert_eq!(message.data, json!({"error": "bad cusip"}));
        assert!(message.display_text().contains("\"error\": \"bad cusip\""));
        assert!(!message.is_success());
    }

    #[test]
    fn test_transport_failure_has_no_status() {
        let message = Message::transport_failure("connection refused");
        assert_eq!(message.status, None);
        assert_eq!(message.display_text(), "connection refused");
        assert!(!message.is_success());
    }
}
