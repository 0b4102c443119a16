//! Common types shared across fleet API models.

use serde::{Deserialize, Serialize};

/// Acknowledgement body returned by mutation endpoints
/// (`{"message": "Vehicle rented successfully"}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ack {
    pub message: String,
}

/// Error body the backend attaches to non-2xx responses.
///
/// Error responses carry either `error` or `message` depending on the
/// route; both are accepted when extracting a display message.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: Option<String>,
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// The best display message this body offers, if any.
    pub fn display_message(&self) -> Option<&str> {
        self.error.as_deref().or(self.message.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ack_deserializes() {
        let ack: Ack =
            serde_json::from_str(r#"{"message": "Vehicle rented successfully"}"#).unwrap();
        assert_eq!(ack.message, "Vehicle rented successfully");
    }

    #[test]
    fn test_error_body_prefers_error_field() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"error": "branch query parameter is required"}"#).unwrap();
        assert_eq!(
            body.display_message(),
            Some("branch query parameter is required")
        );

        let body: ApiErrorBody = serde_json::from_str(r#"{"message": "nope"}"#).unwrap();
        assert_eq!(body.display_message(), Some("nope"));
    }
}
