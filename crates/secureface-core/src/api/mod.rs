//! HTTP access to the recognition service.
//!
//! The service is an opaque collaborator: two POST endpoints that answer with
//! JSON. Only the HTTP status and a handful of optional body fields are read.

mod client;
mod error;

pub use client::ApiClient;
pub use error::TransportError;
pub use reqwest::StatusCode;
use serde_json::Value;

/// A decoded reply: HTTP status plus JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: StatusCode,
    pub body: Value,
}

impl Reply {
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }

    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Non-empty `error` string from the body.
    pub fn error_message(&self) -> Option<&str> {
        self.str_field("error")
    }

    /// Confirmation text the service sends alongside a success.
    pub fn message(&self) -> Option<&str> {
        self.str_field("message")
    }

    /// `username` from a login reply.
    ///
    /// Non-string values are rendered as their JSON text.
    pub fn username(&self) -> Option<String> {
        match self.body.get("username") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        }
    }

    pub fn user_id(&self) -> Option<i64> {
        self.body.get("user_id").and_then(Value::as_i64)
    }

    /// Match distance reported on login (lower is a closer match).
    ///
    /// The service sends it as a string; plain numbers are accepted too.
    pub fn score(&self) -> Option<f64> {
        match self.body.get("score")? {
            Value::String(s) => s.trim().parse().ok(),
            Value::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.body
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_reply_reads_login_fields() {
        let reply = Reply::new(
            StatusCode::OK,
            json!({
                "message": "Login successful!",
                "user_id": 7,
                "username": "ann",
                "score": "0.4123"
            }),
        );
        assert!(reply.is_success());
        assert_eq!(reply.username().as_deref(), Some("ann"));
        assert_eq!(reply.user_id(), Some(7));
        assert_eq!(reply.message(), Some("Login successful!"));
        assert!((reply.score().unwrap() - 0.4123).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reply_error_ignores_empty_and_non_string() {
        let empty = Reply::new(StatusCode::BAD_REQUEST, json!({"error": ""}));
        assert_eq!(empty.error_message(), None);

        let numeric = Reply::new(StatusCode::BAD_REQUEST, json!({"error": 42}));
        assert_eq!(numeric.error_message(), None);

        let array_body = Reply::new(StatusCode::BAD_REQUEST, json!(["error"]));
        assert_eq!(array_body.error_message(), None);
    }

    #[test]
    fn test_reply_username_renders_non_string_values() {
        let reply = Reply::new(StatusCode::OK, json!({"username": 12}));
        assert_eq!(reply.username().as_deref(), Some("12"));

        let missing = Reply::new(StatusCode::OK, json!({}));
        assert_eq!(missing.username(), None);
    }
}
