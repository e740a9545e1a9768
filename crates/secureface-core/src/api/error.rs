use thiserror::Error;

use crate::dispatch::CONNECTION_ERROR_MESSAGE;

/// A request that never produced a usable reply.
///
/// The variants are kept apart for logs and tests. Users always see
/// [`CONNECTION_ERROR_MESSAGE`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("server unreachable: {0}")]
    Unreachable(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("response body is not valid JSON: {0}")]
    InvalidBody(String),

    #[error("request failed: {0}")]
    Request(String),
}

impl TransportError {
    /// Classifies a reqwest failure.
    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout(err.to_string())
        } else if err.is_connect() {
            TransportError::Unreachable(err.to_string())
        } else if err.is_decode() {
            TransportError::InvalidBody(err.to_string())
        } else {
            TransportError::Request(err.to_string())
        }
    }

    pub fn user_message(&self) -> &'static str {
        CONNECTION_ERROR_MESSAGE
    }

    /// Short variant name for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            TransportError::Unreachable(_) => "unreachable",
            TransportError::Timeout(_) => "timeout",
            TransportError::InvalidBody(_) => "invalid_body",
            TransportError::Request(_) => "request",
        }
    }
}
