//! Dispatch rules.
//!
//! Validation before a request goes out and interpretation of whatever comes
//! back. Both are pure; the store applies the results and the client does the
//! I/O.

use thiserror::Error;

use crate::api::{ApiClient, Reply, TransportError};
use crate::model::{Endpoint, Field, FormData, Status};
use crate::store::{Completion, Submission, ViewStore};

pub const VALIDATION_MESSAGE: &str = "Please fill in all fields.";
pub const FALLBACK_ERROR_MESSAGE: &str = "Authentication failed.";
pub const CONNECTION_ERROR_MESSAGE: &str = "Could not connect to server. Is app.py running?";

/// A register attempt with a required field left empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(Field),
}

impl ValidationError {
    pub fn user_message(&self) -> &'static str {
        VALIDATION_MESSAGE
    }
}

/// Checks the form before anything is sent.
///
/// Only `/register` has requirements: both fields non-empty.
///
/// # Errors
/// Returns the first empty field.
pub fn validate(endpoint: Endpoint, form: &FormData) -> Result<(), ValidationError> {
    if endpoint != Endpoint::Register {
        return Ok(());
    }
    for &field in Field::all() {
        if form.get(field).is_empty() {
            return Err(ValidationError::MissingField(field));
        }
    }
    Ok(())
}

/// What a finished request means for the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub status: Status,
    /// Reset the form (successful registration only).
    pub clear_form: bool,
    /// Secondary lines from the reply (confirmation, user id, match distance).
    pub details: Vec<String>,
}

impl Resolution {
    fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::error(message),
            clear_form: false,
            details: Vec::new(),
        }
    }
}

/// Interprets the result of a request sent with `submitted`.
pub fn resolve(
    endpoint: Endpoint,
    submitted: &FormData,
    result: &Result<Reply, TransportError>,
) -> Resolution {
    let reply = match result {
        Ok(reply) => reply,
        Err(err) => return Resolution::error(err.user_message()),
    };

    // A null error body, or a login grant that names nobody, cannot be read
    // as an answer and is reported like an unreachable service.
    let unreadable = if reply.is_success() {
        endpoint == Endpoint::Login && !reply.body.is_object()
    } else {
        reply.body.is_null()
    };
    if unreadable {
        return Resolution::error(CONNECTION_ERROR_MESSAGE);
    }

    if !reply.is_success() {
        let message = reply.error_message().unwrap_or(FALLBACK_ERROR_MESSAGE);
        return Resolution::error(message);
    }

    match endpoint {
        Endpoint::Register => Resolution {
            status: Status::success(format!(
                "Welcome, {}! Registration complete.",
                submitted.name
            )),
            clear_form: true,
            details: reply.message().map(str::to_string).into_iter().collect(),
        },
        Endpoint::Login => {
            // An object body without a username still grants access.
            let username = reply.username().unwrap_or_else(|| "unknown".to_string());
            let mut details = Vec::new();
            if let Some(id) = reply.user_id() {
                details.push(format!("User ID: {id}"));
            }
            if let Some(score) = reply.score() {
                details.push(format!("Match distance: {score:.4}"));
            }
            Resolution {
                status: Status::success(format!("Access Granted! Welcome back, {username}.")),
                clear_form: false,
                details,
            }
        }
    }
}

/// Runs one complete dispatch against `client` for the store's current mode.
///
/// Used by the one-shot commands; the TUI drives the same steps through its
/// reducer and runtime instead.
pub async fn dispatch_once(store: &mut ViewStore, client: &ApiClient) -> Completion {
    match store.submit() {
        Submission::Busy => Completion::Ignored,
        Submission::Rejected(_) => Completion::Applied(store.status().kind),
        Submission::Send(pending) => {
            let result = client.send(pending.endpoint, &pending.form).await;
            store.complete(&pending, &result)
        }
    }
}
