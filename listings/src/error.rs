//! Error type shared by every backend call.
//!
//! The backend (PostgREST for tables, GoTrue for auth) reports failures as a
//! JSON object whose human-readable text lives under one of several keys
//! depending on the service. [`error_message`] normalizes those shapes.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Error returned by request building, status checks, and response decoding.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The backend answered with a non-2xx status.
    #[error("backend returned {status}: {message}")]
    Http { status: u16, message: String },
    /// The response body did not have the expected shape.
    #[error("failed to decode backend response: {0}")]
    Decode(#[from] serde_json::Error),
    /// The request never produced a response (network, CORS, TLS, ...).
    #[error("request failed: {0}")]
    Transport(String),
    /// The action requires a signed-in session.
    #[error("not signed in")]
    NotSignedIn,
    /// The backend URL or key is unusable.
    #[error("invalid backend configuration: {0}")]
    InvalidConfig(String),
}

impl BackendError {
    /// HTTP status carried by the error, if it came from a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Map a response status to `Ok(())` for 2xx, or an [`BackendError::Http`].
///
/// # Errors
///
/// Returns [`BackendError::Http`] with the message extracted from `body`
/// when `status` is outside `200..300`.
pub fn check_status(status: u16, body: &str) -> Result<(), BackendError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    Err(BackendError::Http { status, message: error_message(body) })
}

/// Best-effort human-readable message from a backend error body.
#[must_use]
pub fn error_message(body: &str) -> String {
    const KEYS: [&str; 4] = ["message", "msg", "error_description", "error"];

    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        for key in KEYS {
            if let Some(text) = map.get(key).and_then(Value::as_str)
                && !text.trim().is_empty()
            {
                return text.trim().to_owned();
            }
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        "unknown error".to_owned()
    } else {
        trimmed.to_owned()
    }
}
