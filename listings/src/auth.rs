//! Session types for the external auth service.
//!
//! Only the shapes this application consumes are modeled; the backend owns
//! the auth protocol itself.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::BackendError;

/// Minimum password length accepted by the auth form.
pub const MIN_PASSWORD_LEN: usize = 6;

/// The authenticated account behind a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Backend user identifier (UUID string).
    pub id: String,
    /// Account e-mail, when the backend exposes it.
    #[serde(default)]
    pub email: Option<String>,
}

/// A signed-in session as returned by the token endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token for authenticated requests.
    pub access_token: String,
    /// Token used to renew the session.
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Expiry as seconds since the Unix epoch.
    #[serde(default)]
    pub expires_at: Option<i64>,
    /// Account that owns the session.
    pub user: AuthUser,
}

impl Session {
    /// Whether the session expired at or before `now_secs`.
    ///
    /// Sessions without an expiry never report as expired.
    #[must_use]
    pub fn is_expired(&self, now_secs: i64) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now_secs)
    }

    /// Label for the signed-in user: e-mail when known, otherwise the id.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.user.email.as_deref().unwrap_or(&self.user.id)
    }
}

/// Result of a sign-up call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignUpOutcome {
    /// The account was created and a session issued.
    SignedIn(Session),
    /// The account was created but must confirm its e-mail first.
    ConfirmationRequired { email: String },
}

/// E-mail and password entered in the auth form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Trim the e-mail and check both fields.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message when the e-mail is missing or malformed,
    /// or the password is shorter than [`MIN_PASSWORD_LEN`].
    pub fn validate(email: &str, password: &str) -> Result<Self, &'static str> {
        let email = email.trim();
        if email.is_empty() {
            return Err("Enter your email.");
        }
        if !email.contains('@') {
            return Err("Enter a valid email address.");
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err("Password must be at least 6 characters.");
        }
        Ok(Self { email: email.to_owned(), password: password.to_owned() })
    }
}

/// Decode a token-endpoint response into a [`Session`].
///
/// # Errors
///
/// Returns [`BackendError::Decode`] when the body is not a session object.
pub fn decode_session(body: &str) -> Result<Session, BackendError> {
    Ok(serde_json::from_str(body)?)
}

/// Decode a sign-up response.
///
/// The signup endpoint returns a full session when e-mail confirmation is
/// disabled, and only the user object when confirmation is pending.
///
/// # Errors
///
/// Returns [`BackendError::Decode`] when the body is not JSON or a session
/// payload is malformed.
pub fn decode_sign_up(body: &str, email: &str) -> Result<SignUpOutcome, BackendError> {
    let value: Value = serde_json::from_str(body)?;
    if value.get("access_token").and_then(Value::as_str).is_some() {
        return Ok(SignUpOutcome::SignedIn(serde_json::from_value(value)?));
    }
    let email = value
        .get("email")
        .and_then(Value::as_str)
        .unwrap_or(email)
        .to_owned();
    Ok(SignUpOutcome::ConfirmationRequired { email })
}
