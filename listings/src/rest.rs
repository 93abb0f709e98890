//! Request builders for the external backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tables are served by a PostgREST-style API under `/rest/v1`, auth by a
//! GoTrue-style API under `/auth/v1`. Both require the project's public
//! `apikey` header plus a bearer token: the session access token when signed
//! in, otherwise the anon key itself.
//!
//! DESIGN
//! ======
//! Builders return a plain [`RestRequest`] so the browser (`gloo-net`) and the
//! CLI (`reqwest`) share one definition of every endpoint and header.

#[cfg(test)]
#[path = "rest_test.rs"]
mod rest_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::auth::{Credentials, Session};
use crate::error::BackendError;
use crate::model::{Internship, NewApplication};

pub const INTERNSHIPS_TABLE: &str = "internships";
pub const APPLICATIONS_TABLE: &str = "applications";

/// HTTP verbs used against the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// A fully-resolved backend request, independent of any HTTP client.
#[derive(Clone, Debug, PartialEq)]
pub struct RestRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl RestRequest {
    /// First header value named `name` (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    fn with_json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self.with_header("Content-Type", "application/json")
    }
}

/// Public connection settings for the backend project.
///
/// Both values are safe to ship to the browser; row access is enforced by the
/// backend's own policies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Project base URL without a trailing slash.
    pub url: String,
    /// Public anon key sent as `apikey`.
    pub anon_key: String,
}

impl BackendConfig {
    /// Validate and normalize backend settings.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::InvalidConfig`] when the URL is not an absolute
    /// `http(s)` URL or the key is blank.
    pub fn new(url: &str, anon_key: &str) -> Result<Self, BackendError> {
        let trimmed = url.trim().trim_end_matches('/');
        let parsed = url::Url::parse(trimmed)
            .map_err(|e| BackendError::InvalidConfig(format!("backend url `{trimmed}`: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(BackendError::InvalidConfig(format!(
                "backend url `{trimmed}` must use http or https"
            )));
        }
        let anon_key = anon_key.trim();
        if anon_key.is_empty() {
            return Err(BackendError::InvalidConfig("anon key is empty".to_owned()));
        }
        Ok(Self { url: trimmed.to_owned(), anon_key: anon_key.to_owned() })
    }

    fn request(&self, method: Method, path: &str, bearer: Option<&str>) -> RestRequest {
        let bearer = bearer.unwrap_or(&self.anon_key);
        RestRequest {
            method,
            url: format!("{}{path}", self.url),
            headers: Vec::new(),
            body: None,
        }
        .with_header("apikey", &self.anon_key)
        .with_header("Authorization", &format!("Bearer {bearer}"))
        .with_header("Accept", "application/json")
    }
}

/// `GET` every internship, newest first.
#[must_use]
pub fn list_internships(config: &BackendConfig, session: Option<&Session>) -> RestRequest {
    let path = format!("/rest/v1/{INTERNSHIPS_TABLE}?select=*&order=created_at.desc");
    config.request(Method::Get, &path, session.map(|s| s.access_token.as_str()))
}

/// `GET` a single internship by id.
#[must_use]
pub fn get_internship(config: &BackendConfig, session: Option<&Session>, id: &str) -> RestRequest {
    let id: String = url::form_urlencoded::byte_serialize(id.as_bytes()).collect();
    let path = format!("/rest/v1/{INTERNSHIPS_TABLE}?select=*&id=eq.{id}&limit=1");
    config.request(Method::Get, &path, session.map(|s| s.access_token.as_str()))
}

/// `POST` one application row for the signed-in user.
///
/// # Errors
///
/// Returns [`BackendError::NotSignedIn`] when `session` is `None`, or
/// [`BackendError::Decode`] if the row cannot be serialized.
pub fn insert_application(
    config: &BackendConfig,
    session: Option<&Session>,
    application: &NewApplication,
) -> Result<RestRequest, BackendError> {
    let session = session.ok_or(BackendError::NotSignedIn)?;
    let body = serde_json::to_value(application)?;
    Ok(config
        .request(
            Method::Post,
            &format!("/rest/v1/{APPLICATIONS_TABLE}"),
            Some(&session.access_token),
        )
        .with_header("Prefer", "return=minimal")
        .with_json(body))
}

/// `POST` e-mail/password credentials to the token endpoint.
#[must_use]
pub fn sign_in(config: &BackendConfig, credentials: &Credentials) -> RestRequest {
    config
        .request(Method::Post, "/auth/v1/token?grant_type=password", None)
        .with_json(credentials_body(credentials))
}

/// `POST` e-mail/password credentials to the signup endpoint.
#[must_use]
pub fn sign_up(config: &BackendConfig, credentials: &Credentials) -> RestRequest {
    config
        .request(Method::Post, "/auth/v1/signup", None)
        .with_json(credentials_body(credentials))
}

/// `POST` to revoke the session's tokens.
#[must_use]
pub fn sign_out(config: &BackendConfig, session: &Session) -> RestRequest {
    config.request(Method::Post, "/auth/v1/logout", Some(&session.access_token))
}

/// Decode a `select=*` response body.
///
/// # Errors
///
/// Returns [`BackendError::Decode`] when the body is not an array of rows.
pub fn decode_internships(body: &str) -> Result<Vec<Internship>, BackendError> {
    Ok(serde_json::from_str(body)?)
}

fn credentials_body(credentials: &Credentials) -> Value {
    serde_json::json!({ "email": credentials.email, "password": credentials.password })
}
