//! Command-line client for the internship board backend.
//!
//! The binary in `main.rs` parses arguments; this library holds the HTTP
//! client and the text rendering so both can be tested without a terminal.

pub mod backend;
pub mod render;

use listings::BackendError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error("missing credentials; pass --email/--password or set INTERNBOARD_EMAIL/INTERNBOARD_PASSWORD")]
    MissingCredentials,
    #[error("{0}")]
    InvalidCredentials(&'static str),
    #[error("internship {0} not found")]
    NotFound(String),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
