//! REST helpers for the host and the external backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`BackendError::Transport`] since these
//! calls are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, BackendError>`. Pages turn errors into
//! toasts; nothing here panics or retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use listings::{
    BackendConfig, BackendError, Credentials, Internship, NewApplication, Session, SignUpOutcome,
};

/// Host endpoint serving the public [`BackendConfig`].
pub const CONFIG_ENDPOINT: &str = "/api/config";

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> BackendError {
    BackendError::Transport("not available on server".to_owned())
}

/// Application row for the signed-in user.
///
/// # Errors
///
/// Returns [`BackendError::NotSignedIn`] without a session.
fn application_for(
    session: Option<&Session>,
    internship_id: &str,
) -> Result<NewApplication, BackendError> {
    let session = session.ok_or(BackendError::NotSignedIn)?;
    Ok(NewApplication::applied(internship_id, session.user.id.clone()))
}

#[cfg(feature = "hydrate")]
fn transport(error: gloo_net::Error) -> BackendError {
    BackendError::Transport(error.to_string())
}

/// Execute a backend request and return `(status, body)`.
#[cfg(feature = "hydrate")]
async fn send(request: listings::RestRequest) -> Result<(u16, String), BackendError> {
    use gloo_net::http::Request;

    let mut builder = match request.method {
        listings::Method::Get => Request::get(&request.url),
        listings::Method::Post => Request::post(&request.url),
    };
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    let response = match request.body {
        Some(body) => builder.body(body.to_string()).map_err(transport)?.send().await,
        None => builder.send().await,
    }
    .map_err(transport)?;

    let status = response.status();
    let body = response.text().await.map_err(transport)?;
    Ok((status, body))
}

/// Fetch the public backend settings from the host.
///
/// # Errors
///
/// Returns an error if the host is unreachable, answers non-2xx, or sends
/// settings that fail validation.
pub async fn fetch_backend_config() -> Result<BackendConfig, BackendError> {
    #[cfg(feature = "hydrate")]
    {
        let response = gloo_net::http::Request::get(CONFIG_ENDPOINT)
            .send()
            .await
            .map_err(transport)?;
        let status = response.status();
        let body = response.text().await.map_err(transport)?;
        listings::error::check_status(status, &body)?;
        let raw: BackendConfig = serde_json::from_str(&body)?;
        BackendConfig::new(&raw.url, &raw.anon_key)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(unavailable())
    }
}

/// Fetch every internship, newest first.
///
/// # Errors
///
/// Returns an error on transport failure, non-2xx status, or malformed rows.
pub async fn fetch_internships(
    config: BackendConfig,
    session: Option<Session>,
) -> Result<Vec<Internship>, BackendError> {
    #[cfg(feature = "hydrate")]
    {
        let (status, body) = send(listings::rest::list_internships(&config, session.as_ref())).await?;
        listings::error::check_status(status, &body)?;
        listings::rest::decode_internships(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, session);
        Err(unavailable())
    }
}

/// Insert an `applied` application for the signed-in user.
///
/// # Errors
///
/// Returns [`BackendError::NotSignedIn`] without a session, otherwise an
/// error on transport failure or non-2xx status.
pub async fn submit_application(
    config: BackendConfig,
    session: Option<Session>,
    internship_id: String,
) -> Result<(), BackendError> {
    let application = application_for(session.as_ref(), &internship_id)?;
    #[cfg(feature = "hydrate")]
    {
        let request = listings::rest::insert_application(&config, session.as_ref(), &application)?;
        let (status, body) = send(request).await?;
        listings::error::check_status(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, application);
        Err(unavailable())
    }
}

/// Sign in with e-mail and password.
///
/// # Errors
///
/// Returns an error on transport failure, rejected credentials, or a
/// malformed session body.
pub async fn sign_in(config: BackendConfig, credentials: Credentials) -> Result<Session, BackendError> {
    #[cfg(feature = "hydrate")]
    {
        let (status, body) = send(listings::rest::sign_in(&config, &credentials)).await?;
        listings::error::check_status(status, &body)?;
        listings::auth::decode_session(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, credentials);
        Err(unavailable())
    }
}

/// Create an account with e-mail and password.
///
/// # Errors
///
/// Returns an error on transport failure, a rejected sign-up, or a
/// malformed response body.
pub async fn sign_up(
    config: BackendConfig,
    credentials: Credentials,
) -> Result<SignUpOutcome, BackendError> {
    #[cfg(feature = "hydrate")]
    {
        let (status, body) = send(listings::rest::sign_up(&config, &credentials)).await?;
        listings::error::check_status(status, &body)?;
        listings::auth::decode_sign_up(&body, &credentials.email)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, credentials);
        Err(unavailable())
    }
}

/// Revoke the session on the backend. Failures are ignored; the local
/// session is dropped by the caller either way.
pub async fn sign_out(config: BackendConfig, session: Session) {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = send(listings::rest::sign_out(&config, &session)).await {
            log::warn!("sign-out request failed: {e}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, session);
    }
}
