//! `reqwest` executor for `listings` request builders.

use listings::rest::{self, RestRequest};
use listings::{BackendConfig, Credentials, Internship, Method, NewApplication, Session};

use crate::CliError;

/// HTTP client bound to one backend project.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    config: BackendConfig,
}

impl BackendClient {
    /// # Errors
    ///
    /// Returns [`CliError::Http`] if the TLS backend cannot be initialized.
    pub fn new(config: BackendConfig) -> Result<Self, CliError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, config })
    }

    /// Send `request`, returning the body of a 2xx response.
    async fn send(&self, request: RestRequest) -> Result<String, CliError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        };
        tracing::debug!(method = request.method.as_str(), url = %request.url, "backend request");

        let mut builder = self.http.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.to_string());
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        tracing::debug!(status, bytes = body.len(), "backend response");
        listings::error::check_status(status, &body)?;
        Ok(body)
    }

    /// All internships, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or malformed rows.
    pub async fn list_internships(&self, session: Option<&Session>) -> Result<Vec<Internship>, CliError> {
        let body = self.send(rest::list_internships(&self.config, session)).await?;
        Ok(rest::decode_internships(&body)?)
    }

    /// One internship by id, or `None` if no row matches.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or malformed rows.
    pub async fn get_internship(
        &self,
        session: Option<&Session>,
        id: &str,
    ) -> Result<Option<Internship>, CliError> {
        let body = self.send(rest::get_internship(&self.config, session, id)).await?;
        Ok(rest::decode_internships(&body)?.into_iter().next())
    }

    /// Exchange e-mail and password for a session.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or rejected credentials.
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<Session, CliError> {
        let body = self.send(rest::sign_in(&self.config, credentials)).await?;
        Ok(listings::auth::decode_session(&body)?)
    }

    /// Insert an `applied` application for the session's user.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a rejected insert.
    pub async fn apply(&self, session: &Session, internship_id: &str) -> Result<(), CliError> {
        let application = NewApplication::applied(internship_id, session.user.id.clone());
        let request = rest::insert_application(&self.config, Some(session), &application)?;
        self.send(request).await?;
        Ok(())
    }
}
