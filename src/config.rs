//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use listings::{BackendConfig, BackendError};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid {var}: {message}")]
    Invalid { var: &'static str, message: String },
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub backend: BackendConfig,
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Required:
    /// - `BACKEND_URL`: base URL of the backend project
    /// - `BACKEND_ANON_KEY`: public anon key handed to the browser
    ///
    /// Optional:
    /// - `PORT`: default 3000
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_port(lookup("PORT").as_deref())?;
        let url = required(&lookup, "BACKEND_URL")?;
        let anon_key = required(&lookup, "BACKEND_ANON_KEY")?;
        let backend = BackendConfig::new(&url, &anon_key)?;
        Ok(Self { port, backend })
    }
}

fn required<F>(lookup: &F, var: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::Missing(var))
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => {
            tracing::warn!(port = DEFAULT_PORT, "PORT not set; using default");
            Ok(DEFAULT_PORT)
        }
        Some(value) => value
            .parse::<u16>()
            .map_err(|e| ConfigError::Invalid { var: "PORT", message: format!("`{value}`: {e}") }),
    }
}
