//! Availability of the public backend settings served by the host.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use listings::BackendConfig;

/// Where the app is in obtaining [`BackendConfig`] from `/api/config`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BackendState {
    #[default]
    Loading,
    Ready(BackendConfig),
    /// The host could not provide settings; carries the error text.
    Unavailable(String),
}

impl BackendState {
    #[must_use]
    pub fn config(&self) -> Option<&BackendConfig> {
        match self {
            Self::Ready(config) => Some(config),
            _ => None,
        }
    }
}
