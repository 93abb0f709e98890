//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! host keeps no data of its own; it only hands the browser the public
//! backend settings.

use std::sync::Arc;

use listings::BackendConfig;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<BackendConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(backend: BackendConfig) -> Self {
        Self { backend: Arc::new(backend) }
    }
}
