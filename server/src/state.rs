//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the validated product catalog and the runtime configuration.
//! Both are read-only after startup, so requests share them without locks.

use std::sync::Arc;

use heating::Catalog;

use crate::config::AppConfig;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Catalog, config: AppConfig) -> Self {
        Self { catalog: Arc::new(catalog), config: Arc::new(config) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
