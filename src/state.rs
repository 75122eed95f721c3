//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! catalog never changes after startup, so it sits behind a plain `Arc`.

use std::sync::Arc;

use crate::catalog::Catalog;

/// Shared application state. Clone is required by Axum; every field is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    /// Absolute site origin, without a trailing slash.
    pub site_base_url: Arc<str>,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Catalog, site_base_url: &str) -> Self {
        Self { catalog: Arc::new(catalog), site_base_url: Arc::from(site_base_url) }
    }
}
