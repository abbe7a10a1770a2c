use std::sync::Arc;

use price_cache::lookup::PriceLookupService;

/// Shared application state, passed to all route handlers via
/// `axum::extract::State`.
pub struct AppState {
    pub service: PriceLookupService,
}

impl AppState {
    pub fn new(service: PriceLookupService) -> Arc<Self> {
        Arc::new(Self { service })
    }
}
