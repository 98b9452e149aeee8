//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::services::DeliveryService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Campaign selection over the injected stores
    pub delivery: DeliveryService,
}

impl AppState {
    /// Create a new application state
    pub fn new(delivery: DeliveryService) -> Self {
        Self {
            inner: Arc::new(AppStateInner { delivery }),
        }
    }

    /// Get a reference to the delivery service
    pub fn delivery(&self) -> &DeliveryService {
        &self.inner.delivery
    }
}
