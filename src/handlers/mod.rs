//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod delivery;
pub mod health;

use axum::{middleware, Router};
use tower_http::trace::TraceLayer;

use crate::{middleware::logging_middleware, state::AppState};

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(delivery::routes())
}

/// Build the application router with its middleware stack
pub fn router(state: AppState) -> Router {
    routes()
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
