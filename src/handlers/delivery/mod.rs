//! Campaign delivery handlers

mod handler;
pub mod response;

pub use handler::*;
pub use response::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Delivery routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/delivery-lookup", get(handler::delivery_lookup))
        // Path served by earlier deployments
        .route("/v1/delivery", get(handler::delivery_lookup))
}
