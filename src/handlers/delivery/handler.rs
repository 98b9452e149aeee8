//! Delivery handler implementations

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{error::AppResult, state::AppState, targeting::ContextExtractor};

use super::response::DeliveryResponse;

/// Look up the campaigns to serve for `app`, `country` and `os`
///
/// Parameters are extracted as ordered pairs so a repeated key resolves to
/// its first value.
pub async fn delivery_lookup(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> AppResult<Response> {
    let context = ContextExtractor::extract(&params)?;

    let matched = state.delivery().select_matches(&context).await?;

    if matched.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let body: Vec<DeliveryResponse> = matched
        .into_iter()
        .map(DeliveryResponse::from)
        .collect();
    Ok(Json(body).into_response())
}
