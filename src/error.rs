//! Custom error types and handling
//!
//! This module defines the application's error types and implements
//! conversion to HTTP responses for the Axum framework.

use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::constants::CAMPAIGN_FETCH_FAILED;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A required request dimension was absent or empty
    #[error("missing {0} param")]
    MissingParameter(String),

    /// The campaign store could not be read
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Failures of the campaign and rule stores
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("store fetch exceeded deadline of {0:?}")]
    Timeout(Duration),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingParameter(_) => StatusCode::BAD_REQUEST,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log storage errors but don't expose details to clients
        let message = match &self {
            AppError::Storage(e) => {
                tracing::error!(error = %e, "Error fetching campaigns");
                tracing::debug!("Storage error details: {:#?}", e);
                CAMPAIGN_FETCH_FAILED.to_string()
            }
            AppError::MissingParameter(_) => self.to_string(),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for store operations
pub type StorageResult<T> = Result<T, StorageError>;
