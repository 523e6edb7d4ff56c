//! Unified error handling for the API.
//!
//! Handlers return [`ApiResult`] and use the `?` operator; every
//! authentication failure collapses to a 401 with a `detail` message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::auth::{ExtractError, RejectReason};

/// API error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Unified error type for API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Authentication missing, malformed, or rejected.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Unexpected server-side failure.
    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl From<RejectReason> for ApiError {
    fn from(reason: RejectReason) -> Self {
        ApiError::Unauthorized(reason.detail())
    }
}

impl From<ExtractError> for ApiError {
    fn from(err: ExtractError) -> Self {
        ApiError::Unauthorized(err.detail().to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::Unauthorized(detail) => (StatusCode::UNAUTHORIZED, detail),
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
