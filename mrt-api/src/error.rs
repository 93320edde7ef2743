//! API Error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mrt_core::ValidationError;
use mrt_db::StoreError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Resource not found")]
    NotFound,

    #[error("Render error: {0}")]
    Render(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::BadRequest(err.detail)
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(detail) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    message: "Bad request.",
                    detail: Some(detail),
                    error: None,
                },
            ),
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    message: "Resource not found.",
                    detail: None,
                    error: None,
                },
            ),
            ApiError::Render(cause) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse {
                    message: "Error rendering response.",
                    detail: None,
                    error: Some(cause),
                },
            ),
            ApiError::Store(e) => {
                error!(error = %e, "Request aborted by store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        message: "Internal server error.",
                        detail: None,
                        error: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;
