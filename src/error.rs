//! Error types for the notes service
//!
//! Provides the unified error taxonomy using thiserror. Variants map to
//! transport status codes only at the boundary, in `IntoResponse`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::models::ErrorResponse;

// == Api Error Enum ==
/// Unified error type for the notes service.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Path parameter is not a valid note identifier
    #[error("Invalid note ID")]
    InvalidId,

    /// Request body failed validation
    #[error("{0}")]
    Validation(String),

    /// Note does not exist
    #[error("Note not found")]
    NotFound,

    /// A note with the same title and content already exists
    #[error("A note with the same title and content already exists")]
    DuplicateNote,

    /// Request rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Backing store failure
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Any other internal failure
    #[error("{0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::InvalidId => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::with_detail("Bad Request", "Invalid note ID"),
            ),
            ApiError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::with_detail("Bad Request", msg.as_str()),
            ),
            ApiError::NotFound => (StatusCode::NOT_FOUND, ErrorResponse::new("Not Found")),
            ApiError::DuplicateNote => (
                StatusCode::CONFLICT,
                ErrorResponse::with_detail("Duplicate note detected", self.to_string()),
            ),
            ApiError::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                ErrorResponse::new("Too Many Requests"),
            ),
            ApiError::Database(_) | ApiError::Internal(_) => {
                error!("request failed: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::with_detail("Internal Server Error", self.to_string()),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the notes service.
pub type Result<T> = std::result::Result<T, ApiError>;
