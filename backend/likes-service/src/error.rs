//! Error types for likes-service.
//!
//! Errors are converted to JSON HTTP responses with a single `error` field,
//! which is the shape clients of this surface expect.

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use like_types::ErrorBody;
use thiserror::Error;

/// Result type for likes-service operations
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    /// Missing, empty, or malformed identifier or request body
    #[error("{0}")]
    InvalidArgument(String),

    /// Anything that should not leak details to the caller
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}

impl From<serde_json::Error> for AppError {
    fn from(_: serde_json::Error) -> Self {
        AppError::InvalidArgument("Invalid request body".to_string())
    }
}
