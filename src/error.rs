use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::validation::ValidationFailure;

#[derive(Debug)]
pub enum AppError {
    NotFound,
    Validation(ValidationFailure),
    BadRequest(String),
    PayloadTooLarge(String),
    Internal(String),
    Database(sqlx::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::NotFound => write!(f, "Not Found"),
            AppError::Validation(failure) => write!(f, "Validation Failed: {}", failure.message),
            AppError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            AppError::PayloadTooLarge(msg) => write!(f, "Payload Too Large: {msg}"),
            AppError::Internal(msg) => write!(f, "Internal Error: {msg}"),
            AppError::Database(err) => write!(f, "Database Error: {err}"),
        }
    }
}

impl std::error::Error for AppError {}

/// Store errors that mean the database could not be reached at all.
fn is_unavailable(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) | sqlx::Error::Tls(_)
    )
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, failure) = match self {
            AppError::NotFound => return StatusCode::NOT_FOUND.into_response(),
            AppError::Validation(failure) => (StatusCode::BAD_REQUEST, failure),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ValidationFailure::new(msg)),
            AppError::PayloadTooLarge(msg) => {
                (StatusCode::PAYLOAD_TOO_LARGE, ValidationFailure::new(msg))
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ValidationFailure::new("Internal server error"),
                )
            }
            AppError::Database(err) if is_unavailable(&err) => {
                tracing::error!("Database unavailable: {err}");
                (
                    StatusCode::BAD_GATEWAY,
                    ValidationFailure::new("Database unavailable"),
                )
            }
            AppError::Database(err) => {
                tracing::error!("Database error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ValidationFailure::new("Internal server error"),
                )
            }
        };

        (status, Json(failure)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err)
    }
}
