//! Maps domain errors onto HTTP responses.
//!
//! 500 bodies are always the generic message; internal detail stays in the log.

use super::dto::ErrorResponse;
use crate::domain::{DomainError, NO_INPUT_MESSAGE};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::any::Any;
use tracing::error;

/// Body text for every 500 response.
pub const GENERIC_ERROR_MESSAGE: &str =
    "An error occurred while processing your request. Please try again later.";

#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self.0 {
            DomainError::Validation(_) => (StatusCode::BAD_REQUEST, NO_INPUT_MESSAGE),
            DomainError::Provider(_) | DomainError::Unexpected(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR_MESSAGE)
            }
        };
        (
            status,
            Json(ErrorResponse {
                error: msg.to_string(),
            }),
        )
            .into_response()
    }
}

/// Response for a panicking handler, used with `CatchPanicLayer::custom`.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    error!(error = %detail, "handler panicked");
    ApiError(DomainError::Unexpected(detail)).into_response()
}
