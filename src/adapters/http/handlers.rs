//! Route handlers. Thin: decode, delegate to the advice port, encode.

use super::AppState;
use super::dto::{AdviceResponse, AskRequest, StatusResponse};
use super::error::ApiError;
use crate::domain::{DomainError, NO_INPUT_MESSAGE};
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::HeaderMap;
use axum::http::header::ORIGIN;
use axum::response::IntoResponse;
use tracing::{error, warn};

pub const WELCOME_TEXT: &str = "Welcome to Free the Cork Sommelier!";

/// GET /
pub async fn home() -> &'static str {
    WELCOME_TEXT
}

/// GET /check - Health probe. Never touches the provider.
pub async fn check() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "Server is running",
    })
}

/// POST /ask
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:5000/ask \
///   -H 'content-type: application/json' \
///   -d '{"question":"What wine pairs well with steak?"}'
/// ```
pub async fn ask(
    State(state): State<AppState>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<AdviceResponse>, ApiError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            error!(reason = %rejection.body_text(), "No input provided");
            return Err(DomainError::Validation(NO_INPUT_MESSAGE.to_string()).into());
        }
    };

    let advice = state.advice.advise(request.question_text()).await?;
    Ok(Json(AdviceResponse {
        advice: advice.text,
    }))
}

/// POST /get_wine_advice - Deprecated alias of `POST /ask`.
pub async fn ask_deprecated(
    state: State<AppState>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<AdviceResponse>, ApiError> {
    warn!("request used deprecated route /get_wine_advice; use /ask instead");
    ask(state, payload).await
}

/// OPTIONS /ask - Preflight acknowledgement. Bypasses the pipeline; the body is ignored.
pub async fn preflight(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let cors_headers = state.cors.preflight_headers(headers.get(ORIGIN));
    (cors_headers, Json(StatusResponse { status: "ok" }))
}
