use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Llm(e) if e.status() == Some(429) => {
                tracing::warn!("LLM rate limited: {e}");
                (
                    StatusCode::TOO_MANY_REQUESTS,
                    "RATE_LIMITED",
                    "The completion service is rate limiting requests".to_string(),
                )
            }
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_ERROR",
                    "The completion service request failed".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
