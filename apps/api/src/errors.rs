use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::interview::InterviewError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Analysis failed: {0}")]
    Llm(#[from] LlmError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<InterviewError> for AppError {
    fn from(err: InterviewError) -> Self {
        let message = err.to_string();
        match err {
            InterviewError::EmptyAnswer => AppError::Validation(message),
            InterviewError::NotInProgress | InterviewError::NotCompleted => {
                AppError::Conflict(message)
            }
            InterviewError::Remote(e) => AppError::Llm(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_ERROR",
                    format!("Analysis failed: {e}"),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_answer_maps_to_validation() {
        let err: AppError = InterviewError::EmptyAnswer.into();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_state_misuse_maps_to_conflict() {
        let err: AppError = InterviewError::NotCompleted.into();
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_remote_failure_is_distinguishable() {
        let err: AppError = InterviewError::Remote(LlmError::EmptyContent).into();
        assert!(matches!(err, AppError::Llm(LlmError::EmptyContent)));
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }
}
