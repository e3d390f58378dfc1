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
///
/// The variants mirror the failure taxonomy of the analysis pipeline:
/// validation (bad request body), method-not-allowed (wrong verb on a known
/// route), configuration (missing credential), protocol (the oracle replied
/// but not with the declared contract), transport (the oracle was never
/// reached). Nothing is retried — every failure surfaces to the caller.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Oracle protocol error: {0}")]
    Protocol(String),

    #[error("Oracle transport error: {0}")]
    Transport(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::Http(_) => AppError::Transport(e.to_string()),
            LlmError::Api { .. } => AppError::Transport(e.to_string()),
            LlmError::Parse(_) | LlmError::EmptyContent => AppError::Protocol(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, details) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "METHOD_NOT_ALLOWED",
                "Only POST is supported on this endpoint".to_string(),
            ),
            AppError::Config(msg) => {
                tracing::error!("Configuration error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONFIG_ERROR",
                    msg.clone(),
                )
            }
            AppError::Protocol(msg) => {
                tracing::error!("Oracle protocol error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "ORACLE_PROTOCOL_ERROR",
                    msg.clone(),
                )
            }
            AppError::Transport(msg) => {
                tracing::error!("Oracle transport error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "ORACLE_TRANSPORT_ERROR",
                    msg.clone(),
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
            "error": code,
            "details": details
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let response = AppError::Validation("campaigns is required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_method_not_allowed_maps_to_405() {
        let response = AppError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[test]
    fn test_protocol_maps_to_500() {
        let response = AppError::Protocol("empty response".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_llm_empty_content_is_protocol_error() {
        let err: AppError = LlmError::EmptyContent.into();
        assert!(matches!(err, AppError::Protocol(_)));
    }

    #[test]
    fn test_llm_api_failure_is_transport_error() {
        let err: AppError = LlmError::Api {
            status: 503,
            message: "overloaded".to_string(),
        }
        .into();
        assert!(matches!(err, AppError::Transport(_)));
    }
}
