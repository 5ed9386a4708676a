use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::models::document::SUPPORTED_EXTENSIONS;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every failure is terminal for the request that raised it.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unsupported file type '{filename}'. Supported formats: {}", SUPPORTED_EXTENSIONS.join(", "))]
    UnsupportedFormat { filename: String },

    #[error("Error extracting text from {format}: {message}")]
    Extraction {
        format: &'static str,
        message: String,
    },

    #[error("{0}")]
    EmptyInput(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("{0}")]
    Generation(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Stable machine-readable code sent alongside the message.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
            AppError::Extraction { .. } => "EXTRACTION_FAILED",
            AppError::EmptyInput(_) => "EMPTY_INPUT",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Llm(_) => "LLM_ERROR",
            AppError::Generation(_) => "GENERATION_FAILED",
            AppError::Render(_) => "RENDER_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::UnsupportedFormat { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::Extraction { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::EmptyInput(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Llm(_) | AppError::Generation(_) => StatusCode::BAD_GATEWAY,
            AppError::Render(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        let message = match &self {
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                format!("The language model call failed: {msg}")
            }
            AppError::Render(msg) => {
                tracing::error!("Render error: {msg}");
                "Failed to render the resume PDF".to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal server error occurred".to_string()
            }
            other => {
                tracing::warn!(code, "{other}");
                other.to_string()
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
