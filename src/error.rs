//! Error handling

use std::path::PathBuf;

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;

use crate::models::Disease;

pub type AppResult<T> = Result<T, AppError>;

/// Fatal conditions detected before the server starts accepting requests
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("model directory not found: {}", .path.display())]
    ModelDirMissing { path: PathBuf },

    #[error("model artifact '{artifact}' not found at {}", .path.display())]
    ArtifactMissing { artifact: &'static str, path: PathBuf },

    #[error("model artifact '{artifact}' could not be loaded: {reason}")]
    ArtifactCorrupt { artifact: &'static str, reason: String },

    #[error("invalid form schema in {}: {reason}", .path.display())]
    FormSchema { path: PathBuf, reason: String },
}

/// A submitted batch with at least one non-numeric value
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Please enter valid numeric values for all inputs. '{label}' is not a number: {value:?}")]
pub struct ValidationError {
    pub index: usize,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PredictError {
    #[error("{disease} model expects {expected} values but received {actual}")]
    ArityMismatch {
        disease: Disease,
        expected: usize,
        actual: usize,
    },

    #[error("{disease} model failed: {reason}")]
    Model { disease: Disease, reason: String },
}

#[derive(Debug)]
pub enum AppError {
    // Resource errors
    NotFound(String),

    // Validation errors
    ValidationError(String),
    ArityMismatch(String),

    // Model errors
    InferenceError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.as_str()),
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            AppError::ArityMismatch(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.as_str()),
            AppError::InferenceError(msg) => {
                tracing::error!("Inference error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Prediction failed")
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<PredictError> for AppError {
    fn from(err: PredictError) -> Self {
        match err {
            PredictError::ArityMismatch { .. } => AppError::ArityMismatch(err.to_string()),
            PredictError::Model { .. } => AppError::InferenceError(err.to_string()),
        }
    }
}
