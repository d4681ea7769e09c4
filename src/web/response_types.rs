//! # Web API Error Types
//!
//! Error types specific to the web API and their HTTP conversions.
//! thiserror for the structure, Axum's `IntoResponse` for the wire
//! format: a flat `{"error": <message>}` body alongside the status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::error::RepositoryError;

/// Web API errors with HTTP status code mappings.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("not found")]
    NotFound,

    #[error("{message}")]
    BadRequest { message: String },

    /// Storage failure during a CRUD operation. Surfaces as a generic
    /// 500; only the health endpoint categorizes storage errors.
    #[error("internal server error")]
    Database { kind: &'static str },
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<RepositoryError> for ApiError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::EmptyTitle => ApiError::bad_request("title required"),
            RepositoryError::TaskNotFound(id) => {
                tracing::debug!(task_id = id, "task not found");
                ApiError::NotFound
            }
            RepositoryError::Database(_) => {
                let kind = error.kind();
                tracing::error!(kind, %error, "storage failure during request");
                ApiError::Database { kind }
            }
        }
    }
}

/// Result type alias for web API operations.
pub type ApiResult<T> = Result<T, ApiError>;
