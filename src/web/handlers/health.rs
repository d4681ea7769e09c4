//! # Health Check Handler
//!
//! Liveness/readiness probe against the storage engine.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::error;

use crate::web::state::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    /// Error category name on failure. Never the raw error message, so
    /// connection internals stay out of responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<&'static str>,
}

/// `GET /health`
///
/// Executes a trivial query through the storage engine. 200
/// `{"status":"ok"}` when the store is reachable, 500
/// `{"status":"db_error","detail":<category>}` otherwise.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match state.repository.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                detail: None,
            }),
        ),
        Err(probe_error) => {
            let detail = probe_error.kind();
            error!(detail, "health probe failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthResponse {
                    status: "db_error",
                    detail: Some(detail),
                }),
            )
        }
    }
}
