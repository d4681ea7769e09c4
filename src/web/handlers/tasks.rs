//! # Task Handlers
//!
//! HTTP handlers for creating, listing, toggling, and deleting tasks.
//!
//! Input handling is deliberately forgiving: unrecognized `status`
//! values fall back to no filter, and request bodies that are absent or
//! malformed behave as an empty object instead of rejecting the
//! request. Validation failures that matter (an empty title) and
//! unknown ids come back from the repository and map to 400/404.

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{StatusFilter, Task};
use crate::web::response_types::ApiResult;
use crate::web::state::AppState;

/// `?status=` query string shared by list and bulk delete.
#[derive(Debug, Default, Deserialize)]
pub struct StatusQuery {
    pub status: Option<String>,
}

impl StatusQuery {
    fn filter(&self) -> StatusFilter {
        StatusFilter::parse(self.status.as_deref())
    }
}

/// Body of `POST /api/tasks`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub title: String,
}

/// Response for bulk deletion.
#[derive(Debug, Serialize)]
pub struct BulkDeleteResponse {
    pub deleted: u64,
}

/// `GET /api/tasks?status={all|active|completed}`
///
/// Returns matching tasks newest first.
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<StatusQuery>,
) -> ApiResult<Json<Vec<Task>>> {
    let filter = query.filter();
    debug!(?filter, "listing tasks");

    let tasks = state.repository.list(filter).await?;
    Ok(Json(tasks))
}

/// `POST /api/tasks` with body `{"title": "..."}`
///
/// 200 with the created task, or 400 if the trimmed title is empty.
pub async fn create_task(State(state): State<AppState>, body: Bytes) -> ApiResult<Json<Task>> {
    // An absent or malformed body behaves as `{}`; the empty-title
    // rejection below is the only validation failure.
    let request: CreateTaskRequest = serde_json::from_slice(&body).unwrap_or_default();

    let task = state.repository.create(&request.title).await?;
    Ok(Json(task))
}

/// `PATCH /api/tasks/{id}/toggle`
///
/// Flips the completion flag. 200 with the updated task, or 404.
pub async fn toggle_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Task>> {
    let task = state.repository.toggle(id).await?;
    Ok(Json(task))
}

/// `DELETE /api/tasks/{id}`
///
/// 204 on success, 404 for an unknown id.
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.repository.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /api/tasks?status={all|active|completed}`
///
/// Deletes every matching row in one statement and reports the count.
pub async fn bulk_delete_tasks(
    State(state): State<AppState>,
    Query(query): Query<StatusQuery>,
) -> ApiResult<Json<BulkDeleteResponse>> {
    let deleted = state.repository.delete_by_status(query.filter()).await?;
    Ok(Json(BulkDeleteResponse { deleted }))
}
