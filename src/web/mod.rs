//! # HTTP API Layer
//!
//! Axum router and handlers over the injected task repository.
//!
//! Routes:
//! - `GET /` — UI entry page
//! - `GET /health` — storage probe
//! - `GET|POST|DELETE /api/tasks` — list / create / bulk delete
//! - `PATCH /api/tasks/{id}/toggle` — flip completion
//! - `DELETE /api/tasks/{id}` — delete one

use axum::routing::{delete, get, patch};
use axum::Router;

pub mod handlers;
pub mod response_types;
pub mod state;

pub use response_types::{ApiError, ApiResult};
pub use state::AppState;

/// Build the application router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::ui::index))
        .route("/health", get(handlers::health::health))
        .route(
            "/api/tasks",
            get(handlers::tasks::list_tasks)
                .post(handlers::tasks::create_task)
                .delete(handlers::tasks::bulk_delete_tasks),
        )
        .route("/api/tasks/{id}/toggle", patch(handlers::tasks::toggle_task))
        .route("/api/tasks/{id}", delete(handlers::tasks::delete_task))
        .with_state(state)
}
