//! Shared state for the web API.

use std::sync::Arc;

use crate::repository::TaskRepository;

/// Dependencies injected into every handler.
///
/// Built once in `main` around the storage engine selected at startup;
/// handlers never reach for ambient globals.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn TaskRepository>,
}

impl AppState {
    pub fn new(repository: Arc<dyn TaskRepository>) -> Self {
        Self { repository }
    }
}
