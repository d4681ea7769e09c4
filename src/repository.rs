//! # Task Repository Contract
//!
//! Persistence interface implemented by each storage backend. Handlers
//! depend on `Arc<dyn TaskRepository>` so the backend chosen at startup
//! (PostgreSQL or the SQLite fallback) is invisible to the API layer.
//!
//! Every operation executes as a single statement against the pool:
//! the connection checkout is the unit of work, committed by the store
//! on success and released on drop in all paths. Concurrent access to
//! the same row is left to the backing store's transaction isolation;
//! no operation makes a stronger guarantee than row-level atomicity.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{StatusFilter, Task};

#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Fetch tasks matching `filter`, newest first.
    async fn list(&self, filter: StatusFilter) -> Result<Vec<Task>>;

    /// Insert a task from a raw title.
    ///
    /// The title is trimmed; a title that is empty afterwards is
    /// rejected with [`RepositoryError::EmptyTitle`] before any row is
    /// written.
    ///
    /// [`RepositoryError::EmptyTitle`]: crate::error::RepositoryError::EmptyTitle
    async fn create(&self, title: &str) -> Result<Task>;

    /// Flip the completion flag of the task with the given id.
    async fn toggle(&self, id: i64) -> Result<Task>;

    /// Remove the task with the given id.
    async fn delete(&self, id: i64) -> Result<()>;

    /// Remove every task matching `filter` in one statement, without
    /// loading the rows first. Returns the number of rows deleted.
    ///
    /// Applies the exact predicate used by [`TaskRepository::list`].
    async fn delete_by_status(&self, filter: StatusFilter) -> Result<u64>;

    /// Execute a trivial query to verify the store is reachable.
    async fn ping(&self) -> Result<()>;
}
