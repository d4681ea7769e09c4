//! # Storage Engine
//!
//! Owns the connection pool bound to the resolved database URL and the
//! `tasks` schema. Two interchangeable backends sit behind the
//! [`TaskRepository`] trait:
//!
//! - [`postgres`] for network databases (`postgres://` URLs)
//! - [`sqlite`] for the local-file fallback (everything else)
//!
//! Both pools validate connections before reuse (pre-ping) and recycle
//! pooled connections after [`POOL_RECYCLE`] to avoid handing stale
//! connections to request handlers. The schema is created idempotently
//! at startup; there is no migration system beyond that.

use std::sync::Arc;
use std::time::Duration;

use crate::error::Result;
use crate::repository::TaskRepository;

pub mod postgres;
pub mod sqlite;

pub use postgres::PostgresTaskRepository;
pub use sqlite::SqliteTaskRepository;

/// Pooled connections older than this are discarded instead of reused.
pub const POOL_RECYCLE: Duration = Duration::from_secs(300);

/// Connect the backend selected by the URL scheme and ensure the schema
/// exists.
///
/// Constructed once in `main` for the process lifetime and handed to
/// the web state; nothing else opens database connections.
pub async fn connect(url: &str) -> Result<Arc<dyn TaskRepository>> {
    if url.starts_with("postgres://") || url.starts_with("postgresql://") {
        tracing::info!(backend = "postgres", "connecting storage engine");
        Ok(Arc::new(PostgresTaskRepository::connect(url).await?))
    } else {
        tracing::info!(backend = "sqlite", "connecting storage engine");
        Ok(Arc::new(SqliteTaskRepository::connect(url).await?))
    }
}
