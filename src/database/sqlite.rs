//! SQLite storage backend, the local-development fallback.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::database::POOL_RECYCLE;
use crate::error::{RepositoryError, Result};
use crate::models::{normalized_title, StatusFilter, Task};
use crate::repository::TaskRepository;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    is_done BOOLEAN NOT NULL DEFAULT FALSE,
    created_at TEXT NOT NULL
)
"#;

/// Task store backed by a SQLite file (or `:memory:` in tests).
pub struct SqliteTaskRepository {
    pool: SqlitePool,
}

impl SqliteTaskRepository {
    /// Open (creating if missing) the database and ensure the `tasks`
    /// table exists.
    ///
    /// An in-memory database exists per connection, so memory URLs get
    /// a single-connection pool that is never recycled; file-backed
    /// databases use WAL and the same pre-ping/recycle settings as the
    /// PostgreSQL backend.
    pub async fn connect(url: &str) -> Result<Self> {
        let in_memory = url.contains(":memory:");

        let mut options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .busy_timeout(std::time::Duration::from_secs(5));
        if !in_memory {
            options = options.journal_mode(SqliteJournalMode::Wal);
        }

        let mut pool_options = SqlitePoolOptions::new().test_before_acquire(true);
        pool_options = if in_memory {
            pool_options.max_connections(1)
        } else {
            pool_options.max_lifetime(POOL_RECYCLE)
        };

        let pool = pool_options.connect_with(options).await?;

        let repository = Self { pool };
        repository.ensure_schema().await?;
        Ok(repository)
    }

    async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(SCHEMA).execute(&self.pool).await?;
        tracing::debug!("tasks schema ensured");
        Ok(())
    }

    /// Underlying pool, for tests that need direct SQL access.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn list(&self, filter: StatusFilter) -> Result<Vec<Task>> {
        let tasks = match filter.done_predicate() {
            Some(done) => {
                sqlx::query_as::<_, Task>(
                    "SELECT id, title, is_done, created_at FROM tasks \
                     WHERE is_done = ? ORDER BY created_at DESC, id DESC",
                )
                .bind(done)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Task>(
                    "SELECT id, title, is_done, created_at FROM tasks \
                     ORDER BY created_at DESC, id DESC",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(tasks)
    }

    async fn create(&self, title: &str) -> Result<Task> {
        let title = normalized_title(title).ok_or(RepositoryError::EmptyTitle)?;

        let task = sqlx::query_as::<_, Task>(
            "INSERT INTO tasks (title, is_done, created_at) VALUES (?, FALSE, ?) \
             RETURNING id, title, is_done, created_at",
        )
        .bind(title)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(task_id = task.id, "task created");
        Ok(task)
    }

    async fn toggle(&self, id: i64) -> Result<Task> {
        let task = sqlx::query_as::<_, Task>(
            "UPDATE tasks SET is_done = NOT is_done WHERE id = ? \
             RETURNING id, title, is_done, created_at",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RepositoryError::TaskNotFound(id))?;

        tracing::info!(task_id = task.id, is_done = task.is_done, "task toggled");
        Ok(task)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::TaskNotFound(id));
        }

        tracing::info!(task_id = id, "task deleted");
        Ok(())
    }

    async fn delete_by_status(&self, filter: StatusFilter) -> Result<u64> {
        let result = match filter.done_predicate() {
            Some(done) => {
                sqlx::query("DELETE FROM tasks WHERE is_done = ?")
                    .bind(done)
                    .execute(&self.pool)
                    .await?
            }
            None => sqlx::query("DELETE FROM tasks").execute(&self.pool).await?,
        };

        let deleted = result.rows_affected();
        tracing::info!(deleted, ?filter, "bulk delete");
        Ok(deleted)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
