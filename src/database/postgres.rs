//! PostgreSQL storage backend.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::database::POOL_RECYCLE;
use crate::error::{RepositoryError, Result};
use crate::models::{normalized_title, StatusFilter, Task};
use crate::repository::TaskRepository;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS tasks (
    id BIGSERIAL PRIMARY KEY,
    title VARCHAR(255) NOT NULL,
    is_done BOOLEAN NOT NULL DEFAULT FALSE,
    created_at TIMESTAMPTZ NOT NULL
)
"#;

/// Task store backed by a PostgreSQL connection pool.
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    /// Connect the pool and ensure the `tasks` table exists.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .test_before_acquire(true)
            .max_lifetime(POOL_RECYCLE)
            .connect(url)
            .await?;

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
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn list(&self, filter: StatusFilter) -> Result<Vec<Task>> {
        let tasks = match filter.done_predicate() {
            Some(done) => {
                sqlx::query_as::<_, Task>(
                    "SELECT id, title, is_done, created_at FROM tasks \
                     WHERE is_done = $1 ORDER BY created_at DESC, id DESC",
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
            "INSERT INTO tasks (title, is_done, created_at) VALUES ($1, FALSE, $2) \
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
            "UPDATE tasks SET is_done = NOT is_done WHERE id = $1 \
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
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
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
                sqlx::query("DELETE FROM tasks WHERE is_done = $1")
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
