//! Structured error handling for the storage layer.

use thiserror::Error;

/// Errors produced by repository operations.
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// The submitted title was empty after trimming surrounding whitespace.
    #[error("title required")]
    EmptyTitle,

    /// No task exists with the given id.
    #[error("task {0} not found")]
    TaskNotFound(i64),

    /// The backing store failed to execute the operation.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl RepositoryError {
    /// Static category name for diagnostics.
    ///
    /// The health endpoint reports this instead of the error message so
    /// connection internals (hosts, credentials, SQL) never leak.
    pub fn kind(&self) -> &'static str {
        match self {
            RepositoryError::EmptyTitle => "EmptyTitle",
            RepositoryError::TaskNotFound(_) => "TaskNotFound",
            RepositoryError::Database(source) => sqlx_error_kind(source),
        }
    }
}

fn sqlx_error_kind(error: &sqlx::Error) -> &'static str {
    match error {
        sqlx::Error::Configuration(_) => "Configuration",
        sqlx::Error::Database(_) => "Database",
        sqlx::Error::Io(_) => "Io",
        sqlx::Error::Tls(_) => "Tls",
        sqlx::Error::Protocol(_) => "Protocol",
        sqlx::Error::RowNotFound => "RowNotFound",
        sqlx::Error::ColumnNotFound(_) => "ColumnNotFound",
        sqlx::Error::ColumnDecode { .. } => "ColumnDecode",
        sqlx::Error::Decode(_) => "Decode",
        sqlx::Error::PoolTimedOut => "PoolTimedOut",
        sqlx::Error::PoolClosed => "PoolClosed",
        sqlx::Error::WorkerCrashed => "WorkerCrashed",
        _ => "Unknown",
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_pool_and_validation_errors() {
        assert_eq!(RepositoryError::EmptyTitle.kind(), "EmptyTitle");
        assert_eq!(RepositoryError::TaskNotFound(7).kind(), "TaskNotFound");
        assert_eq!(
            RepositoryError::Database(sqlx::Error::PoolClosed).kind(),
            "PoolClosed"
        );
        assert_eq!(
            RepositoryError::Database(sqlx::Error::PoolTimedOut).kind(),
            "PoolTimedOut"
        );
    }

    #[test]
    fn display_keeps_user_facing_messages() {
        assert_eq!(RepositoryError::EmptyTitle.to_string(), "title required");
        assert_eq!(
            RepositoryError::TaskNotFound(3).to_string(),
            "task 3 not found"
        );
    }
}
