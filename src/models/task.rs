//! # Task Model
//!
//! The sole persisted entity: a to-do item with a title, a completion
//! flag, and an immutable creation timestamp.
//!
//! ## Database Schema
//!
//! Maps to the `tasks` table:
//! - `id`: primary key, assigned monotonically by the backing store
//! - `title`: non-empty trimmed text, at most 255 characters
//! - `is_done`: completion flag, defaults to false
//! - `created_at`: UTC creation instant, never updated after insert

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted to-do item.
///
/// Serializes to the wire shape
/// `{id, title, is_done, created_at}` with `created_at` in RFC 3339.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub is_done: bool,
    pub created_at: DateTime<Utc>,
}

/// Completion-status filter shared by list and bulk-delete queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// No predicate; every row matches.
    #[default]
    All,
    /// Tasks not yet done (`is_done = false`).
    Active,
    /// Finished tasks (`is_done = true`).
    Completed,
}

impl StatusFilter {
    /// Parse the `status` query parameter.
    ///
    /// Only the two recognized non-default values select a filter;
    /// anything else (including absence) behaves as [`StatusFilter::All`]
    /// and is never rejected.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("active") => StatusFilter::Active,
            Some("completed") => StatusFilter::Completed,
            _ => StatusFilter::All,
        }
    }

    /// The `is_done` predicate this filter selects, if any.
    pub fn done_predicate(self) -> Option<bool> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Active => Some(false),
            StatusFilter::Completed => Some(true),
        }
    }
}

/// Trim a submitted title, rejecting titles that are empty afterwards.
pub fn normalized_title(raw: &str) -> Option<&str> {
    let title = raw.trim();
    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}
