#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections

//! # Taskboard
//!
//! Minimal task-tracking REST service: create, list, toggle, and delete
//! short text tasks, with completion-status filtering and bulk
//! deletion.
//!
//! ## Architecture
//!
//! One storage engine instance is constructed at startup from
//! environment configuration and injected into the HTTP layer. The
//! connection-string builder picks PostgreSQL when the `DB_*` variables
//! are present and falls back to a local SQLite file otherwise, so the
//! service runs with zero configuration in development.
//!
//! ## Module Organization
//!
//! - [`config`] - Environment configuration and connection-string building
//! - [`models`] - The task entity and status filters
//! - [`repository`] - Persistence contract implemented per backend
//! - [`database`] - Storage engine: pools, schema, PostgreSQL/SQLite backends
//! - [`web`] - Axum router, handlers, and API error mapping
//! - [`error`] - Structured error handling
//! - [`logging`] - Tracing setup

pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod models;
pub mod repository;
pub mod web;

pub use error::{RepositoryError, Result};
pub use models::{StatusFilter, Task};
pub use repository::TaskRepository;
