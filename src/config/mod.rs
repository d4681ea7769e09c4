//! # Configuration Management
//!
//! Environment-driven configuration for the service. The only
//! configurable subsystem is the storage engine; server options live on
//! the binary's command line (with env fallbacks).

pub mod database;

pub use database::{resolve_credential, DatabaseSettings, SQLITE_FALLBACK_URL};
