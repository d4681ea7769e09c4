//! Data layer: the task entity and its query filters.

pub mod task;

pub use task::{normalized_title, StatusFilter, Task};
