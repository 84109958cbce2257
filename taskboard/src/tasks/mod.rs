//! Task collection for the board.
//!
//! Tasks are grouped into status lanes. Within each lane the `order` field is
//! kept dense (`0..n`) across every create, update and delete. The pure lane
//! primitives live in [`lanes`], filtering in [`query`], and [`TaskStore`]
//! ties them together.

pub mod lanes;
pub mod query;
pub mod seed;
pub mod store;

pub use lanes::{is_dense, next_order, reindex_lane, reposition};
pub use query::TaskFilter;
pub use seed::sample_tasks;
pub use store::TaskStore;

use taskboard_proto::task::TaskId;
use thiserror::Error;

/// Errors that can occur during task operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    /// Task with the given ID was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),
}
