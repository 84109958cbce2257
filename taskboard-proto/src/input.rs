//! Inputs accepted by the task store: a new task and a partial update.
//!
//! Both deserialize straight from the REST request bodies. Optional fields of
//! [`TaskPatch`] that may be cleared use `Option<Option<T>>`:
//!
//! | JSON              | Rust           | Meaning         |
//! |-------------------|----------------|-----------------|
//! | key missing       | `None`         | leave unchanged |
//! | `"key": null`     | `Some(None)`   | clear the field |
//! | `"key": value`    | `Some(Some(v))`| overwrite       |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::task::{TaskPriority, TaskStatus};

/// Fields for creating a task. Everything except `title` is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    /// Card title.
    pub title: String,
    /// Longer free-form text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Destination lane; TODO when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    /// Priority; MEDIUM when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    /// Free-form assignee name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Optional deadline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    /// Labels, in insertion order.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Create the task already archived.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

impl NewTask {
    /// A new task with only a title set.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the destination lane.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A partial update to an existing task.
///
/// `status` and `order` drive lane moves and repositioning; the remaining
/// fields are plain overwrites. `tags` replaces the whole list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    /// New title.
    #[serde(default, deserialize_with = "deserialize_some")]
    pub title: Option<String>,
    /// New description, or `Some(None)` to clear it.
    #[serde(default, deserialize_with = "deserialize_some")]
    pub description: Option<Option<String>>,
    /// Move the task to another lane (appended at its end).
    #[serde(default, deserialize_with = "deserialize_some")]
    pub status: Option<TaskStatus>,
    /// New priority.
    #[serde(default, deserialize_with = "deserialize_some")]
    pub priority: Option<TaskPriority>,
    /// New assignee, or `Some(None)` to clear it.
    #[serde(default, deserialize_with = "deserialize_some")]
    pub assignee: Option<Option<String>>,
    /// New deadline, or `Some(None)` to clear it.
    #[serde(default, deserialize_with = "deserialize_some")]
    pub due_date: Option<Option<DateTime<Utc>>>,
    /// Replacement tag list.
    #[serde(default, deserialize_with = "deserialize_some")]
    pub tags: Option<Vec<String>>,
    /// Archive or unarchive.
    #[serde(default, deserialize_with = "deserialize_some")]
    pub archived: Option<bool>,
    /// Target position within the (possibly new) lane.
    #[serde(default, deserialize_with = "deserialize_some")]
    pub order: Option<u32>,
}

impl TaskPatch {
    /// A patch that moves the task to `status`.
    #[must_use]
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// A patch that repositions the task within its lane.
    #[must_use]
    pub fn order(order: u32) -> Self {
        Self {
            order: Some(order),
            ..Self::default()
        }
    }
}

/// Deserializes a present key as `Some(..)`.
///
/// Combined with `#[serde(default)]`, a missing key stays `None`. When `T` is
/// itself an `Option`, `null` becomes `Some(None)` and clears the field;
/// for any other `T`, `null` is rejected.
fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
