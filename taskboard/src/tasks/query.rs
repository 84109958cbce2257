//! Filtering and sorting for task listings.

use taskboard_proto::task::{Task, TaskPriority, TaskStatus};

/// Optional criteria for [`select`]; all present criteria must match.
///
/// Archived tasks never match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Exact lane match.
    pub status: Option<TaskStatus>,
    /// Exact priority match.
    pub priority: Option<TaskPriority>,
    /// Exact assignee match.
    pub assignee: Option<String>,
    /// Case-insensitive substring of `"{title} {description}"`.
    pub search: Option<String>,
}

impl TaskFilter {
    /// A filter restricted to one lane.
    #[must_use]
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Adds a free-text search term.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Returns `true` if `task` satisfies every criterion.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        if task.archived {
            return false;
        }
        self.status.is_none_or(|status| task.status == status)
            && self.priority.is_none_or(|priority| task.priority == priority)
            && self
                .assignee
                .as_deref()
                .is_none_or(|assignee| task.assignee.as_deref() == Some(assignee))
            && self
                .search
                .as_deref()
                .is_none_or(|needle| search_text(task).contains(&needle.to_lowercase()))
    }
}

/// Lowercased haystack for free-text search: title and description joined by
/// a single space.
fn search_text(task: &Task) -> String {
    format!(
        "{} {}",
        task.title,
        task.description.as_deref().unwrap_or_default()
    )
    .to_lowercase()
}

/// Returns clones of the tasks matching `filter`, sorted ascending by
/// `order`.
///
/// The sort is stable, so tasks from different lanes sharing an order keep
/// their collection order. That cross-lane order carries no meaning.
#[must_use]
pub fn select(tasks: &[Task], filter: &TaskFilter) -> Vec<Task> {
    let mut selected: Vec<Task> = tasks
        .iter()
        .filter(|task| filter.matches(task))
        .cloned()
        .collect();
    selected.sort_by_key(|task| task.order);
    selected
}
