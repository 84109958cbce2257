//! The in-memory task collection.
//!
//! `TaskStore` owns every task and is the only place lane orderings change.
//! It is a plain synchronous value: wrap it in a lock to share it between
//! request handlers. Every method returns owned snapshots, never references
//! into the collection.

use chrono::Utc;
use taskboard_proto::input::{NewTask, TaskPatch};
use taskboard_proto::task::{Task, TaskId, TaskStatus};

use super::TaskError;
use super::lanes::{next_order, reindex_lane, reposition};
use super::query::{TaskFilter, select};

/// Ordered collection of tasks with dense per-lane ordering.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Creates a store holding `tasks`.
    ///
    /// Every lane is reindexed on the way in, so a seed with gaps or
    /// duplicate orders still yields a dense store.
    #[must_use]
    pub fn with_tasks(mut tasks: Vec<Task>) -> Self {
        for status in TaskStatus::ALL {
            reindex_lane(&mut tasks, status, None);
        }
        Self { tasks }
    }

    /// Number of tasks held, archived ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the non-archived tasks matching `filter`, sorted by order.
    #[must_use]
    pub fn list(&self, filter: &TaskFilter) -> Vec<Task> {
        select(&self.tasks, filter)
    }

    /// Returns every task in `status`'s lane, archived ones included, sorted
    /// by order.
    #[must_use]
    pub fn lane(&self, status: TaskStatus) -> Vec<Task> {
        let mut lane: Vec<Task> = self
            .tasks
            .iter()
            .filter(|t| t.status == status)
            .cloned()
            .collect();
        lane.sort_by_key(|t| t.order);
        lane
    }

    /// Looks up a task by id. Archived tasks are found too.
    #[must_use]
    pub fn find_by_id(&self, id: &TaskId) -> Option<Task> {
        self.tasks.iter().find(|t| &t.id == id).cloned()
    }

    /// Creates a task at the end of its lane and returns it.
    pub fn create(&mut self, input: NewTask) -> Task {
        let now = Utc::now();
        let status = input.status.unwrap_or_default();
        let task = Task {
            id: TaskId::new(),
            title: input.title,
            description: input.description,
            status,
            priority: input.priority.unwrap_or_default(),
            assignee: input.assignee,
            due_date: input.due_date,
            tags: input.tags,
            archived: input.archived.unwrap_or(false),
            order: next_order(&self.tasks, status),
            created_at: now,
            updated_at: now,
        };

        tracing::debug!(
            task_id = %task.id,
            status = %task.status,
            order = task.order,
            "task created"
        );

        self.tasks.push(task.clone());
        task
    }

    /// Applies `patch` to the task with `id` and returns the updated task.
    ///
    /// A status change detaches the task from its old lane (closing the gap)
    /// and appends it to the new one. An explicit `order` then repositions it
    /// within whichever lane it ends up in. Remaining fields are overwritten,
    /// or cleared when patched with an explicit null.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::NotFound`] without touching the collection if no
    /// task has that id.
    pub fn update(&mut self, id: &TaskId, patch: TaskPatch) -> Result<Task, TaskError> {
        let index = self.position(id)?;
        let TaskPatch {
            title,
            description,
            status,
            priority,
            assignee,
            due_date,
            tags,
            archived,
            order,
        } = patch;

        if let Some(next) = status {
            let current = self.tasks[index].status;
            if next != current {
                reindex_lane(&mut self.tasks, current, Some(id));
                let appended = next_order(&self.tasks, next);
                let task = &mut self.tasks[index];
                task.status = next;
                task.order = appended;
                tracing::debug!(
                    task_id = %id,
                    from = %current,
                    to = %next,
                    order = appended,
                    "task moved"
                );
            }
        }

        if let Some(target) = order {
            let placed = reposition(&mut self.tasks, index, target);
            tracing::debug!(
                task_id = %id,
                requested = target,
                order = placed,
                "task repositioned"
            );
        }

        let task = &mut self.tasks[index];
        if let Some(title) = title {
            task.title = title;
        }
        if let Some(description) = description {
            task.description = description;
        }
        if let Some(priority) = priority {
            task.priority = priority;
        }
        if let Some(assignee) = assignee {
            task.assignee = assignee;
        }
        if let Some(due_date) = due_date {
            task.due_date = due_date;
        }
        if let Some(tags) = tags {
            task.tags = tags;
        }
        if let Some(archived) = archived {
            task.archived = archived;
        }
        task.updated_at = Utc::now();

        Ok(task.clone())
    }

    /// Removes the task with `id`, closes the gap in its lane, and returns
    /// the removed task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::NotFound`] without touching the collection if no
    /// task has that id.
    pub fn delete(&mut self, id: &TaskId) -> Result<Task, TaskError> {
        let index = self.position(id)?;
        let removed = self.tasks.remove(index);
        reindex_lane(&mut self.tasks, removed.status, None);

        tracing::debug!(task_id = %id, status = %removed.status, "task deleted");
        Ok(removed)
    }

    /// Returns the collection index of the task with `id`.
    fn position(&self, id: &TaskId) -> Result<usize, TaskError> {
        self.tasks
            .iter()
            .position(|t| &t.id == id)
            .ok_or_else(|| TaskError::NotFound(id.clone()))
    }
}
