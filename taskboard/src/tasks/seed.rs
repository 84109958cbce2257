//! Sample tasks loaded into a fresh board.

use chrono::{Duration, Utc};
use taskboard_proto::task::{Task, TaskId, TaskPriority, TaskStatus};

/// Returns one sample task per lane, each at order 0, with due dates
/// relative to now.
#[must_use]
pub fn sample_tasks() -> Vec<Task> {
    let now = Utc::now();
    let sample = |title: &str,
                  description: &str,
                  status: TaskStatus,
                  priority: TaskPriority,
                  assignee: &str,
                  due_in_days: i64,
                  tag: &str| Task {
        id: TaskId::new(),
        title: title.to_string(),
        description: Some(description.to_string()),
        status,
        priority,
        assignee: Some(assignee.to_string()),
        due_date: Some(now + Duration::days(due_in_days)),
        tags: vec![tag.to_string()],
        archived: false,
        order: 0,
        created_at: now,
        updated_at: now,
    };

    vec![
        sample(
            "Design wireframes",
            "Create responsive wireframes for the Kanban board",
            TaskStatus::Todo,
            TaskPriority::High,
            "Alex Morgan",
            3,
            "design",
        ),
        sample(
            "Setup HTTP server",
            "Initialize the API server with a health check route and logging",
            TaskStatus::InProgress,
            TaskPriority::Medium,
            "Jamie Fox",
            2,
            "backend",
        ),
        sample(
            "Implement drag and drop",
            "Support reordering cards within and across columns",
            TaskStatus::Done,
            TaskPriority::Low,
            "Taylor Smith",
            -1,
            "frontend",
        ),
    ]
}
