//! Integration tests for the task store's lane ordering and filtering.
//!
//! Exercises `TaskStore` through its public API only: lane density across
//! creates, moves, reorders and deletes, and the composed list filters.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use taskboard::tasks::{TaskError, TaskFilter, TaskStore, is_dense, sample_tasks};
use taskboard_proto::input::{NewTask, TaskPatch};
use taskboard_proto::task::{Task, TaskId, TaskPriority, TaskStatus};

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

fn add(store: &mut TaskStore, title: &str, status: TaskStatus) -> Task {
    store.create(NewTask::titled(title).with_status(status))
}

fn ids_and_orders(tasks: &[Task]) -> Vec<(TaskId, u32)> {
    tasks.iter().map(|t| (t.id.clone(), t.order)).collect()
}

fn all_tasks(store: &TaskStore) -> Vec<Task> {
    TaskStatus::ALL
        .into_iter()
        .flat_map(|status| store.lane(status))
        .collect()
}

// ---------------------------------------------------------------------------
// Board walkthrough
// ---------------------------------------------------------------------------

#[test]
fn delete_then_move_keeps_both_lanes_dense() {
    let mut store = TaskStore::new();
    let t1 = add(&mut store, "t1", TaskStatus::Todo);
    let t2 = add(&mut store, "t2", TaskStatus::Todo);
    let t3 = add(&mut store, "t3", TaskStatus::Todo);
    assert_eq!((t1.order, t2.order, t3.order), (0, 1, 2));

    store.delete(&t2.id).unwrap();
    let todo = store.list(&TaskFilter::status(TaskStatus::Todo));
    assert_eq!(
        ids_and_orders(&todo),
        [(t1.id.clone(), 0), (t3.id.clone(), 1)]
    );

    let moved = store
        .update(&t1.id, TaskPatch::status(TaskStatus::InProgress))
        .unwrap();
    assert_eq!(moved.order, 0);

    let todo = store.list(&TaskFilter::status(TaskStatus::Todo));
    assert_eq!(ids_and_orders(&todo), [(t3.id, 0)]);
    assert!(is_dense(&all_tasks(&store)));
}

#[test]
fn move_then_reorder_within_destination() {
    let mut store = TaskStore::new();
    let done: Vec<Task> = ["d0", "d1", "d2"]
        .into_iter()
        .map(|title| add(&mut store, title, TaskStatus::Done))
        .collect();
    let mover = add(&mut store, "mover", TaskStatus::InProgress);

    let patch = TaskPatch {
        status: Some(TaskStatus::Done),
        order: Some(1),
        ..TaskPatch::default()
    };
    let moved = store.update(&mover.id, patch).unwrap();
    assert_eq!(moved.order, 1);

    let lane = store.lane(TaskStatus::Done);
    assert_eq!(
        ids_and_orders(&lane),
        [
            (done[0].id.clone(), 0),
            (mover.id.clone(), 1),
            (done[1].id.clone(), 2),
            (done[2].id.clone(), 3),
        ]
    );
    assert!(store.lane(TaskStatus::InProgress).is_empty());
}

#[test]
fn filter_by_status_and_search() {
    let mut store = TaskStore::new();
    store.create(NewTask::titled("Plan sprint"));
    store.create(NewTask::titled("Retro").with_description("plan next steps"));
    store.create(NewTask::titled("Plan launch").with_status(TaskStatus::Done));
    store.create(NewTask::titled("Unrelated"));
    let mut hidden = NewTask::titled("Archived plan");
    hidden.archived = Some(true);
    store.create(hidden);

    let result = store.list(&TaskFilter::status(TaskStatus::Todo).with_search("PLAN"));
    let titles: Vec<&str> = result.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["Plan sprint", "Retro"]);
}

#[test]
fn filter_by_priority_and_assignee() {
    let mut store = TaskStore::new();
    let mut a = NewTask::titled("a");
    a.priority = Some(TaskPriority::High);
    a.assignee = Some("Jo".to_string());
    store.create(a);
    let mut b = NewTask::titled("b");
    b.priority = Some(TaskPriority::High);
    store.create(b);

    let filter = TaskFilter {
        priority: Some(TaskPriority::High),
        assignee: Some("Jo".to_string()),
        ..TaskFilter::default()
    };
    let result = store.list(&filter);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].title, "a");
}

#[test]
fn not_found_leaves_collection_unchanged() {
    let mut store = TaskStore::with_tasks(sample_tasks());
    let before = all_tasks(&store);
    let ghost = TaskId::new();

    assert_eq!(
        store.update(&ghost, TaskPatch::order(0)),
        Err(TaskError::NotFound(ghost.clone()))
    );
    assert_eq!(
        store.delete(&ghost).map(|t| t.id),
        Err(TaskError::NotFound(ghost))
    );
    assert_eq!(all_tasks(&store), before);
}

#[test]
fn cleared_fields_vanish_from_json() {
    let mut store = TaskStore::new();
    let mut input = NewTask::titled("with extras").with_description("desc");
    input.assignee = Some("Lee".to_string());
    input.due_date = Some(chrono::Utc::now());
    let task = store.create(input);

    let patch = TaskPatch {
        description: Some(None),
        assignee: Some(None),
        due_date: Some(None),
        ..TaskPatch::default()
    };
    let updated = store.update(&task.id, patch).unwrap();

    let json = serde_json::to_value(&updated).unwrap();
    let obj = json.as_object().unwrap();
    assert!(!obj.contains_key("description"));
    assert!(!obj.contains_key("assignee"));
    assert!(!obj.contains_key("dueDate"));
}

#[test]
fn reorder_past_archived_sibling_targets_lane_order() {
    let mut store = TaskStore::new();
    let a = add(&mut store, "a", TaskStatus::Todo);
    let b = add(&mut store, "b", TaskStatus::Todo);
    let c = add(&mut store, "c", TaskStatus::Todo);
    let archive = TaskPatch {
        archived: Some(true),
        ..TaskPatch::default()
    };
    store.update(&a.id, archive).unwrap();

    let visible = store.list(&TaskFilter::status(TaskStatus::Todo));
    assert_eq!(ids_and_orders(&visible), [(b.id.clone(), 1), (c.id.clone(), 2)]);

    // Move b below its visible successor by taking the successor's order.
    let moved = store.update(&b.id, TaskPatch::order(visible[1].order)).unwrap();
    assert_eq!(moved.order, 2);

    let visible = store.list(&TaskFilter::status(TaskStatus::Todo));
    assert_eq!(ids_and_orders(&visible), [(c.id.clone(), 1), (b.id.clone(), 2)]);

    // And back above it with the predecessor's order.
    store.update(&b.id, TaskPatch::order(visible[0].order)).unwrap();
    let lane = store.lane(TaskStatus::Todo);
    assert_eq!(
        ids_and_orders(&lane),
        [(a.id, 0), (b.id, 1), (c.id, 2)]
    );
}

#[test]
fn seeded_store_accepts_new_tasks_at_lane_end() {
    let mut store = TaskStore::with_tasks(sample_tasks());
    assert_eq!(store.len(), 3);

    let task = add(&mut store, "next", TaskStatus::InProgress);
    assert_eq!(task.order, 1);
    assert!(is_dense(&all_tasks(&store)));
}
