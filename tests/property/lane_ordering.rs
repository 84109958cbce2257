//! Property-based tests for lane ordering.
//!
//! Uses proptest to verify:
//! 1. Every lane stays densely ordered after any sequence of creates, moves,
//!    reorders and deletes.
//! 2. Reordering is a permutation: the mover lands at `min(k, n - 1)` and
//!    the rest keep their relative order.
//! 3. Creating appends to the end of the lane without touching other tasks.
//! 4. Deleting closes the gap while preserving relative order.

use proptest::prelude::*;
use taskboard::tasks::{TaskStore, is_dense};
use taskboard_proto::input::{NewTask, TaskPatch};
use taskboard_proto::task::{Task, TaskId, TaskStatus};

// --- Strategies ---

/// Strategy for generating arbitrary `TaskStatus` values.
fn arb_status() -> impl Strategy<Value = TaskStatus> {
    prop_oneof![
        Just(TaskStatus::Todo),
        Just(TaskStatus::InProgress),
        Just(TaskStatus::Done),
    ]
}

/// One store operation. Task selectors are reduced modulo the current store
/// size when applied.
#[derive(Debug, Clone)]
enum Op {
    Create(TaskStatus),
    Move(usize, TaskStatus),
    Reorder(usize, u32),
    MoveAndReorder(usize, TaskStatus, u32),
    Delete(usize),
}

/// Strategy for generating arbitrary `Op` values, weighted towards creates
/// so lanes actually fill up.
fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => arb_status().prop_map(Op::Create),
        2 => (any::<usize>(), arb_status()).prop_map(|(i, s)| Op::Move(i, s)),
        2 => (any::<usize>(), 0u32..12).prop_map(|(i, k)| Op::Reorder(i, k)),
        1 => (any::<usize>(), arb_status(), 0u32..12)
            .prop_map(|(i, s, k)| Op::MoveAndReorder(i, s, k)),
        1 => any::<usize>().prop_map(Op::Delete),
    ]
}

// --- Helpers ---

fn all_tasks(store: &TaskStore) -> Vec<Task> {
    TaskStatus::ALL
        .into_iter()
        .flat_map(|status| store.lane(status))
        .collect()
}

fn pick(store: &TaskStore, selector: usize) -> Option<TaskId> {
    let tasks = all_tasks(store);
    if tasks.is_empty() {
        None
    } else {
        Some(tasks[selector % tasks.len()].id.clone())
    }
}

fn lane_ids(store: &TaskStore, status: TaskStatus) -> Vec<TaskId> {
    store.lane(status).into_iter().map(|t| t.id).collect()
}

fn apply(store: &mut TaskStore, op: &Op) {
    match *op {
        Op::Create(status) => {
            store.create(NewTask::titled("task").with_status(status));
        }
        Op::Move(i, status) => {
            if let Some(id) = pick(store, i) {
                store.update(&id, TaskPatch::status(status)).ok();
            }
        }
        Op::Reorder(i, k) => {
            if let Some(id) = pick(store, i) {
                store.update(&id, TaskPatch::order(k)).ok();
            }
        }
        Op::MoveAndReorder(i, status, k) => {
            if let Some(id) = pick(store, i) {
                let patch = TaskPatch {
                    status: Some(status),
                    order: Some(k),
                    ..TaskPatch::default()
                };
                store.update(&id, patch).ok();
            }
        }
        Op::Delete(i) => {
            if let Some(id) = pick(store, i) {
                store.delete(&id).ok();
            }
        }
    }
}

fn build_store(ops: &[Op]) -> TaskStore {
    let mut store = TaskStore::new();
    for op in ops {
        apply(&mut store, op);
    }
    store
}

// --- Properties ---

proptest! {
    #[test]
    fn lanes_stay_dense(ops in prop::collection::vec(arb_op(), 0..60)) {
        let mut store = TaskStore::new();
        for op in &ops {
            apply(&mut store, op);
            prop_assert!(is_dense(&all_tasks(&store)), "not dense after {:?}", op);
        }
    }

    #[test]
    fn reorder_is_a_permutation(
        ops in prop::collection::vec(arb_op(), 1..40),
        selector in any::<usize>(),
        target in 0u32..15,
    ) {
        let mut store = build_store(&ops);
        let Some(id) = pick(&store, selector) else {
            return Ok(());
        };
        let status = store.find_by_id(&id).map(|t| t.status).unwrap_or_default();
        let before = lane_ids(&store, status);

        let moved = store.update(&id, TaskPatch::order(target));
        prop_assert!(moved.is_ok());

        let after = lane_ids(&store, status);
        let last = u32::try_from(before.len() - 1).unwrap_or(u32::MAX);
        let expected_slot = target.min(last) as usize;
        prop_assert_eq!(&after[expected_slot], &id);

        let rest_before: Vec<&TaskId> = before.iter().filter(|t| **t != id).collect();
        let rest_after: Vec<&TaskId> = after.iter().filter(|t| **t != id).collect();
        prop_assert_eq!(rest_before, rest_after);
    }

    #[test]
    fn create_appends_without_touching_others(
        ops in prop::collection::vec(arb_op(), 0..40),
        status in arb_status(),
    ) {
        let mut store = build_store(&ops);
        let before = all_tasks(&store);
        let lane_len = store.lane(status).len();

        let created = store.create(NewTask::titled("new").with_status(status));
        prop_assert_eq!(created.order as usize, lane_len);

        for task in &before {
            let now = store.find_by_id(&task.id);
            prop_assert_eq!(now.map(|t| t.order), Some(task.order));
        }
    }

    #[test]
    fn delete_preserves_relative_order(
        ops in prop::collection::vec(arb_op(), 1..40),
        selector in any::<usize>(),
    ) {
        let mut store = build_store(&ops);
        let Some(id) = pick(&store, selector) else {
            return Ok(());
        };
        let status = store.find_by_id(&id).map(|t| t.status).unwrap_or_default();
        let mut expected = lane_ids(&store, status);
        expected.retain(|t| *t != id);

        prop_assert!(store.delete(&id).is_ok());
        prop_assert_eq!(lane_ids(&store, status), expected);
        prop_assert!(is_dense(&all_tasks(&store)));
    }
}
