//! Pure lane-ordering primitives.
//!
//! A lane is the subset of tasks sharing one [`TaskStatus`]. Every function
//! here operates on the whole collection slice and touches only the `order`
//! field of members of a single lane, so the store can compose them without
//! copying tasks around.
//!
//! Lane members are always visited in ascending `order`; ties (which only
//! exist in freshly seeded, not-yet-reindexed data) keep collection order.

use taskboard_proto::task::{Task, TaskId, TaskStatus};

/// Returns the collection indices of every task in `status`'s lane, sorted by
/// `order`, leaving out `skip` if given.
fn lane_positions(tasks: &[Task], status: TaskStatus, skip: Option<&TaskId>) -> Vec<usize> {
    let mut positions: Vec<usize> = tasks
        .iter()
        .enumerate()
        .filter(|(_, t)| t.status == status && skip.is_none_or(|id| &t.id != id))
        .map(|(i, _)| i)
        .collect();
    positions.sort_by_key(|&i| tasks[i].order);
    positions
}

/// Assigns `0..n` to the tasks at `positions`, in that sequence.
fn renumber(tasks: &mut [Task], positions: &[usize]) {
    for (order, &index) in positions.iter().enumerate() {
        tasks[index].order = to_order(order);
    }
}

/// Lanes never approach `u32::MAX` members; saturate rather than wrap.
fn to_order(position: usize) -> u32 {
    u32::try_from(position).unwrap_or(u32::MAX)
}

/// Returns the order a task appended to `status`'s lane should receive:
/// one past the current maximum, or 0 for an empty lane.
#[must_use]
pub fn next_order(tasks: &[Task], status: TaskStatus) -> u32 {
    tasks
        .iter()
        .filter(|t| t.status == status)
        .map(|t| t.order)
        .max()
        .map_or(0, |max| max.saturating_add(1))
}

/// Renumbers `status`'s lane to `0..n` preserving relative order.
///
/// When `skip` is given that task is left out of the sequence and its own
/// `order` is not touched; this is how a task is detached from its old lane
/// before it moves.
pub fn reindex_lane(tasks: &mut [Task], status: TaskStatus, skip: Option<&TaskId>) {
    let positions = lane_positions(tasks, status, skip);
    renumber(tasks, &positions);
}

/// Moves the task at collection index `index` to position `target` within its
/// lane and renumbers the whole lane. Returns the task's final order.
///
/// A `target` past the end of the lane places the task last.
pub fn reposition(tasks: &mut [Task], index: usize, target: u32) -> u32 {
    let status = tasks[index].status;
    let id = tasks[index].id.clone();
    let mut positions = lane_positions(tasks, status, Some(&id));
    let at = usize::try_from(target).map_or(positions.len(), |t| t.min(positions.len()));
    positions.insert(at, index);
    renumber(tasks, &positions);
    tasks[index].order
}

/// Returns `true` if every lane's orders are exactly `0..n`.
#[must_use]
pub fn is_dense(tasks: &[Task]) -> bool {
    TaskStatus::ALL.into_iter().all(|status| {
        let mut orders: Vec<u32> = tasks
            .iter()
            .filter(|t| t.status == status)
            .map(|t| t.order)
            .collect();
        orders.sort_unstable();
        orders
            .iter()
            .enumerate()
            .all(|(position, &order)| to_order(position) == order)
    })
}
