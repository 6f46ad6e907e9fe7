use crate::domain::ids::{ComponentId, ExecutorId};
use crate::domain::topology::TopologyDetails;
use std::collections::HashSet;

/// Converts the component BFS order and the unassigned-executor set into a
/// round-robin stream of executors (spec.md §4.3): position 0 of rank 0,
/// position 0 of rank 1, ..., then position 1 of rank 0, and so on. Empty
/// rank slots are silently skipped.
///
/// Only covers executors that belong to a component appearing in `order`.
/// Executors with no component (or whose component is unreachable from any
/// source) are "system tasks" — see [`system_tasks`] — and are left for the
/// best-effort second pass.
pub fn interleave(order: &[ComponentId], topology: &TopologyDetails, unassigned: &[ExecutorId]) -> Vec<ExecutorId> {
    let unassigned_set: HashSet<&ExecutorId> = unassigned.iter().collect();

    let rank_lists: Vec<Vec<ExecutorId>> = order
        .iter()
        .map(|component_id| {
            topology
                .component(component_id)
                .map(|c| c.execs.iter().filter(|e| unassigned_set.contains(e)).cloned().collect())
                .unwrap_or_default()
        })
        .collect();

    let max_len = rank_lists.iter().map(|rank| rank.len()).max().unwrap_or(0);
    let mut result = Vec::with_capacity(unassigned.len());
    for position in 0..max_len {
        for rank in &rank_lists {
            if let Some(executor) = rank.get(position) {
                result.push(executor.clone());
            }
        }
    }
    result
}

/// Unassigned executors not covered by the interleaved pass — executors
/// absent from every component in `order`, including ones with no component
/// at all ("system tasks").
pub fn system_tasks(order: &[ComponentId], topology: &TopologyDetails, unassigned: &[ExecutorId]) -> Vec<ExecutorId> {
    let interleaved: HashSet<ExecutorId> = interleave(order, topology, unassigned).into_iter().collect();
    unassigned.iter().filter(|e| !interleaved.contains(e)).cloned().collect()
}
