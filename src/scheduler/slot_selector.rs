use crate::domain::ids::NodeId;
use crate::domain::node::WorkerSlot;
use crate::scheduler::cluster_view::ClusterView;

/// Iterates ranked nodes in ascending distance, and each node's free slots
/// in port order, returning the first slot whose remaining heap budget can
/// still fit `task_mem` (spec.md §4.5). Only memory is checked here — CPU is
/// already accounted for at node level by the Node Ranker's eligibility
/// filter.
///
/// `slot_load` reports the sum of `memReq` already assigned to a slot; it is
/// owned by the caller (the Assignment Ledger) since that's the only
/// component tracking growing assignments.
pub fn select_slot(
    view: &ClusterView,
    ranked_nodes: &[NodeId],
    per_worker_max_heap: f64,
    task_mem: f64,
    slot_load: impl Fn(&WorkerSlot) -> f64,
) -> Option<WorkerSlot> {
    for node_id in ranked_nodes {
        let Some(node) = view.node_by_id(node_id) else {
            log::error!("select_slot: ranked node {} vanished from cluster view", node_id);
            continue;
        };
        for slot in &node.free_slots {
            let remaining = per_worker_max_heap - slot_load(slot);
            if remaining >= task_mem {
                return Some(slot.clone());
            }
        }
    }
    None
}
