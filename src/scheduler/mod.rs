pub mod assignment_ledger;
pub mod cluster_view;
pub mod node_ranker;
pub mod priority_interleaver;
pub mod rack_picker;
pub mod result;
pub mod slot_selector;
pub mod topology_walker;

use crate::config::PlacementConfig;
use crate::domain::cluster_state::ClusterState;
use crate::domain::ids::{ExecutorId, NodeId, RackId};
use crate::domain::topology::TopologyDetails;
use crate::error::Result;
use assignment_ledger::AssignmentLedger;
use cluster_view::ClusterView;
use result::{FailureStatus, SchedulingResult};

/// Runs one scheduling call end to end (spec.md §4.8).
///
/// Takes exclusive logical ownership of `cluster_state` for the duration of
/// the call (spec.md §5) — single-threaded, no suspension points, no
/// rollback: a failure discards the partial assignment but never touches
/// `cluster_state` again once `schedule` returns.
///
/// Returns `Err` only for contract violations (spec.md §7) — an unassigned
/// executor the topology never declared. Expected scheduling outcomes
/// (invalid topology, insufficient resources) are `Ok(SchedulingResult::Failure { .. })`.
pub fn schedule(cluster_state: &mut ClusterState, topology: &TopologyDetails, config: &PlacementConfig) -> Result<SchedulingResult> {
    let unassigned = cluster_state.unassigned_executors(&topology.id);
    log::info!("scheduling topology {}: {} unassigned executors, {} nodes", topology.id, unassigned.len(), cluster_state.nodes.len());

    let mut view = ClusterView::new(cluster_state);

    // Step 1.
    if view.free_nodes().is_empty() {
        let message = "no available nodes in cluster".to_string();
        log::error!("{}", message);
        return Ok(SchedulingResult::Failure { status: FailureStatus::FailNotEnoughResources, message });
    }

    // Step 2.
    let Some(order) = topology_walker::walk(topology) else {
        let message = format!("topology {} has no source component", topology.id);
        return Ok(SchedulingResult::Failure { status: FailureStatus::FailInvalidTopology, message });
    };

    // Step 3 + 4.
    let interleaved = priority_interleaver::interleave(&order, topology, &unassigned);
    let system_tasks = priority_interleaver::system_tasks(&order, topology, &unassigned);

    let mut ledger = AssignmentLedger::new();
    let mut chosen_rack: Option<RackId> = None;

    let mut unplaced_after_first_pass = Vec::new();
    for executor_id in &interleaved {
        let candidates = candidate_node_ids(&view, &mut chosen_rack, &ledger);
        if !ledger.place(&mut view, topology, executor_id, &candidates, config)? {
            unplaced_after_first_pass.push(executor_id.clone());
        }
    }

    // Step 5: best-effort second pass for system tasks and first-pass failures.
    let mut second_pass: Vec<ExecutorId> = system_tasks;
    second_pass.extend(unplaced_after_first_pass);

    let mut still_unplaced = Vec::new();
    for executor_id in &second_pass {
        let candidates = candidate_node_ids(&view, &mut chosen_rack, &ledger);
        if !ledger.place(&mut view, topology, executor_id, &candidates, config)? {
            still_unplaced.push(executor_id.clone());
        }
    }

    // Step 6.
    let total = unassigned.len();
    let placed = ledger.placed_executor_count();
    let message = format!("{}/{} executors scheduled", placed, total);

    if !still_unplaced.is_empty() {
        log::error!("{} — unplaced: {:?}", message, still_unplaced);
        return Ok(SchedulingResult::Failure { status: FailureStatus::FailNotEnoughResources, message });
    }

    log::info!("{}", message);
    Ok(SchedulingResult::Success { assignment: ledger.into_assignment(), message })
}

/// Candidate node ids for one placement attempt: a single rack (the
/// fattest, chosen once and cached) while no executor has been placed yet,
/// all free nodes once the reference node is established (spec.md §4.6).
fn candidate_node_ids(view: &ClusterView, chosen_rack: &mut Option<RackId>, ledger: &AssignmentLedger) -> Vec<NodeId> {
    let free_nodes = view.free_nodes();
    if ledger.ref_node().is_some() {
        return free_nodes.into_iter().map(|n| n.id.clone()).collect();
    }

    if chosen_rack.is_none() {
        *chosen_rack = rack_picker::pick_rack(view);
        log::info!("anchoring first placement to rack {:?}", chosen_rack);
    }

    free_nodes.into_iter().filter(|n| n.rack_id == *chosen_rack).map(|n| n.id.clone()).collect()
}
