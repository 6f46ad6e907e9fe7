use crate::config::PlacementConfig;
use crate::domain::executor::Executor;
use crate::domain::ids::{ExecutorId, NodeId};
use crate::domain::node::WorkerSlot;
use crate::domain::topology::TopologyDetails;
use crate::error::Result;
use crate::scheduler::cluster_view::ClusterView;
use crate::scheduler::node_ranker::rank_nodes;
use crate::scheduler::slot_selector::select_slot;
use std::collections::BTreeMap;

/// Owns the growing `slot -> executors` assignment and the reference-node
/// drift state across a scheduling call (spec.md §4.6).
///
/// The reference node is threaded explicitly through `place`, per spec.md
/// §9's design note to keep the core re-entrant per call rather than
/// relying on shared/global mutable state.
pub struct AssignmentLedger {
    assignment: BTreeMap<WorkerSlot, Vec<Executor>>,
    slot_load: BTreeMap<WorkerSlot, f64>,
    ref_node: Option<NodeId>,
}

impl AssignmentLedger {
    pub fn new() -> Self {
        Self { assignment: BTreeMap::new(), slot_load: BTreeMap::new(), ref_node: None }
    }

    pub fn ref_node(&self) -> Option<&NodeId> {
        self.ref_node.as_ref()
    }

    /// Attempts to place one executor: rank candidates relative to the
    /// current reference node, pick a slot, and on success record the
    /// placement, decrement node resources, and advance the reference node.
    /// Returns `true` on success, `false` if no candidate could fit it.
    ///
    /// Errors out (contract violation, spec.md §7) if `executor_id` doesn't
    /// resolve in `topology` — this can only happen if the caller's
    /// unassigned-executor backlog references an executor the topology never
    /// declared, which is a fixture bug, not an "unschedulable" outcome.
    pub fn place(
        &mut self,
        view: &mut ClusterView,
        topology: &TopologyDetails,
        executor_id: &ExecutorId,
        candidate_ids: &[NodeId],
        config: &PlacementConfig,
    ) -> Result<bool> {
        let cpu = topology.total_cpu_req_task(executor_id)?;
        let mem = topology.total_mem_req_task(executor_id)?;

        let reference = self.ref_node.as_ref().and_then(|id| view.node_by_id(id)).cloned();
        let ranked = rank_nodes(&*view, candidate_ids, cpu, mem, reference.as_ref(), config);

        let heap = topology.topology_worker_max_heap_size();
        let slot_load = &self.slot_load;
        let chosen = select_slot(&*view, &ranked, heap, mem, |slot| slot_load.get(slot).copied().unwrap_or(0.0));

        match chosen {
            Some(slot) => {
                self.assignment.entry(slot.clone()).or_default().push(Executor::new(executor_id.clone(), cpu, mem));
                *self.slot_load.entry(slot.clone()).or_insert(0.0) += mem;
                view.consume(&slot.node_id, cpu, mem);
                log::debug!("placed executor {} on slot {} (cpu={}, mem={})", executor_id, slot, cpu, mem);
                self.ref_node = Some(slot.node_id);
                Ok(true)
            }
            None => {
                log::debug!("no fit found for executor {} (cpu={}, mem={})", executor_id, cpu, mem);
                Ok(false)
            }
        }
    }

    pub fn placed_executor_count(&self) -> usize {
        self.assignment.values().map(|execs| execs.len()).sum()
    }

    pub fn into_assignment(self) -> BTreeMap<WorkerSlot, Vec<Executor>> {
        self.assignment
    }
}

impl Default for AssignmentLedger {
    fn default() -> Self {
        Self::new()
    }
}
