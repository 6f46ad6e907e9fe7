use crate::domain::cluster_state::ClusterState;
use crate::domain::ids::{NodeId, RackId};
use crate::domain::node::Node;
use crate::domain::rack::Rack;

/// Read-only wrapper over the input snapshot, indexing nodes by id, hostname,
/// and rack (spec.md §4.1). Exclusively owns the right to mutate `Node`
/// state via [`ClusterView::consume`]; every other scheduler component only
/// ever borrows through this view.
pub struct ClusterView<'a> {
    state: &'a mut ClusterState,
    racks: Vec<Rack>,
}

impl<'a> ClusterView<'a> {
    pub fn new(state: &'a mut ClusterState) -> Self {
        let mut racks: Vec<Rack> = state.network_topography.iter().map(|(id, hostnames)| Rack::new(id.clone(), hostnames.clone())).collect();
        racks.sort_by(|a, b| a.id.cmp(&b.id));
        Self { state, racks }
    }

    pub fn node_by_id(&self, id: &NodeId) -> Option<&Node> {
        self.state.nodes.get(id)
    }

    /// Hostname-not-found is a logged anomaly, not fatal (spec.md §4.1).
    pub fn node_by_hostname(&self, hostname: &str) -> Option<&Node> {
        let found = self.state.node_by_hostname(hostname);
        if found.is_none() {
            log::warn!("node_by_hostname: no node found for hostname '{}'", hostname);
        }
        found
    }

    /// The rack a node belongs to, if known. A node with no identifiable
    /// rack is an anomaly handled by callers (treated as distance 1.0).
    pub fn rack_of<'b>(&self, node: &'b Node) -> Option<&'b RackId> {
        let rack_id = node.rack_id.as_ref();
        if rack_id.is_none() {
            log::warn!("rack_of: node {} has no identifiable rack", node.id);
        }
        rack_id
    }

    /// Racks sorted by id, for deterministic iteration (spec.md §5).
    pub fn racks(&self) -> &[Rack] {
        &self.racks
    }

    /// Nodes with at least one free slot, sorted by id.
    pub fn free_nodes(&self) -> Vec<&Node> {
        let mut nodes: Vec<&Node> = self.state.nodes.values().filter(|n| !n.free_slots.is_empty()).collect();
        nodes.sort_by(|a, b| a.id.cmp(&b.id));
        nodes
    }

    /// Atomically decrements `avail_cpu`/`avail_mem` on `node_id`.
    ///
    /// Slot occupancy is governed entirely by the heap-budget check in the
    /// Slot Selector; a slot stays in `free_slots` until the next attempted
    /// placement would exceed `perWorkerMaxHeap` (spec.md §4.1's resolved
    /// Open Question), so `consume` never touches `free_slots`.
    pub fn consume(&mut self, node_id: &NodeId, cpu: f64, mem: f64) {
        match self.state.nodes.get_mut(node_id) {
            Some(node) => node.consume(cpu, mem),
            None => log::error!("consume: node {} not found in cluster state", node_id),
        }
    }
}
