use crate::api::fixture_dto::ClusterFixtureDto;
use crate::domain::ids::{ExecutorId, NodeId, RackId, TopologyId};
use crate::domain::node::Node;
use serde::Serialize;
use std::collections::HashMap;

/// The read/mutate snapshot a scheduling call takes exclusive logical
/// ownership of for its duration (spec.md §5): nodes indexed by id, the
/// network topography (rack → ordered hostnames), and the per-topology
/// backlog of unassigned executors.
#[derive(Debug, Clone, Serialize)]
pub struct ClusterState {
    pub nodes: HashMap<NodeId, Node>,
    pub network_topography: HashMap<RackId, Vec<String>>,
    unassigned_executors: HashMap<TopologyId, Vec<ExecutorId>>,
}

impl ClusterState {
    pub fn new(nodes: HashMap<NodeId, Node>, network_topography: HashMap<RackId, Vec<String>>) -> Self {
        Self { nodes, network_topography, unassigned_executors: HashMap::new() }
    }

    pub fn set_unassigned_executors(&mut self, topology_id: TopologyId, executors: Vec<ExecutorId>) {
        self.unassigned_executors.insert(topology_id, executors);
    }

    pub fn unassigned_executors(&self, topology_id: &TopologyId) -> Vec<ExecutorId> {
        self.unassigned_executors.get(topology_id).cloned().unwrap_or_default()
    }

    pub fn node_by_hostname(&self, hostname: &str) -> Option<&Node> {
        self.nodes.values().find(|n| n.hostname == hostname)
    }

    /// Builds a cluster state and its topology id's unassigned-executor
    /// backlog from a parsed fixture (used by the CLI binary's loader).
    pub fn from_dto(dto: &ClusterFixtureDto) -> Self {
        let nodes: HashMap<NodeId, Node> = dto
            .nodes
            .iter()
            .map(|n| {
                let id = NodeId::new(n.id.clone());
                let rack_id = n.rack_id.clone().map(RackId::new);
                (id.clone(), Node::new(id, n.hostname.clone(), rack_id, n.total_cpu, n.total_mem, n.ports.iter().copied()))
            })
            .collect();

        let network_topography: HashMap<RackId, Vec<String>> =
            dto.network_topography.iter().map(|(rack_id, hostnames)| (RackId::new(rack_id.clone()), hostnames.clone())).collect();

        let mut state = Self::new(nodes, network_topography);
        let topology_id = TopologyId::new(dto.topology.id.clone());
        let unassigned = dto.topology.unassigned_executors.iter().map(|e| ExecutorId::new(e.clone())).collect();
        state.set_unassigned_executors(topology_id, unassigned);
        state
    }
}
