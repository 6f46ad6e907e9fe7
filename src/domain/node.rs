use crate::domain::ids::{NodeId, RackId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A (node, port) pair that can host one or more executors, subject to the
/// topology's per-slot heap cap.
///
/// Deliberately not wrapped in `Id<T>`: this is a plain (node, port) pair
/// used directly as a map key, so `Ord`/`Hash` are derived structurally.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WorkerSlot {
    pub node_id: NodeId,
    pub port: u32,
}

impl WorkerSlot {
    pub fn new(node_id: NodeId, port: u32) -> Self {
        Self { node_id, port }
    }
}

impl std::fmt::Display for WorkerSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.node_id, self.port)
    }
}

/// A single worker machine in the cluster snapshot.
///
/// Owned exclusively by [`crate::scheduler::cluster_view::ClusterView`];
/// mutated in place as executors are assigned over the lifetime of one
/// scheduling call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub hostname: String,
    pub rack_id: Option<RackId>,
    pub total_cpu: f64,
    pub total_mem: f64,
    pub avail_cpu: f64,
    pub avail_mem: f64,
    pub free_slots: BTreeSet<WorkerSlot>,
}

impl Node {
    pub fn new(
        id: NodeId,
        hostname: impl Into<String>,
        rack_id: Option<RackId>,
        total_cpu: f64,
        total_mem: f64,
        ports: impl IntoIterator<Item = u32>,
    ) -> Self {
        let id_clone = id.clone();
        Self {
            id,
            hostname: hostname.into(),
            rack_id,
            total_cpu,
            total_mem,
            avail_cpu: total_cpu,
            avail_mem: total_mem,
            free_slots: ports.into_iter().map(|port| WorkerSlot::new(id_clone.clone(), port)).collect(),
        }
    }

    /// Whether this node has at least one free slot and enough resources for
    /// `cpu`/`mem`, per the eligibility filter in the ranking step.
    pub fn can_host(&self, cpu: f64, mem: f64) -> bool {
        !self.free_slots.is_empty() && self.avail_cpu >= cpu && self.avail_mem >= mem
    }

    /// Decrements available resources. Does not touch `free_slots` — slot
    /// occupancy is governed by the per-slot heap budget, not by `consume`.
    pub fn consume(&mut self, cpu: f64, mem: f64) {
        self.avail_cpu -= cpu;
        self.avail_mem -= mem;
        if self.avail_cpu < 0.0 {
            log::error!("node {} avail_cpu went negative ({}), clamping to 0", self.id, self.avail_cpu);
            self.avail_cpu = 0.0;
        }
        if self.avail_mem < 0.0 {
            log::error!("node {} avail_mem went negative ({}), clamping to 0", self.id, self.avail_mem);
            self.avail_mem = 0.0;
        }
    }
}
