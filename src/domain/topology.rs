use crate::api::fixture_dto::TopologyDto;
use crate::domain::component::{Component, ComponentType};
use crate::domain::executor::Executor;
use crate::domain::ids::{ComponentId, ExecutorId, TopologyId};
use crate::error::{PlacementError, Result};
use serde::Serialize;
use std::collections::HashMap;

/// Read-only view over one topology's unfulfilled demand.
///
/// Mirrors spec.md's `TopologyDetails` external interface: components,
/// executors, the executor→component map, and the per-worker heap cap. The
/// scheduler never mutates this; all mutation during a call lands in
/// [`crate::domain::cluster_state::ClusterState`] instead.
///
/// `components` is kept as an ordered list rather than a bare map: spec.md
/// §4.2 requires that components at equal BFS distance come out in "the
/// source-component iteration order observed from the topology input", and
/// a `HashMap` cannot promise that. Insertion order into the constructor is
/// that input order.
#[derive(Debug, Clone, Serialize)]
pub struct TopologyDetails {
    pub id: TopologyId,
    components: Vec<Component>,
    component_index: HashMap<ComponentId, usize>,
    pub executors: HashMap<ExecutorId, Executor>,
    pub executor_to_component: HashMap<ExecutorId, ComponentId>,
    pub per_worker_max_heap: f64,
}

impl TopologyDetails {
    pub fn new(
        id: TopologyId,
        components: Vec<Component>,
        executors: HashMap<ExecutorId, Executor>,
        executor_to_component: HashMap<ExecutorId, ComponentId>,
        per_worker_max_heap: f64,
    ) -> Self {
        let component_index = components.iter().enumerate().map(|(i, c)| (c.id.clone(), i)).collect();
        Self { id, components, component_index, executors, executor_to_component, per_worker_max_heap }
    }

    /// Components in the order they were supplied to the constructor.
    pub fn components_in_input_order(&self) -> &[Component] {
        &self.components
    }

    pub fn component(&self, id: &ComponentId) -> Option<&Component> {
        self.component_index.get(id).map(|&i| &self.components[i])
    }

    /// Source components, in the order they appear in the topology input.
    pub fn source_components(&self) -> Vec<&Component> {
        self.components.iter().filter(|c| c.is_source()).collect()
    }

    /// Contract violation, not an anomaly: an executor reaching placement
    /// must already be a member of the topology's executor set (spec.md §3's
    /// "eligible for placement only if it belongs to unassignedExecutors"
    /// invariant implies it resolves via this map).
    pub fn total_cpu_req_task(&self, executor: &ExecutorId) -> Result<f64> {
        self.executors.get(executor).map(|e| e.cpu_req).ok_or_else(|| PlacementError::UnknownExecutor(executor.to_string()))
    }

    pub fn total_mem_req_task(&self, executor: &ExecutorId) -> Result<f64> {
        self.executors.get(executor).map(|e| e.mem_req).ok_or_else(|| PlacementError::UnknownExecutor(executor.to_string()))
    }

    pub fn topology_worker_max_heap_size(&self) -> f64 {
        self.per_worker_max_heap
    }

    /// Builds a topology's read-only demand view from a parsed fixture.
    ///
    /// Rejects any executor with a negative `cpu_req`/`mem_req` up front
    /// (spec.md §7's contract-violation taxonomy) rather than letting a
    /// malformed fixture silently poison the node-ranker's distance formula.
    pub fn from_dto(dto: &TopologyDto) -> Result<Self> {
        use crate::api::fixture_dto::ComponentTypeDto;

        let components: Vec<Component> = dto
            .components
            .iter()
            .map(|c| Component {
                id: ComponentId::new(c.id.clone()),
                component_type: match c.component_type {
                    ComponentTypeDto::Source => ComponentType::Source,
                    ComponentTypeDto::Processor => ComponentType::Processor,
                },
                execs: c.execs.iter().map(|e| ExecutorId::new(e.clone())).collect(),
                parents: c.parents.iter().map(|p| ComponentId::new(p.clone())).collect(),
                children: c.children.iter().map(|ch| ComponentId::new(ch.clone())).collect(),
            })
            .collect();

        let mut executors: HashMap<ExecutorId, Executor> = HashMap::new();
        for e in &dto.executors {
            if e.cpu_req < 0.0 || e.mem_req < 0.0 {
                return Err(PlacementError::NegativeDemand(e.id.clone(), e.cpu_req, e.mem_req));
            }
            let id = ExecutorId::new(e.id.clone());
            executors.insert(id.clone(), Executor::new(id, e.cpu_req, e.mem_req));
        }

        let mut executor_to_component = HashMap::new();
        for component in &components {
            for executor_id in &component.execs {
                executor_to_component.insert(executor_id.clone(), component.id.clone());
            }
        }

        Ok(Self::new(TopologyId::new(dto.id.clone()), components, executors, executor_to_component, dto.per_worker_max_heap))
    }
}

#[cfg(test)]
impl Default for TopologyDetails {
    fn default() -> Self {
        Self::new(TopologyId::new("empty"), Vec::new(), HashMap::new(), HashMap::new(), 0.0)
    }
}
