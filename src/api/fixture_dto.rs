//! JSON shapes accepted by the CLI binary's fixture loader.
//!
//! Mirrors the reference crate's `api::*_dto` modules: plain `Deserialize`
//! structs at the wire boundary, converted into domain types by
//! constructors on the domain side (`ClusterState::from_dto`,
//! `TopologyDetails::from_dto`) rather than by deriving `Deserialize`
//! directly on types that carry internal invariants or derived indexes.

use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
pub struct NodeDto {
    pub id: String,
    pub hostname: String,
    pub rack_id: Option<String>,
    pub total_cpu: f64,
    pub total_mem: f64,
    pub ports: Vec<u32>,
}

#[derive(Debug, Deserialize)]
pub struct ExecutorDto {
    pub id: String,
    pub cpu_req: f64,
    pub mem_req: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ComponentTypeDto {
    Source,
    Processor,
}

#[derive(Debug, Deserialize)]
pub struct ComponentDto {
    pub id: String,
    pub component_type: ComponentTypeDto,
    pub execs: Vec<String>,
    pub parents: Vec<String>,
    pub children: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct TopologyDto {
    pub id: String,
    pub per_worker_max_heap: f64,
    pub components: Vec<ComponentDto>,
    pub executors: Vec<ExecutorDto>,
    pub unassigned_executors: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ClusterFixtureDto {
    pub nodes: Vec<NodeDto>,
    pub network_topography: HashMap<String, Vec<String>>,
    pub topology: TopologyDto,
}
