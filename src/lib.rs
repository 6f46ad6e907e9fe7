pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;
pub mod scheduler;

use crate::api::fixture_dto::ClusterFixtureDto;
use crate::config::PlacementConfig;
use crate::domain::cluster_state::ClusterState;
use crate::domain::topology::TopologyDetails;
use crate::error::Result;
use crate::loader::parser::parse_json_file;
use crate::scheduler::result::SchedulingResult;

/// Loads a cluster fixture from `file_path` and runs one scheduling call
/// against it with `config`.
///
/// Mirrors the reference crate's `generate_system_model` entry point: parse
/// the fixture, build the domain types, hand off to the core.
pub fn schedule_from_fixture(file_path: &str, config: &PlacementConfig) -> Result<SchedulingResult> {
    let fixture: ClusterFixtureDto = parse_json_file(file_path)?;

    let mut cluster_state = ClusterState::from_dto(&fixture);
    let topology = TopologyDetails::from_dto(&fixture.topology)?;

    log::info!("fixture '{}' loaded: {} nodes, topology '{}'", file_path, cluster_state.nodes.len(), topology.id);

    scheduler::schedule(&mut cluster_state, &topology, config)
}
