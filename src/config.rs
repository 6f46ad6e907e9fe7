/// Weights for the Node Ranker's composite distance (spec.md §4.4, §6).
///
/// This is a plain value struct, not a config *loader* — reading it from a
/// file or CLI flags is out of scope for the library (spec.md §1); the
/// binary entry point is free to populate one from `clap` arguments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementConfig {
    pub cpu_weight: f64,
    pub mem_weight: f64,
    pub network_weight: f64,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self { cpu_weight: 1.0, mem_weight: 1.0, network_weight: 1.0 }
    }
}
