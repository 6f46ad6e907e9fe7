use crate::domain::ids::RackId;
use serde::{Deserialize, Serialize};

/// A named group of nodes considered network-local to each other.
///
/// Owned by the cluster view; immutable for the duration of a scheduling
/// call (only `Node.avail_cpu`/`avail_mem` change, never rack membership).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rack {
    pub id: RackId,
    pub hostnames: Vec<String>,
}

impl Rack {
    pub fn new(id: RackId, hostnames: Vec<String>) -> Self {
        Self { id, hostnames }
    }
}
