use crate::domain::ids::ExecutorId;
use serde::{Deserialize, Serialize};

/// The smallest schedulable unit of a topology; carries a CPU and memory
/// demand. Immutable within a call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Executor {
    pub id: ExecutorId,
    pub cpu_req: f64,
    pub mem_req: f64,
}

impl Executor {
    pub fn new(id: ExecutorId, cpu_req: f64, mem_req: f64) -> Self {
        Self { id, cpu_req, mem_req }
    }
}
