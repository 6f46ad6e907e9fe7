use crate::domain::executor::Executor;
use crate::domain::node::WorkerSlot;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureStatus {
    FailNotEnoughResources,
    FailInvalidTopology,
}

impl std::fmt::Display for FailureStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureStatus::FailNotEnoughResources => write!(f, "FAIL_NOT_ENOUGH_RESOURCES"),
            FailureStatus::FailInvalidTopology => write!(f, "FAIL_INVALID_TOPOLOGY"),
        }
    }
}

/// The tagged union a scheduling call emits (spec.md §6).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SchedulingResult {
    Success { assignment: BTreeMap<WorkerSlot, Vec<Executor>>, message: String },
    Failure { status: FailureStatus, message: String },
}

impl SchedulingResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SchedulingResult::Success { .. })
    }
}
