use thiserror::Error;

/// Programmer-error and fixture-loading failures.
///
/// Expected scheduling outcomes (no source component, insufficient
/// resources) are not represented here — they are ordinary values of
/// [`crate::scheduler::result::SchedulingResult`], not failures of the call
/// itself.
#[derive(Debug, Error)]
pub enum PlacementError {
    #[error("executor {0} referenced by topology but is not a member of unassignedExecutors")]
    UnknownExecutor(String),

    #[error("executor {0} has a negative resource demand (cpu={1}, mem={2})")]
    NegativeDemand(String, f64, f64),

    #[error("failed to read cluster fixture: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse cluster fixture JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlacementError>;
