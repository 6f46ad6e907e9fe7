use crate::domain::ids::{ComponentId, ExecutorId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComponentType {
    Source,
    Processor,
}

/// A named operator in the topology DAG.
///
/// Read-only for the duration of a scheduling call: the walker and
/// interleaver only ever borrow `Component`s, never mutate them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Component {
    pub id: ComponentId,
    pub component_type: ComponentType,
    pub execs: Vec<ExecutorId>,
    pub parents: Vec<ComponentId>,
    pub children: Vec<ComponentId>,
}

impl Component {
    pub fn is_source(&self) -> bool {
        self.component_type == ComponentType::Source
    }
}
