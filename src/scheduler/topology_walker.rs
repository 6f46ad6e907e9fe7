use crate::domain::component::Component;
use crate::domain::ids::ComponentId;
use crate::domain::topology::TopologyDetails;
use std::collections::{HashSet, VecDeque};

/// Breadth-first, undirected partial ordering of components, seeded from
/// every source component (spec.md §4.2).
///
/// Traversal deliberately ignores edge direction — neighbors are the union
/// of `parents` and `children` — so cyclic or loosely connected component
/// graphs are still fully enumerated (spec.md §9). Components at equal BFS
/// distance come out in the source-component iteration order observed from
/// the topology input, which [`TopologyDetails`] preserves explicitly.
///
/// Returns `None` when the topology has no source component
/// (`FAIL_INVALID_TOPOLOGY`, spec.md §4.2).
pub fn walk(topology: &TopologyDetails) -> Option<Vec<ComponentId>> {
    let sources = topology.source_components();
    if sources.is_empty() {
        log::error!("topology_walker: no source component found, topology {} is invalid", topology.id);
        return None;
    }

    let mut visited: HashSet<ComponentId> = HashSet::new();
    let mut queue: VecDeque<ComponentId> = VecDeque::new();
    let mut output: Vec<ComponentId> = Vec::new();

    for source in &sources {
        if visited.insert(source.id.clone()) {
            queue.push_back(source.id.clone());
        }
    }

    while let Some(current_id) = queue.pop_front() {
        output.push(current_id.clone());

        let Some(current) = topology.component(&current_id) else {
            log::error!("topology_walker: component {} referenced but not found in topology", current_id);
            continue;
        };

        for neighbor_id in neighbors(current) {
            if visited.insert(neighbor_id.clone()) {
                queue.push_back(neighbor_id);
            }
        }
    }

    Some(output)
}

fn neighbors(component: &Component) -> impl Iterator<Item = ComponentId> + '_ {
    component.parents.iter().cloned().chain(component.children.iter().cloned())
}
