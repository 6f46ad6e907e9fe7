use crate::domain::ids::RackId;
use crate::scheduler::cluster_view::ClusterView;

/// Picks the rack whose nodes' `availCpu + availMem` sum is greatest
/// (spec.md §4.7). CPU and memory are summed as unit-free scalars —
/// deliberately dimensionally inconsistent, it's a cheap "fattest rack"
/// heuristic, not a real measure. Ties go to the first rack encountered in
/// `view.racks()`'s (id-sorted) iteration order.
pub fn pick_rack(view: &ClusterView) -> Option<RackId> {
    let mut best: Option<(RackId, f64)> = None;

    for rack in view.racks() {
        let total: f64 = rack
            .hostnames
            .iter()
            .filter_map(|hostname| view.node_by_hostname(hostname))
            .map(|node| node.avail_cpu + node.avail_mem)
            .sum();

        match &best {
            Some((_, best_total)) if total <= *best_total => {}
            _ => best = Some((rack.id.clone(), total)),
        }
    }

    best.map(|(id, _)| id)
}
