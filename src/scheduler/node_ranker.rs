use crate::config::PlacementConfig;
use crate::domain::ids::NodeId;
use crate::domain::node::Node;
use crate::scheduler::cluster_view::ClusterView;

/// Topological distance between two nodes: 0.0 same node, 0.5 same rack,
/// 1.0 otherwise. A node whose rack can't be identified is treated as
/// distance 1.0 from everything (spec.md §4.4), and the anomaly is logged.
fn topo_dist(view: &ClusterView, u: &Node, v: &Node) -> f64 {
    if u.id == v.id {
        return 0.0;
    }
    match (view.rack_of(u), view.rack_of(v)) {
        (Some(ru), Some(rv)) if ru == rv => 0.5,
        (Some(_), Some(_)) => 1.0,
        _ => {
            log::warn!("topo_dist: rack unresolvable for {} or {}, treating as distance 1.0", u.id, v.id);
            1.0
        }
    }
}

/// Composite distance from a task's demand vector to a candidate node
/// (spec.md §4.4). `ref_node = None` contributes `c = 0.0` — used during
/// the first-placement rack-anchored phase.
fn distance(view: &ClusterView, node: &Node, task_cpu: f64, task_mem: f64, ref_node: Option<&Node>, config: &PlacementConfig) -> f64 {
    let a = ((task_cpu - node.avail_cpu) / (node.avail_cpu + 1.0)) * config.cpu_weight;
    let b = ((task_mem - node.avail_mem) / (node.avail_mem + 1.0)) * config.mem_weight;
    let c = match ref_node {
        Some(reference) => topo_dist(view, reference, node) * config.network_weight,
        None => 0.0,
    };
    (a * a + b * b + c * c).sqrt()
}

/// Ranks `candidate_ids` by ascending composite distance, after filtering
/// to nodes with at least one free slot and enough available resources
/// (spec.md §4.4's eligibility filter). Ties are broken by node id.
///
/// Takes ids rather than borrowed `Node`s so candidate selection doesn't
/// hold a borrow of the cluster view across the later resource-consuming
/// step of a placement.
pub fn rank_nodes(
    view: &ClusterView,
    candidate_ids: &[NodeId],
    task_cpu: f64,
    task_mem: f64,
    ref_node: Option<&Node>,
    config: &PlacementConfig,
) -> Vec<NodeId> {
    let mut eligible: Vec<(f64, &Node)> = candidate_ids
        .iter()
        .filter_map(|id| view.node_by_id(id))
        .filter(|n| n.can_host(task_cpu, task_mem))
        .map(|n| (distance(view, n, task_cpu, task_mem, ref_node, config), n))
        .collect();

    eligible.sort_by(|(d1, n1), (d2, n2)| d1.partial_cmp(d2).unwrap_or(std::cmp::Ordering::Equal).then_with(|| n1.id.cmp(&n2.id)));

    eligible.into_iter().map(|(_, n)| n.id.clone()).collect()
}
