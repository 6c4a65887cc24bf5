//! Graph-level algorithms used for reporting

use crate::graph::{Graph, NodeIndex};
use petgraph::unionfind::UnionFind;

/// Count connected components (isolated nodes count as their own component)
pub fn connected_components(graph: &Graph) -> usize {
    let node_count = graph.node_count();
    let mut sets = UnionFind::<NodeIndex>::new(node_count);

    for (idx, node) in graph.nodes().iter().enumerate() {
        for &(nb, _) in node.neighbors() {
            sets.union(idx, nb);
        }
    }

    let mut labels = sets.into_labeling();
    labels.sort_unstable();
    labels.dedup();
    labels.len()
}

/// Degree histogram with the last bucket collecting every degree >= `max_bucket`
pub fn degree_distribution(graph: &Graph, max_bucket: usize) -> Vec<usize> {
    let mut buckets = vec![0; max_bucket + 1];
    for node in graph.nodes() {
        buckets[node.degree().min(max_bucket)] += 1;
    }
    buckets
}

/// Total edge weight of the graph
pub fn total_weight(graph: &Graph) -> f64 {
    graph.edges().map(|(_, _, w)| w).sum()
}
