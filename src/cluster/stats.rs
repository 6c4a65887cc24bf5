//! Partition statistics and per-community metrics

use crate::cluster::Community;
use crate::graph::algorithms::{connected_components, degree_distribution, total_weight};
use crate::graph::Graph;
use serde::{Deserialize, Serialize};

/// Metrics for one community
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityStats {
    pub id: usize,
    pub size: usize,

    /// Summed weight of edges with both endpoints inside, self-loops included
    pub internal_weight: f64,

    /// Summed weight of edges leaving the community
    pub boundary_weight: f64,

    /// Internal edges between distinct members / potential undirected edges
    pub density: f64,
}

/// Aggregate view of a finished partition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartitionSummary {
    pub node_count: usize,
    pub edge_count: usize,
    pub total_weight: f64,
    /// Node counts per degree, last bucket holding degree >= 100
    pub degree_distribution: Vec<usize>,
    pub connected_components: usize,
    pub community_count: usize,
    pub singleton_count: usize,
    pub largest_community_size: usize,
    pub smallest_community_size: usize,
    pub avg_community_size: f64,
    pub std_dev_community_size: f64,
    pub avg_density: f64,
}

/// Compute metrics for a single community
pub fn community_stats(graph: &Graph, community: &Community) -> CommunityStats {
    let mut internal_edges = 0usize;
    let mut internal_weight = 0.0;
    let mut boundary_weight = 0.0;

    for &member in community.members() {
        let node = graph.node(member);
        for &(nb, edge) in node.neighbors() {
            let weight = graph.edge(edge).weight;
            if nb == member {
                // self-loops carry weight but are not a pair for density
                internal_weight += weight;
            } else if graph.node(nb).community == node.community {
                // each internal edge is seen from both ends
                if member < nb {
                    internal_edges += 1;
                    internal_weight += weight;
                }
            } else {
                boundary_weight += weight;
            }
        }
    }

    let n = community.len();
    let density = if n <= 1 {
        1.0
    } else {
        internal_edges as f64 / (n * (n - 1) / 2) as f64
    };

    CommunityStats {
        id: community.id,
        size: n,
        internal_weight,
        boundary_weight,
        density,
    }
}

/// Summarise every non-empty community of a partition
pub fn summarize(graph: &Graph, communities: &[Community]) -> (PartitionSummary, Vec<CommunityStats>) {
    let stats: Vec<CommunityStats> = communities
        .iter()
        .filter(|c| !c.is_empty())
        .map(|c| community_stats(graph, c))
        .collect();

    let sizes: Vec<f64> = stats.iter().map(|s| s.size as f64).collect();
    let densities: Vec<f64> = stats.iter().map(|s| s.density).collect();
    let (avg_size, std_dev_size) = moments(&sizes);
    let (avg_density, _) = moments(&densities);

    let summary = PartitionSummary {
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        total_weight: total_weight(graph),
        degree_distribution: degree_distribution(graph, 100),
        connected_components: connected_components(graph),
        community_count: stats.len(),
        singleton_count: stats.iter().filter(|s| s.size == 1).count(),
        largest_community_size: stats.iter().map(|s| s.size).max().unwrap_or(0),
        smallest_community_size: stats.iter().map(|s| s.size).min().unwrap_or(0),
        avg_community_size: avg_size,
        std_dev_community_size: std_dev_size,
        avg_density,
    };

    (summary, stats)
}

/// Mean and population standard deviation; zero for an empty slice
fn moments(values: &[f64]) -> (f64, f64) {
    use statrs::statistics::Statistics;

    if values.is_empty() {
        return (0.0, 0.0);
    }
    (values.iter().mean(), values.iter().population_std_dev())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarizes_two_groups() {
        let mut graph = Graph::new();
        graph.add_edge(1, 2, 1.0);
        graph.add_edge(2, 3, 1.0);
        graph.add_edge(3, 1, 1.0);
        graph.add_edge(3, 4, 2.0);

        let mut first = Community::new(0);
        let mut second = Community::new(1);
        for id in [1, 2, 3] {
            let idx = graph.index_of(id).unwrap();
            graph.node_mut(idx).community = Some(0);
            first.insert(idx);
        }
        let idx = graph.index_of(4).unwrap();
        graph.node_mut(idx).community = Some(1);
        second.insert(idx);

        let (summary, stats) = summarize(&graph, &[first, second, Community::new(2)]);

        assert_eq!(stats.len(), 2);
        assert!((stats[0].internal_weight - 3.0).abs() < 1e-12);
        assert!((stats[0].boundary_weight - 2.0).abs() < 1e-12);
        assert!((stats[0].density - 1.0).abs() < 1e-12);
        assert_eq!(summary.community_count, 2);
        assert_eq!(summary.singleton_count, 1);
        assert_eq!(summary.largest_community_size, 3);
        assert_eq!(summary.smallest_community_size, 1);
        assert!((summary.avg_community_size - 2.0).abs() < 1e-12);
        assert!((summary.std_dev_community_size - 1.0).abs() < 1e-12);
        assert_eq!(summary.connected_components, 1);
        assert_eq!(summary.edge_count, 4);
        assert!((summary.total_weight - 5.0).abs() < 1e-12);
        assert_eq!(&summary.degree_distribution[..4], &[0, 1, 2, 1]);
    }

    #[test]
    fn self_loops_do_not_inflate_density() {
        let mut graph = Graph::new();
        graph.add_edge(1, 2, 1.0);
        graph.add_edge(1, 1, 0.5);
        graph.add_edge(2, 2, 0.5);

        let mut pair = Community::new(0);
        for id in [1, 2] {
            let idx = graph.index_of(id).unwrap();
            graph.node_mut(idx).community = Some(0);
            pair.insert(idx);
        }

        let stats = community_stats(&graph, &pair);
        assert!((stats.density - 1.0).abs() < 1e-12);
        assert!((stats.internal_weight - 2.0).abs() < 1e-12);
        assert_eq!(stats.boundary_weight, 0.0);
    }
}
