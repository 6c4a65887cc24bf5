//! SIWO+ community detection.
//!
//! Communities are grown one at a time from a randomly chosen unclustered
//! start node. The frontier (shell) tracks, for each adjacent unclustered node,
//! the summed strength of its edges into the growing community; the best
//! candidate joins while that sum is positive. Once every node is clustered,
//! the optional correction passes in [`crate::cluster::merge`] tidy up
//! communities too small to contain a triangle.

use crate::cluster::merge;
use crate::cluster::metrics;
use crate::cluster::pool::NodePool;
use crate::cluster::shell::Shell;
use crate::cluster::{Community, CommunityId};
use crate::config::SiwoConfig;
use crate::error::SiwoError;
use crate::graph::{Graph, NodeId, NodeIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

/// SIWO+ detection engine; owns the graph for the duration of the run
pub struct SiwoPlus {
    graph: Graph,
    config: SiwoConfig,
    unclustered: NodePool,
    clustered: Vec<bool>,
    current: Community,
    current_id: CommunityId,
    shell: Shell,
    communities: Vec<Community>,
}

impl SiwoPlus {
    pub fn new(graph: Graph, config: SiwoConfig) -> Self {
        let node_count = graph.node_count();
        Self {
            graph,
            config,
            unclustered: NodePool::full(node_count),
            clustered: vec![false; node_count],
            current: Community::new(0),
            current_id: 0,
            shell: Shell::new(),
            communities: Vec::new(),
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }

    pub fn config(&self) -> &SiwoConfig {
        &self.config
    }

    /// Communities indexed by id, including placeholders emptied by merging
    pub fn communities(&self) -> &[Community] {
        &self.communities
    }

    pub fn non_empty_communities(&self) -> impl Iterator<Item = &Community> + '_ {
        self.communities.iter().filter(|c| !c.is_empty())
    }

    pub fn unclustered_count(&self) -> usize {
        self.unclustered.len()
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    /// Node id -> community id for every assigned node
    pub fn membership(&self) -> HashMap<NodeId, CommunityId> {
        self.graph
            .nodes()
            .iter()
            .filter_map(|node| node.community.map(|c| (node.id(), c)))
            .collect()
    }

    pub fn community_of(&self, id: NodeId) -> Option<CommunityId> {
        let idx = self.graph.index_of(id)?;
        self.graph.node(idx).community
    }

    /// Compute and store the support of the edge between two nodes
    pub fn calculate_support(&mut self, id1: NodeId, id2: NodeId) -> Result<f64, SiwoError> {
        let u = self.graph.require(id1)?;
        let v = self.graph.require(id2)?;
        metrics::calculate_support(&mut self.graph, self.config.mean, u, v)
    }

    pub fn calculate_local_support(&mut self, id: NodeId) -> Result<(), SiwoError> {
        let node = self.graph.require(id)?;
        metrics::calculate_local_support(&mut self.graph, self.config.mean, node);
        Ok(())
    }

    pub fn calculate_local_strength(&mut self, id: NodeId) -> Result<(), SiwoError> {
        let node = self.graph.require(id)?;
        metrics::calculate_local_strength(&mut self.graph, self.config.mean, node);
        Ok(())
    }

    /// Stored support of an edge, if it has been computed
    pub fn edge_support(&self, id1: NodeId, id2: NodeId) -> Option<f64> {
        self.graph
            .edge_between(id1, id2)
            .filter(|e| e.support_calculated)
            .map(|e| e.support)
    }

    /// Stored strength of an edge, if it has been computed
    pub fn edge_strength(&self, id1: NodeId, id2: NodeId) -> Option<f64> {
        self.graph
            .edge_between(id1, id2)
            .filter(|e| e.strength_calculated)
            .map(|e| e.strength)
    }

    pub fn max_support(&self, id: NodeId) -> Option<f64> {
        self.graph.index_of(id).map(|idx| self.graph.node(idx).max_support)
    }

    /// Best shell entry as `(node id, contribution)`
    pub fn find_best_candidate(&self) -> Option<(NodeId, f64)> {
        self.shell
            .best_candidate()
            .map(|(node, contribution)| (self.graph.node(node).id(), contribution))
    }

    fn add_node_to_community(&mut self, node: NodeIndex) {
        self.current.insert(node);
        self.clustered[node] = true;
        self.unclustered.remove(node);
        self.shell.remove(node);
        self.graph.node_mut(node).community = Some(self.current_id);
    }

    fn update_shell(&mut self, node: NodeIndex) {
        for &(nb, edge) in self.graph.node(node).neighbors() {
            if self.clustered[nb] {
                continue;
            }
            self.shell.add(nb, self.graph.edge(edge).strength);
        }
    }

    fn absorb(&mut self, node: NodeIndex) {
        self.add_node_to_community(node);
        metrics::calculate_local_strength(&mut self.graph, self.config.mean, node);
        self.update_shell(node);
    }

    /// Grow one community from a random unclustered start node.
    ///
    /// Returns the id of the finished community, or `None` when every node is
    /// already clustered.
    pub fn detect_community<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<CommunityId> {
        let start = self.unclustered.sample(rng)?;
        Some(self.grow_from(start))
    }

    /// Grow and close one community seeded at `start`
    fn grow_from(&mut self, start: NodeIndex) -> CommunityId {
        self.absorb(start);

        while let Some((best, contribution)) = self.shell.best_candidate() {
            if contribution <= 0.0 {
                break;
            }
            self.absorb(best);
        }

        let id = self.current_id;
        let finished = std::mem::replace(&mut self.current, Community::new(id + 1));
        log::debug!(
            "Closed community {} with {} members (start node {})",
            id,
            finished.len(),
            self.graph.node(start).id()
        );
        self.communities.push(finished);
        self.shell.clear();
        self.current_id += 1;

        id
    }

    /// Partition the whole graph using a generator seeded from the config
    pub fn detect_all_communities(&mut self) {
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        self.detect_all_communities_with(&mut rng);
    }

    /// Partition the whole graph drawing start nodes from `rng`
    pub fn detect_all_communities_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        log::info!(
            "Detecting communities over {} nodes ({} mean)",
            self.unclustered.len(),
            self.config.mean
        );

        while self.detect_community(rng).is_some() {}

        log::info!("Detected {} communities", self.communities.len());
    }

    /// Community with the heaviest total edge weight into `community`
    pub fn find_closest_community(&self, community: CommunityId) -> Option<CommunityId> {
        self.communities
            .get(community)
            .and_then(|c| merge::find_closest_community(&self.graph, c))
    }

    /// Merge communities below `min_community_size` into their closest neighbour.
    /// Returns the number of communities merged away.
    pub fn merge_small_communities(&mut self) -> usize {
        let merged = merge::merge_small_communities(
            &mut self.graph,
            &mut self.communities,
            self.config.min_community_size,
        );
        log::info!("Merged {} small communities", merged);
        merged
    }

    /// Move every degree-1 node into its neighbour's community.
    /// Returns the number of nodes moved.
    pub fn merge_dangling_nodes(&mut self) -> usize {
        let moved = merge::merge_dangling_nodes(&mut self.graph, &mut self.communities);
        log::info!("Moved {} dangling nodes", moved);
        moved
    }

    /// Detect all communities, then apply the configured correction passes
    pub fn run(&mut self) -> &[Community] {
        self.detect_all_communities();

        let post = self.config.post_processing;
        if post.merge_small {
            self.merge_small_communities();
        }
        if post.merge_dangling {
            self.merge_dangling_nodes();
        }

        &self.communities
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PostProcessing;

    fn triangle() -> Graph {
        let mut graph = Graph::new();
        graph.add_edge(1, 2, 1.0);
        graph.add_edge(2, 3, 1.0);
        graph.add_edge(3, 1, 1.0);
        graph
    }

    #[test]
    fn grows_single_triangle() {
        let mut siwo = SiwoPlus::new(triangle(), SiwoConfig::default());
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(siwo.detect_community(&mut rng), Some(0));
        assert_eq!(siwo.detect_community(&mut rng), None);
        assert_eq!(siwo.communities().len(), 1);
        assert_eq!(siwo.communities()[0].member_ids(siwo.graph()), vec![1, 2, 3]);
        assert!(siwo.shell().is_empty());
        assert_eq!(siwo.unclustered_count(), 0);
    }

    #[test]
    fn shell_never_holds_clustered_nodes() {
        let mut graph = triangle();
        graph.add_edge(3, 4, 1.0);
        let mut siwo = SiwoPlus::new(graph, SiwoConfig::default());

        let start = siwo.graph().index_of(1).unwrap();
        siwo.absorb(start);
        assert!(!siwo.shell().contains(start));
        assert_eq!(siwo.shell().len(), 2);

        let (best, contribution) = siwo.shell().best_candidate().unwrap();
        assert!(contribution > 0.0);
        siwo.absorb(best);
        assert!(!siwo.shell().contains(best));
        for (node, _) in siwo.shell().iter() {
            assert!(!siwo.clustered[node]);
        }
    }

    #[test]
    fn pendant_node_is_not_absorbed() {
        let mut graph = triangle();
        graph.add_edge(3, 4, 1.0);
        let config = SiwoConfig::default().with_post_processing(PostProcessing {
            merge_small: false,
            merge_dangling: false,
        });
        let mut siwo = SiwoPlus::new(graph, config);
        siwo.run();

        assert_ne!(siwo.community_of(4), siwo.community_of(3));
        assert_eq!(siwo.community_of(1), siwo.community_of(2));
        assert_eq!(siwo.community_of(2), siwo.community_of(3));
        assert_eq!(siwo.edge_strength(3, 4), Some(-1.0));
    }

    /// Triangle with strengths fixed up front: node 3 is pulled +1 through
    /// node 1 and -1 through node 2
    fn balanced_pull() -> Graph {
        let mut graph = Graph::new();
        graph.add_edge(1, 2, 1.0);
        graph.add_edge(1, 3, 1.0);
        graph.add_edge(2, 3, 1.0);
        for (a, b, strength) in [(1, 2, 1.0), (1, 3, 1.0), (2, 3, -1.0)] {
            let (u, v) = (graph.index_of(a).unwrap(), graph.index_of(b).unwrap());
            let edge = graph.node(u).edge_to(v).unwrap();
            let record = graph.edge_mut(edge);
            record.strength = strength;
            record.strength_calculated = true;
            record.support_calculated = true;
        }
        for idx in 0..graph.node_count() {
            let node = graph.node_mut(idx);
            node.support_calculated = true;
            node.strength_calculated = true;
        }
        graph
    }

    #[test]
    fn zero_contribution_stops_growth() {
        let mut siwo = SiwoPlus::new(balanced_pull(), SiwoConfig::default());
        let (first, second, third) = (0, 1, 2);

        siwo.absorb(first);
        assert_eq!(siwo.shell().best_candidate(), Some((second, 1.0)));
        siwo.absorb(second);
        assert_eq!(siwo.shell().contribution(third), Some(0.0));

        let mut siwo = SiwoPlus::new(balanced_pull(), SiwoConfig::default());
        let id = siwo.grow_from(first);

        assert_eq!(siwo.communities()[id].member_ids(siwo.graph()), vec![1, 2]);
        assert_eq!(siwo.community_of(3), None);
        assert_eq!(siwo.unclustered_count(), 1);
    }

    #[test]
    fn metric_accessors_use_external_ids() {
        let mut siwo = SiwoPlus::new(triangle(), SiwoConfig::default());
        assert_eq!(siwo.edge_support(1, 2), None);
        assert_eq!(siwo.calculate_support(1, 2), Ok(1.0));
        assert_eq!(siwo.edge_support(2, 1), Some(1.0));
        assert_eq!(siwo.max_support(1), Some(1.0));
        assert_eq!(siwo.calculate_local_strength(42), Err(SiwoError::UnknownNode(42)));
        assert_eq!(siwo.find_best_candidate(), None);
    }

    #[test]
    fn empty_graph_yields_no_communities() {
        let mut siwo = SiwoPlus::new(Graph::new(), SiwoConfig::default());
        assert!(siwo.run().is_empty());
        assert!(siwo.membership().is_empty());
    }
}
