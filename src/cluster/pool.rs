//! Pool of nodes not yet assigned to any community

use crate::graph::NodeIndex;
use rand::Rng;

/// Set of node indices with O(1) removal and uniform sampling
#[derive(Debug, Clone)]
pub struct NodePool {
    members: Vec<NodeIndex>,
    /// Node -> position in `members`
    positions: Vec<Option<usize>>,
}

impl NodePool {
    /// Pool holding every index in `0..node_count`
    pub fn full(node_count: usize) -> Self {
        Self {
            members: (0..node_count).collect(),
            positions: (0..node_count).map(Some).collect(),
        }
    }

    pub fn contains(&self, node: NodeIndex) -> bool {
        self.positions.get(node).map_or(false, Option::is_some)
    }

    pub fn remove(&mut self, node: NodeIndex) -> bool {
        let Some(pos) = self.positions.get_mut(node).and_then(Option::take) else {
            return false;
        };
        self.members.swap_remove(pos);
        if let Some(&moved) = self.members.get(pos) {
            self.positions[moved] = Some(pos);
        }
        true
    }

    /// Pick a member uniformly at random without removing it
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<NodeIndex> {
        if self.members.is_empty() {
            return None;
        }
        Some(self.members[rng.gen_range(0..self.members.len())])
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
