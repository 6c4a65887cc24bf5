//! Community detection module

pub mod detection;
pub mod merge;
pub mod metrics;
pub mod pool;
pub mod shell;
pub mod stats;

pub use detection::SiwoPlus;
pub use shell::Shell;

use crate::graph::{Graph, NodeId, NodeIndex};
use serde::{Deserialize, Serialize};

/// Community identifier; equal to the community's position in the output list
pub type CommunityId = usize;

/// A set of nodes sharing one community id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Community {
    /// Unique identifier for this community
    pub id: CommunityId,

    /// Members in the order they joined (node arena indices)
    members: Vec<NodeIndex>,
}

impl Community {
    pub fn new(id: CommunityId) -> Self {
        Self {
            id,
            members: Vec::new(),
        }
    }

    pub fn members(&self) -> &[NodeIndex] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, node: NodeIndex) -> bool {
        self.members.contains(&node)
    }

    /// Add a node; callers guarantee it is not already a member
    pub fn insert(&mut self, node: NodeIndex) {
        self.members.push(node);
    }

    pub fn remove(&mut self, node: NodeIndex) -> bool {
        match self.members.iter().position(|&m| m == node) {
            Some(pos) => {
                self.members.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Empty the community, returning its former members
    pub fn take_members(&mut self) -> Vec<NodeIndex> {
        std::mem::take(&mut self.members)
    }

    /// External ids of the members, in ascending order
    pub fn member_ids(&self, graph: &Graph) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.members.iter().map(|&m| graph.node(m).id()).collect();
        ids.sort_unstable();
        ids
    }
}
