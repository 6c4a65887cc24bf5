//! Vertex and edge records of the weighted graph

use crate::cluster::CommunityId;
use std::collections::HashMap;

/// External, user-supplied node identifier
pub type NodeId = i64;

/// Position of a node in the graph's node arena
pub type NodeIndex = usize;

/// Position of an edge record in the graph's edge arena
pub type EdgeIndex = usize;

/// Mutable record of one weighted edge.
///
/// A single instance lives in the edge arena; both endpoints refer to it by
/// `EdgeIndex`, so derived values written through either side are seen by both.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeData {
    pub weight: f64,
    pub support: f64,
    pub strength: f64,
    pub support_calculated: bool,
    pub strength_calculated: bool,
}

impl EdgeData {
    pub fn new(weight: f64) -> Self {
        Self {
            weight,
            support: 0.0,
            strength: 0.0,
            support_calculated: false,
            strength_calculated: false,
        }
    }
}

/// A graph vertex with its adjacency and per-node derived state
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,

    /// Neighbours in edge-insertion order
    neighbors: Vec<(NodeIndex, EdgeIndex)>,

    /// Neighbour -> slot in `neighbors`
    slots: HashMap<NodeIndex, usize>,

    /// Greatest support seen on an incident edge so far
    pub max_support: f64,

    /// Every incident edge has its support computed
    pub support_calculated: bool,

    /// Every incident edge has its strength computed
    pub strength_calculated: bool,

    /// Community the node currently belongs to
    pub community: Option<CommunityId>,
}

impl Node {
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            neighbors: Vec::new(),
            slots: HashMap::new(),
            max_support: 0.0,
            support_calculated: false,
            strength_calculated: false,
            community: None,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Register an edge to `neighbor`. A second edge to the same neighbour
    /// replaces the first in place, keeping its iteration position.
    pub fn add_neighbor(&mut self, neighbor: NodeIndex, edge: EdgeIndex) {
        match self.slots.get(&neighbor) {
            Some(&slot) => self.neighbors[slot].1 = edge,
            None => {
                self.slots.insert(neighbor, self.neighbors.len());
                self.neighbors.push((neighbor, edge));
            }
        }
    }

    /// Neighbours paired with the shared edge record, in insertion order
    pub fn neighbors(&self) -> &[(NodeIndex, EdgeIndex)] {
        &self.neighbors
    }

    /// Edge shared with `neighbor`, if adjacent
    pub fn edge_to(&self, neighbor: NodeIndex) -> Option<EdgeIndex> {
        self.slots.get(&neighbor).map(|&slot| self.neighbors[slot].1)
    }

    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}
