//! Weighted undirected graph backed by node and edge arenas

use crate::error::SiwoError;
use crate::graph::node::{EdgeData, EdgeIndex, Node, NodeId, NodeIndex};
use std::collections::HashMap;

/// Weighted undirected graph.
///
/// Nodes are deduplicated by their external id and kept in first-seen order.
/// Each edge is stored once in `edges` and referenced by index from both endpoints.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<EdgeData>,
    id_to_index: HashMap<NodeId, NodeIndex>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with pre-allocated capacity
    pub fn with_capacity(node_count: usize, edge_count: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(node_count),
            edges: Vec::with_capacity(edge_count),
            id_to_index: HashMap::with_capacity(node_count),
        }
    }

    /// Get or create the node with the given id
    pub fn add_node(&mut self, id: NodeId) -> NodeIndex {
        if let Some(&idx) = self.id_to_index.get(&id) {
            return idx;
        }

        let idx = self.nodes.len();
        self.nodes.push(Node::new(id));
        self.id_to_index.insert(id, idx);
        idx
    }

    /// Add an undirected edge, creating missing endpoints.
    ///
    /// Duplicate pairs are not merged: the newer record replaces the older one
    /// in both adjacency maps. Self-loops are stored like any other edge.
    pub fn add_edge(&mut self, id1: NodeId, id2: NodeId, weight: f64) -> EdgeIndex {
        let n1 = self.add_node(id1);
        let n2 = self.add_node(id2);

        let edge = self.edges.len();
        self.edges.push(EdgeData::new(weight));
        self.nodes[n1].add_neighbor(n2, edge);
        self.nodes[n2].add_neighbor(n1, edge);
        edge
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges reachable from the adjacency maps
    pub fn edge_count(&self) -> usize {
        self.nodes
            .iter()
            .enumerate()
            .flat_map(|(idx, node)| node.neighbors().iter().map(move |&(nb, _)| (idx, nb)))
            .filter(|&(idx, nb)| idx <= nb)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in first-seen order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, idx: NodeIndex) -> &Node {
        &self.nodes[idx]
    }

    pub fn node_mut(&mut self, idx: NodeIndex) -> &mut Node {
        &mut self.nodes[idx]
    }

    pub fn edge(&self, idx: EdgeIndex) -> &EdgeData {
        &self.edges[idx]
    }

    pub fn edge_mut(&mut self, idx: EdgeIndex) -> &mut EdgeData {
        &mut self.edges[idx]
    }

    /// Arena index of an external node id
    pub fn index_of(&self, id: NodeId) -> Option<NodeIndex> {
        self.id_to_index.get(&id).copied()
    }

    /// Arena index of an external node id, as an error when absent
    pub fn require(&self, id: NodeId) -> Result<NodeIndex, SiwoError> {
        self.index_of(id).ok_or(SiwoError::UnknownNode(id))
    }

    /// Edge shared by two nodes, looked up by external id
    pub fn edge_between(&self, id1: NodeId, id2: NodeId) -> Option<&EdgeData> {
        let n1 = self.index_of(id1)?;
        let n2 = self.index_of(id2)?;
        self.nodes[n1].edge_to(n2).map(|edge| &self.edges[edge])
    }

    /// Iterate every live edge once as `(id1, id2, weight)`
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, f64)> + '_ {
        self.nodes.iter().enumerate().flat_map(move |(idx, node)| {
            node.neighbors()
                .iter()
                .filter(move |&&(nb, _)| idx <= nb)
                .map(move |&(nb, edge)| (node.id(), self.nodes[nb].id(), self.edges[edge].weight))
        })
    }
}
