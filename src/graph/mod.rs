//! Graph representation and algorithms module

pub mod algorithms;
pub mod node;
pub mod weighted;

pub use node::{EdgeData, EdgeIndex, Node, NodeId, NodeIndex};
pub use weighted::Graph;
