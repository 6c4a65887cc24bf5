//! Error types shared by the detection core and the loaders

use crate::graph::NodeId;
use thiserror::Error;

/// Errors raised by graph construction, metric computation and input parsing
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SiwoError {
    /// The aggregator selector was neither arithmetic nor geometric
    #[error("unknown mean selector '{0}', expected 'a' (arithmetic) or 'g' (geometric)")]
    InvalidMean(String),

    /// An explicit support computation was requested for a pair with no edge
    #[error("no edge between nodes {0} and {1}")]
    MissingEdge(NodeId, NodeId),

    /// A node id was looked up that the graph does not contain
    #[error("unknown node {0}")]
    UnknownNode(NodeId),

    /// An edge-list line could not be parsed
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A Parquet edge table lacks a required column
    #[error("missing column '{0}' in edge table")]
    MissingColumn(String),
}
