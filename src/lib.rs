//! SIWO+ local community detection for weighted undirected graphs

pub mod cluster;
pub mod config;
pub mod data;
pub mod error;
pub mod graph;
pub mod storage;

pub use anyhow::{anyhow, Result};
pub use cluster::{Community, CommunityId, SiwoPlus};
pub use config::{Mean, PostProcessing, SiwoConfig};
pub use error::SiwoError;
pub use graph::{Graph, NodeId};
