//! Graph input loaders

pub mod edgelist;
pub mod parquet;

use crate::graph::Graph;
use anyhow::Result;
use std::path::Path;

/// Load a graph, choosing the format from the file extension
pub fn load_graph(path: impl AsRef<Path>) -> Result<Graph> {
    let path = path.as_ref();
    let is_parquet = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case("parquet"));

    if is_parquet {
        parquet::load_parquet_edges(path, &parquet::EdgeColumns::default())
    } else {
        edgelist::load_edge_list(path)
    }
}
