//! Parquet edge-table input

use crate::error::SiwoError;
use crate::graph::Graph;
use anyhow::{anyhow, Result};
use polars::prelude::*;
use std::path::Path;

/// Column names of a Parquet edge table
#[derive(Debug, Clone)]
pub struct EdgeColumns {
    pub source: String,
    pub target: String,
    /// Optional; edges default to weight 1.0 when the column is absent
    pub weight: String,
}

impl Default for EdgeColumns {
    fn default() -> Self {
        Self {
            source: "source".to_string(),
            target: "target".to_string(),
            weight: "weight".to_string(),
        }
    }
}

/// Load an edge table stored as Parquet into a new graph
pub fn load_parquet_edges(path: impl AsRef<Path>, columns: &EdgeColumns) -> Result<Graph> {
    let path = path.as_ref();
    log::info!("Reading parquet file: {}", path.display());

    if !path.exists() {
        return Err(anyhow!("File not found: {}", path.display()));
    }

    let df = LazyFrame::scan_parquet(path, Default::default())?.collect()?;
    log::info!("File schema: {:?}", df.schema());

    let graph = graph_from_frame(&df, columns)?;
    log::info!(
        "Loaded graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Build a graph from an in-memory edge table
pub fn graph_from_frame(df: &DataFrame, columns: &EdgeColumns) -> Result<Graph> {
    let source = required_column(df, &columns.source)?.cast(&DataType::Int64)?;
    let target = required_column(df, &columns.target)?.cast(&DataType::Int64)?;
    let weight = match df.column(&columns.weight) {
        Ok(col) => Some(col.cast(&DataType::Float64)?),
        Err(_) => {
            log::info!("No '{}' column, using unit weights", columns.weight);
            None
        }
    };

    let sources = source.i64()?;
    let targets = target.i64()?;
    let weights = match &weight {
        Some(col) => Some(col.f64()?),
        None => None,
    };

    let mut graph = Graph::with_capacity(df.height(), df.height());
    for row in 0..df.height() {
        let (Some(id1), Some(id2)) = (sources.get(row), targets.get(row)) else {
            return Err(SiwoError::Parse {
                line: row + 1,
                message: "null node id".to_string(),
            }
            .into());
        };
        let w = match weights {
            Some(ws) => ws.get(row).ok_or_else(|| SiwoError::Parse {
                line: row + 1,
                message: "null weight".to_string(),
            })?,
            None => 1.0,
        };
        graph.add_edge(id1, id2, w);
    }

    Ok(graph)
}

fn required_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column, SiwoError> {
    df.column(name)
        .map_err(|_| SiwoError::MissingColumn(name.to_string()))
}
