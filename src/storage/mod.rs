//! Results persistence module

use crate::cluster::stats::{CommunityStats, PartitionSummary};
use crate::cluster::Community;
use crate::config::SiwoConfig;
use crate::graph::Graph;
use anyhow::{Context, Result};
use itertools::Itertools;
use serde_json::{json, to_string_pretty};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write one line of space-separated node ids per non-empty community
pub fn write_communities(
    path: impl AsRef<Path>,
    graph: &Graph,
    communities: &[Community],
) -> Result<()> {
    let path = path.as_ref();
    log::info!("Saving communities to {}", path.display());

    ensure_parent(path)?;
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);
    let written = format_communities(&mut out, graph, communities)?;
    out.flush()?;

    log::info!("Saved {} communities", written);
    Ok(())
}

/// Serialise communities to any writer; returns how many lines were written
pub fn format_communities<W: Write>(
    out: &mut W,
    graph: &Graph,
    communities: &[Community],
) -> Result<usize> {
    let mut written = 0;
    for community in communities.iter().filter(|c| !c.is_empty()) {
        writeln!(out, "{}", community.member_ids(graph).iter().join(" "))?;
        written += 1;
    }
    Ok(written)
}

/// Save a JSON run summary: configuration, timing, partition and per-community metrics
pub fn save_summary(
    path: impl AsRef<Path>,
    config: &SiwoConfig,
    summary: &PartitionSummary,
    stats: &[CommunityStats],
    elapsed_ms: f64,
) -> Result<()> {
    let path = path.as_ref();
    log::info!("Saving run summary to {}", path.display());

    ensure_parent(path)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;

    let largest: Vec<&CommunityStats> = stats
        .iter()
        .sorted_by(|a, b| b.size.cmp(&a.size).then(a.id.cmp(&b.id)))
        .collect();

    let report = json!({
        "config": config,
        "elapsed_ms": elapsed_ms,
        "partition": summary,
        "communities": largest,
    });

    file.write_all(to_string_pretty(&report)?.as_bytes())?;
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    Ok(())
}
