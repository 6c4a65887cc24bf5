//! Whitespace-separated edge-list text input

use crate::error::SiwoError;
use crate::graph::{Graph, NodeId};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Load `id1 id2 [weight]` lines from a file into a new graph
pub fn load_edge_list(path: impl AsRef<Path>) -> Result<Graph> {
    let path = path.as_ref();
    log::info!("Reading edge list: {}", path.display());

    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let graph = read_edge_list(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;

    log::info!(
        "Loaded graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Parse an edge list from any buffered reader.
///
/// Blank lines and lines starting with `#` or `%` are skipped. A missing
/// weight column means weight 1.0; columns past the third are ignored.
pub fn read_edge_list<R: BufRead>(reader: R) -> Result<Graph> {
    let mut graph = Graph::new();

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some((id1, id2, weight)) = parse_line(&line, lineno + 1)? {
            graph.add_edge(id1, id2, weight);
        }
    }

    Ok(graph)
}

fn parse_line(line: &str, lineno: usize) -> Result<Option<(NodeId, NodeId, f64)>, SiwoError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('%') {
        return Ok(None);
    }

    let mut fields = trimmed.split_whitespace();
    let id1 = parse_field::<NodeId>(fields.next(), "source id", lineno)?;
    let id2 = parse_field::<NodeId>(fields.next(), "target id", lineno)?;
    let weight = match fields.next() {
        Some(raw) => parse_field::<f64>(Some(raw), "weight", lineno)?,
        None => 1.0,
    };

    if !weight.is_finite() {
        return Err(SiwoError::Parse {
            line: lineno,
            message: format!("weight {} is not finite", weight),
        });
    }

    Ok(Some((id1, id2, weight)))
}

fn parse_field<T: std::str::FromStr>(
    raw: Option<&str>,
    what: &str,
    lineno: usize,
) -> Result<T, SiwoError> {
    let raw = raw.ok_or_else(|| SiwoError::Parse {
        line: lineno,
        message: format!("missing {}", what),
    })?;
    raw.parse().map_err(|_| SiwoError::Parse {
        line: lineno,
        message: format!("invalid {} '{}'", what, raw),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_weighted_and_unweighted_lines() {
        let input = "# comment\n1 2 0.5\n\n2\t3\n% another\n3 1 2 extra\n";
        let graph = read_edge_list(Cursor::new(input)).unwrap();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.edge_between(1, 2).unwrap().weight, 0.5);
        assert_eq!(graph.edge_between(2, 3).unwrap().weight, 1.0);
        assert_eq!(graph.edge_between(1, 3).unwrap().weight, 2.0);
    }

    #[test]
    fn reports_bad_line_number() {
        let err = read_edge_list(Cursor::new("1 2 1.0\n3 x 1.0\n")).unwrap_err();
        let parse = err.downcast_ref::<SiwoError>().unwrap();
        assert_eq!(
            parse,
            &SiwoError::Parse {
                line: 2,
                message: "invalid target id 'x'".to_string()
            }
        );
    }

    #[test]
    fn rejects_missing_target_and_nan_weight() {
        assert!(read_edge_list(Cursor::new("5\n")).is_err());
        assert!(read_edge_list(Cursor::new("1 2 NaN\n")).is_err());
    }
}
