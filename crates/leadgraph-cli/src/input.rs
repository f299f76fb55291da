//! CSV edge-list input.
//!
//! Each row is `source,destination`. The first row is a header unless
//! configured otherwise, rows with fewer than two fields are skipped, extra
//! fields are ignored and values are trimmed before parsing.

use std::io::Read;
use std::path::Path;

use leadgraph::{Edge, EdgeSet, NodeId};

use crate::error::{CliError, CliResult};

/// Read edges from a CSV file.
pub fn load_edges(path: &Path, has_header: bool) -> CliResult<EdgeSet> {
    if !path.exists() {
        return Err(CliError::InputNotFound(path.to_path_buf()));
    }
    let file = std::fs::File::open(path)?;
    let edges = read_edges(file, has_header)?;
    tracing::info!(path = %path.display(), edges = edges.len(), "loaded edge list");
    Ok(edges)
}

/// Read edges from any CSV source.
pub fn read_edges<R: Read>(reader: R, has_header: bool) -> CliResult<EdgeSet> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(has_header)
        .flexible(true)
        .from_reader(reader);

    let mut edges = EdgeSet::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());

        let (Some(src), Some(dst)) = (record.get(0), record.get(1)) else {
            tracing::trace!(line, "skipping short row");
            continue;
        };
        edges.push(Edge::new(parse_node(src, line)?, parse_node(dst, line)?));
    }

    Ok(edges)
}

fn parse_node(field: &str, line: u64) -> CliResult<NodeId> {
    field
        .trim()
        .parse::<i64>()
        .map(NodeId)
        .map_err(|_| CliError::InvalidNodeId {
            line,
            value: field.to_string(),
        })
}
