//! CLI command implementations.

pub mod analyze;
pub mod bfs;
pub mod matrix;
pub mod path;
pub mod roles;

use std::path::Path;

use leadgraph::{GraphAnalyzer, NodeId};

use crate::error::CliResult;
use crate::input;

/// Load a CSV edge list and build the analyzer over it.
pub fn load_analyzer(csv: &Path, has_header: bool) -> CliResult<GraphAnalyzer> {
    let edges = input::load_edges(csv, has_header)?;
    let analyzer = GraphAnalyzer::new(edges)?;
    tracing::debug!(
        nodes = analyzer.index().len(),
        edges = analyzer.edges().len(),
        "graph built"
    );
    Ok(analyzer)
}

/// Write the adjacency matrix text, creating parent directories.
pub fn write_matrix(analyzer: &GraphAnalyzer, output: &Path) -> CliResult<()> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output, analyzer.matrix().to_text())?;
    tracing::info!(
        path = %output.display(),
        size = analyzer.matrix().size(),
        "wrote adjacency matrix"
    );
    Ok(())
}

/// Format node IDs as `[a, b, c]`.
pub fn format_nodes(nodes: &[NodeId]) -> String {
    let parts: Vec<String> = nodes.iter().map(NodeId::to_string).collect();
    format!("[{}]", parts.join(", "))
}

/// Format a path as `a -> b -> c`.
pub fn format_path(path: &[NodeId]) -> String {
    let parts: Vec<String> = path.iter().map(NodeId::to_string).collect();
    parts.join(" -> ")
}
