//! BFS tree from one node.

use std::fmt::Write;
use std::path::Path;

use colored::Colorize;
use leadgraph::NodeId;

use super::analyze::render_tree;
use super::load_analyzer;
use crate::error::CliResult;

/// Execute the bfs command.
pub fn execute(csv: &Path, has_header: bool, source: i64) -> CliResult<String> {
    let analyzer = load_analyzer(csv, has_header)?;
    let source = NodeId(source);

    if !analyzer.index().contains(source) {
        tracing::warn!(%source, "source is not in the graph");
    }

    let tree = analyzer.bfs_tree(source);
    let mut out = String::new();
    writeln!(
        out,
        "{} {} reachable from {}",
        "BFS:".bold(),
        tree.len(),
        source.to_string().bright_white()
    )?;
    render_tree(&mut out, &tree)?;

    Ok(out)
}
