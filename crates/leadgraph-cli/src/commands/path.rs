//! Shortest path between two nodes.

use std::path::Path;

use colored::Colorize;
use leadgraph::NodeId;

use super::{format_path, load_analyzer};
use crate::error::CliResult;

/// Execute the path command.
pub fn execute(csv: &Path, has_header: bool, from: i64, to: i64) -> CliResult<String> {
    let analyzer = load_analyzer(csv, has_header)?;
    let path = analyzer.shortest_path(NodeId(from), NodeId(to));

    let line = if path.is_empty() {
        format!("{} {} -> {}: {}", "Path:".bold(), from, to, "unreachable".yellow())
    } else {
        format!(
            "{} {} ({} hops)",
            "Path:".bold(),
            format_path(&path).bright_white(),
            path.len() - 1
        )
    };

    Ok(format!("{line}\n"))
}
