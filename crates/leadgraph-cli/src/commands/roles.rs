//! Per-node classification.

use std::fmt::Write;
use std::path::Path;

use colored::{ColoredString, Colorize};
use leadgraph::NodeRole;

use super::load_analyzer;
use crate::config::OutputFormat;
use crate::error::CliResult;

/// Execute the roles command.
pub fn execute(csv: &Path, has_header: bool, format: OutputFormat) -> CliResult<String> {
    let analyzer = load_analyzer(csv, has_header)?;
    let roles = analyzer.roles();

    let mut out = String::new();
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&roles)?)?,
        OutputFormat::Text => {
            for (node, role) in &roles {
                writeln!(out, "  {:>8}  {}", node, paint(*role))?;
            }
        }
    }

    Ok(out)
}

fn paint(role: NodeRole) -> ColoredString {
    match role {
        NodeRole::Leader => role.as_str().red(),
        NodeRole::BestFollower => role.as_str().yellow(),
        NodeRole::LeaderFollower => role.as_str().bright_red(),
        NodeRole::Other => role.as_str().bright_blue(),
    }
}
