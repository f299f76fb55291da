//! Persist the adjacency matrix.

use std::fmt::Write;
use std::path::Path;

use colored::Colorize;

use super::{load_analyzer, write_matrix};
use crate::error::CliResult;

/// Execute the matrix command.
pub fn execute(csv: &Path, has_header: bool, output: &Path) -> CliResult<String> {
    let analyzer = load_analyzer(csv, has_header)?;
    write_matrix(&analyzer, output)?;

    let mut out = String::new();
    writeln!(
        out,
        "  {} Wrote {}x{} matrix to {}",
        "✓".bright_green(),
        analyzer.matrix().size(),
        analyzer.matrix().size(),
        output.display().to_string().bright_white()
    )?;
    writeln!(
        out,
        "  {} {:?}",
        "Row/column order:".dimmed(),
        analyzer.index().raw_nodes()
    )?;

    Ok(out)
}
