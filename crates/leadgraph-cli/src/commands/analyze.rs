//! Full leader/follower report.

use std::fmt::Write;
use std::path::Path;

use colored::Colorize;
use leadgraph::{AnalysisReport, BfsTree};

use super::{format_nodes, format_path, load_analyzer, write_matrix};
use crate::config::{AnalyzerConfig, OutputFormat};
use crate::error::CliResult;

/// Execute the analyze command, returning the report text.
pub fn execute(csv: &Path, config: &AnalyzerConfig, write_matrix_file: bool) -> CliResult<String> {
    let analyzer = load_analyzer(csv, config.has_header)?;

    if write_matrix_file {
        write_matrix(&analyzer, &config.matrix_output)?;
    }

    let report = analyzer.report();
    match config.format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&report)?)),
        OutputFormat::Text => render_report(&report),
    }
}

fn render_report(report: &AnalysisReport) -> CliResult<String> {
    let mut out = String::new();

    writeln!(
        out,
        "{} {} nodes, {} edges\n",
        "Graph:".bold(),
        report.num_nodes,
        report.num_edges
    )?;

    writeln!(
        out,
        "  {:<24} {}",
        "Leaders (directed):".bright_red(),
        format_nodes(&report.leaders)
    )?;

    writeln!(out, "  {}", "Followers of leaders:".bright_white())?;
    for (leader, followers) in &report.leader_followers {
        writeln!(
            out,
            "    {:>6} <- {}",
            leader.to_string().bright_red(),
            format_nodes(followers)
        )?;
    }

    writeln!(
        out,
        "  {:<24} {}",
        "Best followers:".yellow(),
        format_nodes(&report.best_followers)
    )?;
    writeln!(
        out,
        "  {:<24} {}",
        "Leaders (undirected):".bright_white(),
        format_nodes(&report.undirected_leaders)
    )?;

    writeln!(out, "  {}", "BFS tree from first leader:".bright_white())?;
    render_tree(&mut out, &report.bfs_from_first_leader)?;

    let path = if report.path_between_leaders.is_empty() {
        "none".dimmed().to_string()
    } else {
        format_path(&report.path_between_leaders)
    };
    writeln!(out, "  {:<24} {}", "Path between leaders:".bright_white(), path)?;

    Ok(out)
}

/// Render a BFS tree in discovery order.
pub fn render_tree(out: &mut String, tree: &BfsTree) -> CliResult<()> {
    if tree.is_empty() {
        writeln!(out, "    {}", "(empty)".dimmed())?;
        return Ok(());
    }
    for &node in tree.discovery_order() {
        match tree.parent(node).flatten() {
            Some(parent) => writeln!(out, "    {:>6} <- {}", node, parent)?,
            None => writeln!(
                out,
                "    {:>6} {}",
                node.to_string().bright_green(),
                "(source)".dimmed()
            )?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{plain_output, write_csv};
    use leadgraph::{EdgeSet, GraphAnalyzer, NodeId};

    #[test]
    fn test_text_report() {
        plain_output();
        let (dir, csv) = write_csv("src,dst\n1,2\n2,3\n1,3\n");
        let config = AnalyzerConfig {
            matrix_output: dir.path().join("matrix.txt"),
            ..AnalyzerConfig::default()
        };

        let out = execute(&csv, &config, true).unwrap();

        assert!(out.contains("3 nodes, 3 edges"));
        assert!(out.contains("Leaders (directed):"));
        assert!(out.contains("[3]"));
        assert!(out.contains("<- [2, 1]"));
        assert!(out.contains("Best followers:"));
        assert!(out.contains("[1, 2, 3]"));
        assert!(out.contains("(source)"));
        assert!(config.matrix_output.exists());
    }

    #[test]
    fn test_skip_matrix_file() {
        let (dir, csv) = write_csv("src,dst\n1,2\n");
        let config = AnalyzerConfig {
            matrix_output: dir.path().join("matrix.txt"),
            format: OutputFormat::Json,
            ..AnalyzerConfig::default()
        };

        let out = execute(&csv, &config, false).unwrap();

        assert!(!config.matrix_output.exists());
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["leaders"], serde_json::json!([2]));
    }

    #[test]
    fn test_render_tree() {
        plain_output();
        let analyzer = GraphAnalyzer::new(EdgeSet::from_pairs([(1, 2), (2, 3)])).unwrap();
        let mut out = String::new();

        render_tree(&mut out, &analyzer.bfs_tree(NodeId(1))).unwrap();
        assert_eq!(
            out,
            "         1 (source)\n         2 <- 1\n         3 <- 2\n"
        );

        let mut empty = String::new();
        render_tree(&mut empty, &analyzer.bfs_tree(NodeId(9))).unwrap();
        assert_eq!(empty, "    (empty)\n");
    }
}
