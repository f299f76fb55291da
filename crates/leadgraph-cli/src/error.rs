//! Error types for the leadgraph CLI.

use std::path::PathBuf;

use thiserror::Error;

/// CLI result type alias.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error type.
#[derive(Error, Debug)]
pub enum CliError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV input.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A field that should hold a node ID.
    #[error("Invalid node ID {value:?} on line {line}")]
    InvalidNodeId { line: u64, value: String },

    /// Configuration file missing or unreadable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Writing command output failed.
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// JSON output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Graph construction or lookup failed.
    #[error("Graph error: {0}")]
    Graph(#[from] leadgraph::GraphError),

    /// Input file does not exist.
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),
}

impl From<toml::de::Error> for CliError {
    fn from(e: toml::de::Error) -> Self {
        CliError::Config(e.to_string())
    }
}
