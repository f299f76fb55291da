//! `leadgraph.toml` configuration.
//!
//! Every field has a default, so an empty file is valid. Command-line
//! flags override whatever the file says.
//!
//! ```toml
//! matrix_output = "out/matrix.txt"
//! has_header = true
//! format = "json"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "leadgraph.toml";

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Analyzer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Where the adjacency matrix text is written.
    #[serde(default = "default_matrix_output")]
    pub matrix_output: PathBuf,

    /// Skip the first CSV row.
    #[serde(default = "default_has_header")]
    pub has_header: bool,

    /// Report format.
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_matrix_output() -> PathBuf {
    PathBuf::from("matrix.txt")
}

fn default_has_header() -> bool {
    true
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            matrix_output: default_matrix_output(),
            has_header: default_has_header(),
            format: OutputFormat::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str) -> CliResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `leadgraph.toml` in the
    /// working directory is used if present, defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> CliResult<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::Config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                path.to_path_buf()
            }
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !path.exists() {
                    tracing::debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
                    return Ok(Self::default());
                }
                path
            }
        };

        tracing::debug!(path = %path.display(), "loading config");
        let text = std::fs::read_to_string(&path)?;
        Self::from_toml(&text)
    }
}
