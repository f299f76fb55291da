//! leadgraph CLI - leader, follower and shortest-path analysis of CSV edge lists.
//!
//! # Commands
//!
//! - `leadgraph analyze <csv>` - Full report, writes the adjacency matrix
//! - `leadgraph matrix <csv>` - Write the adjacency matrix only
//! - `leadgraph bfs <csv> --source <id>` - BFS tree from a node
//! - `leadgraph path <csv> --from <id> --to <id>` - Shortest forward path
//! - `leadgraph roles <csv>` - Role of every node
//!
//! # Examples
//!
//! ```bash
//! # Report as JSON without touching matrix.txt
//! leadgraph analyze students.csv --format json --no-matrix
//!
//! # Shortest path between two students
//! leadgraph path students.csv --from 12 --to 40
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod error;
mod input;

use commands::{analyze, bfs, matrix, path, roles};
use config::{AnalyzerConfig, OutputFormat};
use error::CliResult;

/// leadgraph - directed graph leader and path analysis
#[derive(Parser)]
#[command(name = "leadgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file (default: ./leadgraph.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Treat the first CSV row as data, not a header
    #[arg(long, global = true)]
    no_header: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every query and print the report
    Analyze {
        /// CSV edge list (source,destination)
        csv: PathBuf,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Matrix output file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Do not write the adjacency matrix
        #[arg(long)]
        no_matrix: bool,
    },

    /// Write the adjacency matrix to a text file
    Matrix {
        /// CSV edge list (source,destination)
        csv: PathBuf,

        /// Matrix output file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the BFS tree from a node
    Bfs {
        /// CSV edge list (source,destination)
        csv: PathBuf,

        /// Source node ID
        #[arg(short, long, allow_negative_numbers = true)]
        source: i64,
    },

    /// Print the shortest path between two nodes
    Path {
        /// CSV edge list (source,destination)
        csv: PathBuf,

        /// Start node ID
        #[arg(long, allow_negative_numbers = true)]
        from: i64,

        /// End node ID
        #[arg(long, allow_negative_numbers = true)]
        to: i64,
    },

    /// Print the role of every node
    Roles {
        /// CSV edge list (source,destination)
        csv: PathBuf,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

/// Run a parsed command, returning what it prints to stdout.
fn run(cli: Cli) -> CliResult<String> {
    let mut config = AnalyzerConfig::load(cli.config.as_deref())?;
    if cli.no_header {
        config.has_header = false;
    }

    match cli.command {
        Commands::Analyze {
            csv,
            format,
            output,
            no_matrix,
        } => {
            if let Some(format) = format {
                config.format = format;
            }
            if let Some(output) = output {
                config.matrix_output = output;
            }
            analyze::execute(&csv, &config, !no_matrix)
        }

        Commands::Matrix { csv, output } => {
            let output = output.unwrap_or(config.matrix_output);
            matrix::execute(&csv, config.has_header, &output)
        }

        Commands::Bfs { csv, source } => bfs::execute(&csv, config.has_header, source),

        Commands::Path { csv, from, to } => path::execute(&csv, config.has_header, from, to),

        Commands::Roles { csv, format } => {
            roles::execute(&csv, config.has_header, format.unwrap_or(config.format))
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
