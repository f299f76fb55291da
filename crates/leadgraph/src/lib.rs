//! Directed graph analysis over a dense adjacency matrix.
//!
//! This crate answers structural questions about a directed graph given as
//! a list of `(source, destination)` edges with arbitrary integer node IDs:
//!
//! - **GraphIndex**: sorted, dense indexing of sparse node identifiers
//! - **AdjacencyMatrix**: dense boolean N×N matrix with O(1) edge lookup
//! - **Degrees**: in/out-degree tables, oriented leaders and best followers
//! - **Undirected degrees**: neighbor counts over the symmetrized relation
//! - **BFS**: parent-pointer trees and shortest paths along forward edges
//!
//! Everything is built once and then queried read-only.
//!
//! # Example
//!
//! ```
//! use leadgraph::{EdgeSet, GraphAnalyzer, NodeId};
//!
//! let edges = EdgeSet::from_pairs([(1, 2), (2, 3), (1, 3)]);
//! let analyzer = GraphAnalyzer::new(edges)?;
//!
//! assert_eq!(analyzer.oriented_leaders(), vec![NodeId(3)]);
//! assert_eq!(analyzer.best_followers(), vec![NodeId(1)]);
//! assert_eq!(
//!     analyzer.shortest_path(NodeId(1), NodeId(3)),
//!     vec![NodeId(1), NodeId(3)]
//! );
//! # Ok::<(), leadgraph::GraphError>(())
//! ```

pub mod algorithms;
pub mod analysis;
pub mod classify;
pub mod models;

// Re-export main types
pub use algorithms::bfs::{BfsTree, PathFinder};
pub use algorithms::degree::{DegreeAnalyzer, DegreeTable};
pub use algorithms::undirected::UndirectedDegreeAnalyzer;
pub use analysis::{AnalysisReport, GraphAnalyzer};
pub use classify::{classify, NodeRole};
pub use models::adjacency::AdjacencyMatrix;
pub use models::edge::{Edge, EdgeSet};
pub use models::index::GraphIndex;
pub use models::node::NodeId;

/// Graph analysis error types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// Node identifier not present in the graph index.
    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),

    /// Dense index past the end of the graph index.
    #[error("Index out of range: {index} >= {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Matrix and index were not built from the same edges.
    #[error("Matrix dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
