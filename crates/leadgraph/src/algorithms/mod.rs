//! Graph algorithms.
//!
//! This module provides the read-only queries over a built graph:
//! - [`degree`]: directed in/out-degrees, oriented leaders and followers
//! - [`undirected`]: neighbor counts over the symmetrized adjacency
//! - [`bfs`]: breadth-first trees and shortest paths

pub mod bfs;
pub mod degree;
pub mod undirected;

pub use bfs::{BfsTree, PathFinder};
pub use degree::{DegreeAnalyzer, DegreeTable};
pub use undirected::UndirectedDegreeAnalyzer;

use std::collections::BTreeMap;

use crate::models::{AdjacencyMatrix, GraphIndex, NodeId};
use crate::{GraphError, Result};

/// Nodes whose count equals the maximum count, ascending.
///
/// An empty map has a maximum of zero and yields no nodes.
pub(crate) fn argmax_nodes(counts: &BTreeMap<NodeId, usize>) -> Vec<NodeId> {
    let max = counts.values().copied().max().unwrap_or(0);
    counts
        .iter()
        .filter(|&(_, &count)| count == max)
        .map(|(&node, _)| node)
        .collect()
}

/// Reject a matrix whose side differs from the index length.
pub(crate) fn check_dimensions(matrix: &AdjacencyMatrix, index: &GraphIndex) -> Result<()> {
    if matrix.size() != index.len() {
        return Err(GraphError::DimensionMismatch {
            expected: index.len(),
            actual: matrix.size(),
        });
    }
    Ok(())
}
