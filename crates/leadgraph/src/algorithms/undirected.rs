//! Degree over the symmetrized (undirected) adjacency relation.
//!
//! Node `j` is a neighbor of `i` when `adj[i][j] || adj[j][i]`. A node with a
//! self-loop counts itself once. The count is taken from the matrix, so
//! parallel edges and reciprocal pairs each contribute a single neighbor.

use std::collections::BTreeMap;

use super::{argmax_nodes, check_dimensions};
use crate::models::{AdjacencyMatrix, GraphIndex, NodeId};
use crate::Result;

/// Symmetrized neighbor counting over an adjacency matrix.
#[derive(Debug, Clone, Copy)]
pub struct UndirectedDegreeAnalyzer<'a> {
    matrix: &'a AdjacencyMatrix,
    index: &'a GraphIndex,
}

impl<'a> UndirectedDegreeAnalyzer<'a> {
    /// Create an analyzer over a matrix and the index it was built with.
    ///
    /// # Errors
    ///
    /// [`GraphError::DimensionMismatch`](crate::GraphError::DimensionMismatch)
    /// if the matrix side differs from the index length.
    pub fn new(matrix: &'a AdjacencyMatrix, index: &'a GraphIndex) -> Result<Self> {
        check_dimensions(matrix, index)?;
        Ok(Self::from_parts(matrix, index))
    }

    /// Create without checking dimensions. Callers guarantee they match.
    pub(crate) fn from_parts(matrix: &'a AdjacencyMatrix, index: &'a GraphIndex) -> Self {
        debug_assert_eq!(matrix.size(), index.len());
        Self { matrix, index }
    }

    /// Distinct undirected neighbors per node, by full O(N²) scan.
    pub fn neighbor_counts(&self) -> BTreeMap<NodeId, usize> {
        let n = self.matrix.size();

        self.index
            .nodes()
            .iter()
            .enumerate()
            .map(|(i, &node)| {
                let count = (0..n)
                    .filter(|&j| self.matrix.has_edge(i, j) || self.matrix.has_edge(j, i))
                    .count();
                (node, count)
            })
            .collect()
    }

    /// Nodes with the most undirected neighbors, ascending.
    pub fn undirected_leaders(&self) -> Vec<NodeId> {
        argmax_nodes(&self.neighbor_counts())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EdgeSet;
    use crate::GraphError;

    fn build(pairs: &[(i64, i64)]) -> (AdjacencyMatrix, GraphIndex) {
        let edges = EdgeSet::from_pairs(pairs.iter().copied());
        let index = GraphIndex::from_edges(&edges);
        let adj = AdjacencyMatrix::from_edges(&edges, &index).unwrap();
        (adj, index)
    }

    #[test]
    fn test_counts_triangle() {
        let (adj, index) = build(&[(1, 2), (2, 3), (1, 3)]);
        let counts = UndirectedDegreeAnalyzer::new(&adj, &index)
            .unwrap()
            .neighbor_counts();

        assert_eq!(counts[&NodeId(1)], 2);
        assert_eq!(counts[&NodeId(2)], 2);
        assert_eq!(counts[&NodeId(3)], 2);
    }

    #[test]
    fn test_reciprocal_edges_count_once() {
        let (adj, index) = build(&[(1, 2), (2, 1), (1, 2)]);
        let counts = UndirectedDegreeAnalyzer::new(&adj, &index)
            .unwrap()
            .neighbor_counts();

        assert_eq!(counts[&NodeId(1)], 1);
        assert_eq!(counts[&NodeId(2)], 1);
    }

    #[test]
    fn test_self_loop_counts_self() {
        let (adj, index) = build(&[(1, 1), (1, 2)]);
        let counts = UndirectedDegreeAnalyzer::new(&adj, &index)
            .unwrap()
            .neighbor_counts();

        assert_eq!(counts[&NodeId(1)], 2);
        assert_eq!(counts[&NodeId(2)], 1);
    }

    #[test]
    fn test_leaders_differ_from_directed() {
        // Hub 5 only sends, so it has in-degree 0 but the most neighbors.
        let (adj, index) = build(&[(5, 1), (5, 2), (5, 3), (1, 2)]);
        let leaders = UndirectedDegreeAnalyzer::new(&adj, &index)
            .unwrap()
            .undirected_leaders();

        assert_eq!(leaders, vec![NodeId(5)]);
    }

    #[test]
    fn test_ties() {
        let (adj, index) = build(&[(1, 2), (3, 4)]);
        let leaders = UndirectedDegreeAnalyzer::new(&adj, &index)
            .unwrap()
            .undirected_leaders();

        assert_eq!(leaders, vec![NodeId(1), NodeId(2), NodeId(3), NodeId(4)]);
    }

    #[test]
    fn test_empty_graph() {
        let (adj, index) = build(&[]);
        let leaders = UndirectedDegreeAnalyzer::new(&adj, &index)
            .unwrap()
            .undirected_leaders();
        assert!(leaders.is_empty());
    }

    #[test]
    fn test_mismatched_sizes() {
        let (_, index) = build(&[(1, 2)]);
        let adj = AdjacencyMatrix::empty(3);
        let result = UndirectedDegreeAnalyzer::new(&adj, &index);
        assert!(matches!(
            result,
            Err(GraphError::DimensionMismatch {
                expected: 2,
                actual: 3
            })
        ));
    }
}
