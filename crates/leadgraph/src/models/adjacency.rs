//! Dense boolean adjacency matrix.
//!
//! Memory layout is a single row-major buffer:
//! - `cells[i * size + j]` is true iff some edge runs from index `i` to `j`
//!
//! Parallel edges collapse into one cell. The matrix is never mutated
//! after [`AdjacencyMatrix::from_edges`] returns.

use super::edge::EdgeSet;
use super::index::GraphIndex;
use crate::Result;

/// Dense N×N adjacency over the dense indices of a [`GraphIndex`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    /// Side length (number of nodes).
    size: usize,
    /// Row-major cells (length = size * size).
    cells: Vec<bool>,
}

impl AdjacencyMatrix {
    /// Create an N×N matrix with no edges.
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    /// Build the matrix from an edge set and the index built from it.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownNode`](crate::GraphError::UnknownNode) if an
    /// endpoint is missing from `index`, which only happens when the index
    /// was built from a different edge set.
    ///
    /// # Example
    ///
    /// ```
    /// use leadgraph::{AdjacencyMatrix, EdgeSet, GraphIndex};
    ///
    /// let edges = EdgeSet::from_pairs([(10, 20), (20, 10), (10, 20)]);
    /// let index = GraphIndex::from_edges(&edges);
    /// let adj = AdjacencyMatrix::from_edges(&edges, &index).unwrap();
    ///
    /// assert_eq!(adj.size(), 2);
    /// assert!(adj.has_edge(0, 1));
    /// assert_eq!(adj.num_edges(), 2);
    /// ```
    pub fn from_edges(edges: &EdgeSet, index: &GraphIndex) -> Result<Self> {
        let mut matrix = Self::empty(index.len());
        for edge in edges {
            let i = index.index_of(edge.src)?;
            let j = index.index_of(edge.dst)?;
            matrix.cells[i * matrix.size + j] = true;
        }
        tracing::debug!(
            size = matrix.size,
            present = matrix.num_edges(),
            "built adjacency matrix"
        );
        Ok(matrix)
    }

    /// Side length of the matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if the matrix has no nodes.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of set cells (distinct directed edges).
    pub fn num_edges(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Check if an edge exists from index `i` to index `j`.
    ///
    /// Out-of-range indices have no edges.
    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        i < self.size && j < self.size && self.cells[i * self.size + j]
    }

    /// Row `i` of the matrix. Empty for an out-of-range row.
    pub fn row(&self, i: usize) -> &[bool] {
        if i >= self.size {
            return &[];
        }
        &self.cells[i * self.size..(i + 1) * self.size]
    }

    /// Rows in order, for persistence.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        // chunks(0) panics, and an empty matrix has no rows anyway.
        self.cells.chunks(self.size.max(1))
    }

    /// Indices `j` with an edge `i -> j`, ascending.
    pub fn out_neighbors(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        self.row(i)
            .iter()
            .enumerate()
            .filter_map(|(j, &present)| present.then_some(j))
    }

    /// Indices `i` with an edge `i -> j`, ascending.
    pub fn in_neighbors(&self, j: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.size).filter(move |&i| self.has_edge(i, j))
    }

    /// Render the matrix as text, one `[0, 1, 0]` line per row.
    pub fn to_text(&self) -> String {
        self.rows()
            .map(|row| {
                let cells: Vec<&str> = row.iter().map(|&c| if c { "1" } else { "0" }).collect();
                format!("[{}]", cells.join(", "))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
