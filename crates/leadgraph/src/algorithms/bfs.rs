//! Breadth-first search over forward edges.
//!
//! BFS expands a FIFO frontier from a single source, following only
//! `adj[i][j]` (never the reverse direction). The result is a parent-pointer
//! tree covering exactly the nodes reachable from the source, from which
//! shortest paths (by edge count) are recovered by backtracking.
//!
//! Unknown nodes are not an error here: an unknown source reaches nothing,
//! so its tree is empty and every path from it is empty.

use std::collections::{BTreeMap, VecDeque};

use serde::Serialize;

use super::check_dimensions;
use crate::models::{AdjacencyMatrix, GraphIndex, NodeId};
use crate::Result;

/// BFS tree as parent pointers.
///
/// The source maps to `None`; every other reachable node maps to the node
/// it was discovered from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BfsTree {
    source: Option<NodeId>,
    parents: BTreeMap<NodeId, Option<NodeId>>,
    #[serde(skip)]
    order: Vec<NodeId>,
}

impl BfsTree {
    /// Tree with no nodes, returned for an unknown source.
    pub fn empty() -> Self {
        Self::default()
    }

    fn rooted(source: NodeId) -> Self {
        let mut parents = BTreeMap::new();
        parents.insert(source, None);
        Self {
            source: Some(source),
            parents,
            order: vec![source],
        }
    }

    fn discover(&mut self, node: NodeId, parent: NodeId) {
        self.parents.insert(node, Some(parent));
        self.order.push(node);
    }

    /// BFS source, `None` for an empty tree.
    pub fn source(&self) -> Option<NodeId> {
        self.source
    }

    /// Number of reachable nodes, including the source.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Check if nothing was reached.
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Check if a node is reachable from the source.
    pub fn contains(&self, node: NodeId) -> bool {
        self.parents.contains_key(&node)
    }

    /// Parent of a reachable node.
    ///
    /// `None` if the node is unreachable, `Some(None)` for the source.
    pub fn parent(&self, node: NodeId) -> Option<Option<NodeId>> {
        self.parents.get(&node).copied()
    }

    /// Parent pointers keyed by node, ascending.
    pub fn parents(&self) -> &BTreeMap<NodeId, Option<NodeId>> {
        &self.parents
    }

    /// Nodes in the order BFS discovered them, source first.
    pub fn discovery_order(&self) -> &[NodeId] {
        &self.order
    }

    /// Hops from the source to a reachable node.
    pub fn depth(&self, node: NodeId) -> Option<usize> {
        self.path_to(node).map(|path| path.len() - 1)
    }

    /// Path from the source to `target`, inclusive at both ends.
    ///
    /// `None` if `target` is unreachable.
    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        let mut path = vec![target];
        let mut current = self.parent(target)?;

        // Walk back to source
        while let Some(parent) = current {
            path.push(parent);
            current = self.parent(parent)?;
        }

        path.reverse();
        Some(path)
    }
}

/// Breadth-first queries over an adjacency matrix.
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<'a> {
    matrix: &'a AdjacencyMatrix,
    index: &'a GraphIndex,
}

impl<'a> PathFinder<'a> {
    /// Create a path finder over a matrix and the index it was built with.
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

    /// BFS tree rooted at `source`.
    ///
    /// Uses a FIFO queue with O(N²) complexity on the dense matrix. Returns
    /// an empty tree if `source` is not in the graph.
    ///
    /// # Example
    ///
    /// ```
    /// use leadgraph::{GraphAnalyzer, EdgeSet, NodeId};
    ///
    /// let analyzer = GraphAnalyzer::new(EdgeSet::from_pairs([(1, 2), (2, 3), (1, 3)]))?;
    /// let tree = analyzer.bfs_tree(NodeId(1));
    ///
    /// assert_eq!(tree.parent(NodeId(1)), Some(None));
    /// assert_eq!(tree.parent(NodeId(3)), Some(Some(NodeId(1))));
    /// # Ok::<(), leadgraph::GraphError>(())
    /// ```
    pub fn bfs_tree(&self, source: NodeId) -> BfsTree {
        let Ok(start) = self.index.index_of(source) else {
            tracing::trace!(%source, "bfs from unknown node");
            return BfsTree::empty();
        };

        let nodes = self.index.nodes();
        let mut tree = BfsTree::rooted(source);
        let mut visited = vec![false; nodes.len()];
        let mut queue = VecDeque::new();

        visited[start] = true;
        queue.push_back(start);

        while let Some(u) = queue.pop_front() {
            for v in self.matrix.out_neighbors(u) {
                if !visited[v] {
                    visited[v] = true;
                    tree.discover(nodes[v], nodes[u]);
                    queue.push_back(v);
                }
            }
        }

        tracing::trace!(%source, reached = tree.len(), "bfs complete");
        tree
    }

    /// Shortest path from `src` to `dst` by edge count, inclusive.
    ///
    /// Empty if `dst` is unreachable or either endpoint is unknown.
    pub fn shortest_path(&self, src: NodeId, dst: NodeId) -> Vec<NodeId> {
        self.bfs_tree(src).path_to(dst).unwrap_or_default()
    }
}
