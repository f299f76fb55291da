//! Directed edges and the input edge list.

use std::collections::BTreeSet;

use super::node::NodeId;

/// A directed edge `src -> dst`.
///
/// Self-loops are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Source node.
    pub src: NodeId,
    /// Destination node.
    pub dst: NodeId,
}

impl Edge {
    /// Create a new edge.
    pub const fn new(src: NodeId, dst: NodeId) -> Self {
        Self { src, dst }
    }

    /// Check if this edge starts and ends at the same node.
    pub fn is_self_loop(&self) -> bool {
        self.src == self.dst
    }
}

impl From<(i64, i64)> for Edge {
    fn from((src, dst): (i64, i64)) -> Self {
        Edge::new(NodeId(src), NodeId(dst))
    }
}

impl From<(NodeId, NodeId)> for Edge {
    fn from((src, dst): (NodeId, NodeId)) -> Self {
        Edge::new(src, dst)
    }
}

/// Edge list as supplied by the input collaborator.
///
/// Edges keep their encounter order, which is observable through
/// [`DegreeAnalyzer::followers_of`](crate::DegreeAnalyzer::followers_of).
/// Parallel edges are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeSet {
    edges: Vec<Edge>,
}

impl EdgeSet {
    /// Create an empty edge set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from a list of edges.
    pub fn from_edges(edges: Vec<Edge>) -> Self {
        Self { edges }
    }

    /// Create from raw `(src, dst)` pairs.
    ///
    /// # Example
    ///
    /// ```
    /// use leadgraph::EdgeSet;
    ///
    /// let edges = EdgeSet::from_pairs([(1, 2), (2, 3)]);
    /// assert_eq!(edges.len(), 2);
    /// ```
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        pairs.into_iter().map(Edge::from).collect()
    }

    /// Append an edge.
    pub fn push(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// Number of edges, counting duplicates.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Check if there are no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterate over edges in encounter order.
    pub fn iter(&self) -> std::slice::Iter<'_, Edge> {
        self.edges.iter()
    }

    /// Edges as a slice, in encounter order.
    pub fn as_slice(&self) -> &[Edge] {
        &self.edges
    }

    /// Distinct node IDs appearing as either endpoint, ascending.
    pub fn node_ids(&self) -> BTreeSet<NodeId> {
        self.edges.iter().flat_map(|e| [e.src, e.dst]).collect()
    }
}

impl FromIterator<Edge> for EdgeSet {
    fn from_iter<T: IntoIterator<Item = Edge>>(iter: T) -> Self {
        Self {
            edges: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a EdgeSet {
    type Item = &'a Edge;
    type IntoIter = std::slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}
