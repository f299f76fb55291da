//! Directed degree analysis.
//!
//! Degrees are counted from the edge list rather than the matrix, so
//! parallel edges each contribute. Derived queries:
//!
//! - oriented leaders: maximum in-degree
//! - best followers: maximum out-degree
//! - followers of a leader: sources of edges into it, in input order

use std::collections::BTreeMap;

use super::argmax_nodes;
use crate::models::{EdgeSet, GraphIndex, NodeId};
use crate::{GraphError, Result};

/// In-degree and out-degree per node.
///
/// Every node of the index has an entry, zero when it has no edges in
/// that direction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DegreeTable {
    /// Edges ending at each node.
    pub in_degree: BTreeMap<NodeId, usize>,
    /// Edges starting at each node.
    pub out_degree: BTreeMap<NodeId, usize>,
}

impl DegreeTable {
    /// In-degree of a node (zero if unknown).
    pub fn in_of(&self, node: NodeId) -> usize {
        self.in_degree.get(&node).copied().unwrap_or(0)
    }

    /// Out-degree of a node (zero if unknown).
    pub fn out_of(&self, node: NodeId) -> usize {
        self.out_degree.get(&node).copied().unwrap_or(0)
    }

    /// Largest in-degree, zero for an empty table.
    pub fn max_in(&self) -> usize {
        self.in_degree.values().copied().max().unwrap_or(0)
    }

    /// Largest out-degree, zero for an empty table.
    pub fn max_out(&self) -> usize {
        self.out_degree.values().copied().max().unwrap_or(0)
    }
}

/// Degree queries over an edge set.
#[derive(Debug, Clone, Copy)]
pub struct DegreeAnalyzer<'a> {
    edges: &'a EdgeSet,
    index: &'a GraphIndex,
}

impl<'a> DegreeAnalyzer<'a> {
    /// Create an analyzer over edges and the index built from them.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownNode`] for the first endpoint missing from
    /// `index`.
    pub fn new(edges: &'a EdgeSet, index: &'a GraphIndex) -> Result<Self> {
        if let Some(node) = edges
            .iter()
            .flat_map(|e| [e.src, e.dst])
            .find(|&node| !index.contains(node))
        {
            return Err(GraphError::UnknownNode(node));
        }
        Ok(Self::from_parts(edges, index))
    }

    /// Create without checking endpoints. Callers guarantee the index was
    /// built from `edges`.
    pub(crate) fn from_parts(edges: &'a EdgeSet, index: &'a GraphIndex) -> Self {
        Self { edges, index }
    }

    /// Count in/out-degrees in one pass over the edges.
    pub fn degrees(&self) -> DegreeTable {
        let seed: BTreeMap<NodeId, usize> = self.index.nodes().iter().map(|&n| (n, 0)).collect();
        let mut table = DegreeTable {
            in_degree: seed.clone(),
            out_degree: seed,
        };

        // Endpoints were checked against the index, so every entry is seeded.
        for edge in self.edges {
            if let Some(out) = table.out_degree.get_mut(&edge.src) {
                *out += 1;
            }
            if let Some(inc) = table.in_degree.get_mut(&edge.dst) {
                *inc += 1;
            }
            debug_assert!(self.index.contains(edge.src) && self.index.contains(edge.dst));
        }

        table
    }

    /// Nodes with the maximum in-degree, ascending.
    pub fn oriented_leaders(&self) -> Vec<NodeId> {
        argmax_nodes(&self.degrees().in_degree)
    }

    /// Nodes with the maximum out-degree, ascending.
    pub fn best_followers(&self) -> Vec<NodeId> {
        argmax_nodes(&self.degrees().out_degree)
    }

    /// Sources of edges pointing at each leader.
    ///
    /// Followers appear in edge encounter order, once per edge. Every
    /// leader gets an entry, even without followers.
    ///
    /// # Example
    ///
    /// ```
    /// use leadgraph::{DegreeAnalyzer, EdgeSet, GraphIndex, NodeId};
    ///
    /// let edges = EdgeSet::from_pairs([(5, 1), (2, 1), (3, 1)]);
    /// let index = GraphIndex::from_edges(&edges);
    /// let followers = DegreeAnalyzer::new(&edges, &index)?.followers_of(&[NodeId(1)]);
    ///
    /// assert_eq!(followers[&NodeId(1)], vec![NodeId(5), NodeId(2), NodeId(3)]);
    /// # Ok::<(), leadgraph::GraphError>(())
    /// ```
    pub fn followers_of(&self, leaders: &[NodeId]) -> BTreeMap<NodeId, Vec<NodeId>> {
        let mut followers: BTreeMap<NodeId, Vec<NodeId>> =
            leaders.iter().map(|&leader| (leader, Vec::new())).collect();

        for edge in self.edges {
            if let Some(list) = followers.get_mut(&edge.dst) {
                list.push(edge.src);
            }
        }

        followers
    }
}
