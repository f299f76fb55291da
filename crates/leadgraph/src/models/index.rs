//! Dense indexing of sparse node identifiers.
//!
//! Every downstream structure addresses nodes by their position in the
//! ascending list of distinct identifiers. Building two indexes from the
//! same edges always gives the same assignment.

use super::edge::EdgeSet;
use super::node::NodeId;
use crate::{GraphError, Result};

/// Bijection between node IDs and dense indices `0..N`.
///
/// Index `i` belongs to the `i`-th smallest identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphIndex {
    /// Distinct node IDs, strictly ascending.
    nodes: Vec<NodeId>,
}

impl GraphIndex {
    /// Build the index from every endpoint in the edge set.
    pub fn from_edges(edges: &EdgeSet) -> Self {
        let nodes: Vec<NodeId> = edges.node_ids().into_iter().collect();
        tracing::debug!(nodes = nodes.len(), edges = edges.len(), "built graph index");
        Self { nodes }
    }

    /// Number of indexed nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the index has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Dense index of a node.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownNode`] if the node never appeared in the edges.
    pub fn index_of(&self, node: NodeId) -> Result<usize> {
        self.nodes
            .binary_search(&node)
            .map_err(|_| GraphError::UnknownNode(node))
    }

    /// Node at a dense index.
    ///
    /// # Errors
    ///
    /// [`GraphError::IndexOutOfRange`] if `index >= len()`.
    pub fn node_at(&self, index: usize) -> Result<NodeId> {
        self.nodes
            .get(index)
            .copied()
            .ok_or(GraphError::IndexOutOfRange {
                index,
                len: self.nodes.len(),
            })
    }

    /// Check if a node is indexed.
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.binary_search(&node).is_ok()
    }

    /// All nodes in index order (ascending).
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// All nodes in index order, as raw integers.
    pub fn raw_nodes(&self) -> &[i64] {
        NodeId::as_raw_slice(&self.nodes)
    }
}
