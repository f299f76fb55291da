//! Node identifier type.
//!
//! Identifiers come straight from the input and may be sparse, negative or
//! arrive in any order. Dense positions are handed out separately by
//! [`GraphIndex`](super::GraphIndex).

use std::fmt;

use bytemuck::{Pod, Zeroable};
use serde::Serialize;

/// Node identifier (vertex ID).
///
/// Using a newtype prevents mixing up node IDs with dense matrix indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct NodeId(pub i64);

impl NodeId {
    /// Create a new node ID.
    pub const fn new(id: i64) -> Self {
        NodeId(id)
    }

    /// Get the inner value.
    pub const fn get(&self) -> i64 {
        self.0
    }

    /// View a slice of node IDs as raw integers without copying.
    pub fn as_raw_slice(ids: &[NodeId]) -> &[i64] {
        bytemuck::cast_slice(ids)
    }
}

impl From<i64> for NodeId {
    fn from(id: i64) -> Self {
        NodeId(id)
    }
}

impl From<i32> for NodeId {
    fn from(id: i32) -> Self {
        NodeId(i64::from(id))
    }
}

impl From<NodeId> for i64 {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// SAFETY: NodeId is #[repr(transparent)] over i64
unsafe impl Zeroable for NodeId {}
unsafe impl Pod for NodeId {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_basics() {
        let node = NodeId::new(42);
        assert_eq!(node.get(), 42);
        assert_eq!(node.to_string(), "42");
        assert_eq!(NodeId::new(-7).to_string(), "-7");
    }

    #[test]
    fn test_node_id_conversions() {
        let node: NodeId = 100i64.into();
        assert_eq!(node.get(), 100);

        let small: NodeId = 5i32.into();
        assert_eq!(small, NodeId(5));

        let raw: i64 = node.into();
        assert_eq!(raw, 100);
    }

    #[test]
    fn test_ordering_follows_value() {
        let mut ids = vec![NodeId(10), NodeId(-3), NodeId(4)];
        ids.sort();
        assert_eq!(ids, vec![NodeId(-3), NodeId(4), NodeId(10)]);
    }

    #[test]
    fn test_display_honors_width() {
        assert_eq!(format!("[{:>6}]", NodeId(42)), "[    42]");
        assert_eq!(format!("[{:<4}]", NodeId(-1)), "[-1  ]");
    }

    #[test]
    fn test_raw_slice_view() {
        let ids = [NodeId(1), NodeId(20), NodeId(300)];
        assert_eq!(NodeId::as_raw_slice(&ids), &[1, 20, 300]);
    }

    #[test]
    fn test_serializes_as_plain_integer() {
        let json = serde_json::to_string(&NodeId(12)).unwrap();
        assert_eq!(json, "12");
    }
}
