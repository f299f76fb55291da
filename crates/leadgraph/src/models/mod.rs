//! Graph data models.
//!
//! This module provides the core data structures for representing graphs:
//! - [`EdgeSet`]: the input edge list, in encounter order
//! - [`GraphIndex`]: sorted bijection between node IDs and dense indices
//! - [`AdjacencyMatrix`]: dense boolean adjacency built from the two above
//! - [`NodeId`]: graph vertex identifier

pub mod adjacency;
pub mod edge;
pub mod index;
pub mod node;

pub use adjacency::AdjacencyMatrix;
pub use edge::{Edge, EdgeSet};
pub use index::GraphIndex;
pub use node::NodeId;
