//! Per-node roles for rendering.
//!
//! A renderer colours nodes by role; this module only decides the role.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

use crate::models::NodeId;

/// Role of a node in the leader/follower analysis.
///
/// When a node qualifies for several roles the first variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeRole {
    /// Maximum in-degree.
    Leader,
    /// Maximum out-degree.
    BestFollower,
    /// Points at some leader.
    LeaderFollower,
    /// None of the above.
    Other,
}

impl NodeRole {
    /// Short lowercase label.
    pub const fn as_str(&self) -> &'static str {
        match self {
            NodeRole::Leader => "leader",
            NodeRole::BestFollower => "best-follower",
            NodeRole::LeaderFollower => "leader-follower",
            NodeRole::Other => "other",
        }
    }
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Assign a role to every node.
pub fn classify(
    nodes: &[NodeId],
    leaders: &[NodeId],
    best_followers: &[NodeId],
    leader_followers: &BTreeMap<NodeId, Vec<NodeId>>,
) -> BTreeMap<NodeId, NodeRole> {
    let leaders: BTreeSet<_> = leaders.iter().collect();
    let best: BTreeSet<_> = best_followers.iter().collect();
    let followers: BTreeSet<_> = leader_followers.values().flatten().collect();

    nodes
        .iter()
        .map(|node| {
            let role = if leaders.contains(node) {
                NodeRole::Leader
            } else if best.contains(node) {
                NodeRole::BestFollower
            } else if followers.contains(node) {
                NodeRole::LeaderFollower
            } else {
                NodeRole::Other
            };
            (*node, role)
        })
        .collect()
}
