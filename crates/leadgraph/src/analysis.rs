//! One-stop analysis of a directed graph.
//!
//! [`GraphAnalyzer`] owns the edge list together with the index and matrix
//! built from it, and hands out the individual analyzers over borrowed
//! views. Nothing is mutated after [`GraphAnalyzer::new`].

use std::collections::BTreeMap;

use serde::Serialize;

use crate::algorithms::{
    BfsTree, DegreeAnalyzer, DegreeTable, PathFinder, UndirectedDegreeAnalyzer,
};
use crate::classify::{classify, NodeRole};
use crate::models::{AdjacencyMatrix, EdgeSet, GraphIndex, NodeId};
use crate::Result;

/// Immutable graph plus every query over it.
#[derive(Debug, Clone)]
pub struct GraphAnalyzer {
    edges: EdgeSet,
    index: GraphIndex,
    matrix: AdjacencyMatrix,
}

impl GraphAnalyzer {
    /// Build the index and matrix for an edge set.
    pub fn new(edges: EdgeSet) -> Result<Self> {
        let index = GraphIndex::from_edges(&edges);
        let matrix = AdjacencyMatrix::from_edges(&edges, &index)?;
        Ok(Self {
            edges,
            index,
            matrix,
        })
    }

    /// Input edges, in encounter order.
    pub fn edges(&self) -> &EdgeSet {
        &self.edges
    }

    /// Node index.
    pub fn index(&self) -> &GraphIndex {
        &self.index
    }

    /// Adjacency matrix.
    pub fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }

    fn degree_analyzer(&self) -> DegreeAnalyzer<'_> {
        DegreeAnalyzer::from_parts(&self.edges, &self.index)
    }

    fn path_finder(&self) -> PathFinder<'_> {
        PathFinder::from_parts(&self.matrix, &self.index)
    }

    /// In/out-degree table.
    pub fn degrees(&self) -> DegreeTable {
        self.degree_analyzer().degrees()
    }

    /// Nodes with maximum in-degree.
    pub fn oriented_leaders(&self) -> Vec<NodeId> {
        self.degree_analyzer().oriented_leaders()
    }

    /// Nodes with maximum out-degree.
    pub fn best_followers(&self) -> Vec<NodeId> {
        self.degree_analyzer().best_followers()
    }

    /// Sources of edges into each leader, in encounter order.
    pub fn followers_of(&self, leaders: &[NodeId]) -> BTreeMap<NodeId, Vec<NodeId>> {
        self.degree_analyzer().followers_of(leaders)
    }

    /// Nodes with the most neighbors under the symmetrized relation.
    pub fn undirected_leaders(&self) -> Vec<NodeId> {
        UndirectedDegreeAnalyzer::from_parts(&self.matrix, &self.index).undirected_leaders()
    }

    /// BFS tree from `source`; empty for an unknown source.
    pub fn bfs_tree(&self, source: NodeId) -> BfsTree {
        self.path_finder().bfs_tree(source)
    }

    /// Shortest forward path; empty when there is none.
    pub fn shortest_path(&self, src: NodeId, dst: NodeId) -> Vec<NodeId> {
        self.path_finder().shortest_path(src, dst)
    }

    /// Role of every node.
    pub fn roles(&self) -> BTreeMap<NodeId, NodeRole> {
        let leaders = self.oriented_leaders();
        let followers = self.followers_of(&leaders);
        classify(
            self.index.nodes(),
            &leaders,
            &self.best_followers(),
            &followers,
        )
    }

    /// Run every query and collect the results.
    pub fn report(&self) -> AnalysisReport {
        let leaders = self.oriented_leaders();
        let leader_followers = self.followers_of(&leaders);
        let best_followers = self.best_followers();
        let roles = classify(
            self.index.nodes(),
            &leaders,
            &best_followers,
            &leader_followers,
        );

        let bfs_from_first_leader = match leaders.first() {
            Some(&first) => self.bfs_tree(first),
            None => BfsTree::empty(),
        };
        let path_between_leaders = match leaders.as_slice() {
            [] => Vec::new(),
            [only] => vec![*only],
            [first, second, ..] => self.shortest_path(*first, *second),
        };

        tracing::debug!(
            nodes = self.index.len(),
            edges = self.edges.len(),
            leaders = leaders.len(),
            "analysis complete"
        );

        AnalysisReport {
            num_nodes: self.index.len(),
            num_edges: self.edges.len(),
            undirected_leaders: self.undirected_leaders(),
            leaders,
            leader_followers,
            best_followers,
            bfs_from_first_leader,
            path_between_leaders,
            roles,
        }
    }
}

/// Results of every query over one graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    /// Distinct nodes.
    pub num_nodes: usize,
    /// Edges, counting duplicates.
    pub num_edges: usize,
    /// Oriented leaders (maximum in-degree).
    pub leaders: Vec<NodeId>,
    /// Followers of each oriented leader.
    pub leader_followers: BTreeMap<NodeId, Vec<NodeId>>,
    /// Maximum out-degree.
    pub best_followers: Vec<NodeId>,
    /// Maximum symmetrized neighbor count.
    pub undirected_leaders: Vec<NodeId>,
    /// BFS tree from the first leader.
    pub bfs_from_first_leader: BfsTree,
    /// Path from the first to the second leader.
    pub path_between_leaders: Vec<NodeId>,
    /// Role of each node.
    pub roles: BTreeMap<NodeId, NodeRole>,
}
