//! Fuzz target for graph construction and queries.
//!
//! Builds a graph from arbitrary edges and checks the structural
//! invariants of the index, matrix, degree table and BFS results.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use leadgraph::{EdgeSet, GraphAnalyzer, NodeId};

/// Fuzz input: edge list plus a query pair.
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    /// Edges as raw endpoints.
    edges: Vec<(i16, i16)>,
    /// Source for BFS and path queries.
    from: i16,
    /// Target for the path query.
    to: i16,
}

fuzz_target!(|input: FuzzInput| {
    // Dense matrix is quadratic in node count
    if input.edges.len() > 256 {
        return;
    }

    let edges = EdgeSet::from_pairs(
        input
            .edges
            .iter()
            .map(|&(s, d)| (i64::from(s), i64::from(d))),
    );
    let analyzer = match GraphAnalyzer::new(edges.clone()) {
        Ok(a) => a,
        Err(e) => panic!("construction from a single edge set failed: {e}"),
    };
    let index = analyzer.index();

    // Index is a sorted bijection
    assert_eq!(analyzer.matrix().size(), index.len());
    for (i, &node) in index.nodes().iter().enumerate() {
        assert_eq!(index.index_of(node), Ok(i));
    }

    // Degree sums match edge count
    let table = analyzer.degrees();
    assert_eq!(table.in_degree.values().sum::<usize>(), edges.len());
    assert_eq!(table.out_degree.values().sum::<usize>(), edges.len());

    // Leaders exist iff nodes exist
    assert_eq!(analyzer.oriented_leaders().is_empty(), index.is_empty());
    assert_eq!(analyzer.undirected_leaders().is_empty(), index.is_empty());

    let from = NodeId(i64::from(input.from));
    let to = NodeId(i64::from(input.to));

    let tree = analyzer.bfs_tree(from);
    assert_eq!(tree.is_empty(), !index.contains(from));

    // Path endpoints and hops follow matrix edges
    let path = analyzer.shortest_path(from, to);
    if !path.is_empty() {
        assert_eq!(path.first(), Some(&from));
        assert_eq!(path.last(), Some(&to));
        assert_eq!(path.len() - 1, tree.depth(to).unwrap_or(usize::MAX));
        for hop in path.windows(2) {
            let (Ok(a), Ok(b)) = (index.index_of(hop[0]), index.index_of(hop[1])) else {
                panic!("path node missing from index");
            };
            assert!(analyzer.matrix().has_edge(a, b));
        }
    }
});
