//! Structural properties checked on seeded random graphs.

use rand::prelude::*;
use rand::rngs::StdRng;

use leadgraph::{AdjacencyMatrix, EdgeSet, GraphAnalyzer, GraphIndex, NodeId};

const SEED: u64 = 0x5eed_1ead;
const ROUNDS: usize = 200;

/// Random edge list over a handful of sparse IDs, duplicates and loops included.
fn random_edges(rng: &mut StdRng) -> EdgeSet {
    let pool: Vec<i64> = (0..rng.gen_range(1..=7))
        .map(|_| rng.gen_range(-50..50))
        .collect();
    let count = rng.gen_range(0..=14);
    EdgeSet::from_pairs((0..count).map(|_| {
        let src = *pool.choose(&mut *rng).unwrap_or(&0);
        let dst = *pool.choose(&mut *rng).unwrap_or(&0);
        (src, dst)
    }))
}

/// Length in edges of the shortest simple path, by exhaustive DFS.
fn brute_force_distance(adj: &AdjacencyMatrix, src: usize, dst: usize) -> Option<usize> {
    fn walk(
        adj: &AdjacencyMatrix,
        at: usize,
        dst: usize,
        depth: usize,
        on_path: &mut Vec<bool>,
        best: &mut Option<usize>,
    ) {
        if at == dst {
            *best = Some(best.map_or(depth, |b| b.min(depth)));
            return;
        }
        for next in adj.out_neighbors(at) {
            if !on_path[next] {
                on_path[next] = true;
                walk(adj, next, dst, depth + 1, on_path, best);
                on_path[next] = false;
            }
        }
    }

    let mut on_path = vec![false; adj.size()];
    on_path[src] = true;
    let mut best = None;
    walk(adj, src, dst, 0, &mut on_path, &mut best);
    best
}

#[test]
fn test_index_is_bijection() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..ROUNDS {
        let edges = random_edges(&mut rng);
        let index = GraphIndex::from_edges(&edges);

        assert_eq!(index.len(), edges.node_ids().len());
        for edge in &edges {
            for node in [edge.src, edge.dst] {
                let i = index.index_of(node).unwrap();
                assert_eq!(index.node_at(i).unwrap(), node);
            }
        }
        assert!(index.nodes().windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn test_matrix_is_square_and_faithful() {
    let mut rng = StdRng::seed_from_u64(SEED + 1);
    for _ in 0..ROUNDS {
        let edges = random_edges(&mut rng);
        let analyzer = GraphAnalyzer::new(edges.clone()).unwrap();
        let (index, adj) = (analyzer.index(), analyzer.matrix());

        assert_eq!(adj.size(), index.len());
        assert_eq!(adj.rows().count(), index.len());
        assert!(adj.rows().all(|row| row.len() == index.len()));

        for i in 0..adj.size() {
            for j in 0..adj.size() {
                let (a, b) = (index.node_at(i).unwrap(), index.node_at(j).unwrap());
                let present = edges.iter().any(|e| e.src == a && e.dst == b);
                assert_eq!(adj.has_edge(i, j), present);
            }
        }
    }
}

#[test]
fn test_degree_sums_equal_edge_count() {
    let mut rng = StdRng::seed_from_u64(SEED + 2);
    for _ in 0..ROUNDS {
        let edges = random_edges(&mut rng);
        let analyzer = GraphAnalyzer::new(edges.clone()).unwrap();
        let table = analyzer.degrees();

        assert_eq!(table.in_degree.values().sum::<usize>(), edges.len());
        assert_eq!(table.out_degree.values().sum::<usize>(), edges.len());
        assert_eq!(table.in_degree.len(), analyzer.index().len());
    }
}

#[test]
fn test_rebuild_is_identical() {
    let mut rng = StdRng::seed_from_u64(SEED + 3);
    for _ in 0..ROUNDS {
        let edges = random_edges(&mut rng);
        let first = GraphAnalyzer::new(edges.clone()).unwrap();
        let second = GraphAnalyzer::new(edges).unwrap();

        assert_eq!(first.index(), second.index());
        assert_eq!(first.matrix(), second.matrix());
    }
}

#[test]
fn test_bfs_tree_parents_are_closer() {
    let mut rng = StdRng::seed_from_u64(SEED + 4);
    for _ in 0..ROUNDS {
        let analyzer = GraphAnalyzer::new(random_edges(&mut rng)).unwrap();
        let (index, adj) = (analyzer.index(), analyzer.matrix());

        for (s, &source) in index.nodes().iter().enumerate() {
            let tree = analyzer.bfs_tree(source);
            assert_eq!(tree.parent(source), Some(None));

            // Tree covers exactly the nodes reachable in the matrix.
            for (j, &node) in index.nodes().iter().enumerate() {
                let reachable = brute_force_distance(adj, s, j).is_some();
                assert_eq!(tree.contains(node), reachable, "{source} -> {node}");
            }

            for (&node, &parent) in tree.parents() {
                if node == source {
                    continue;
                }
                let parent = parent.expect("non-source node has a parent");
                let p = index.index_of(parent).unwrap();
                let n = index.index_of(node).unwrap();

                assert!(adj.has_edge(p, n), "{parent} -> {node} is not an edge");
                let parent_hops = brute_force_distance(adj, s, p).unwrap();
                let node_hops = brute_force_distance(adj, s, n).unwrap();
                assert_eq!(parent_hops + 1, node_hops, "{source}: {parent} -> {node}");
            }
        }
    }
}

#[test]
fn test_shortest_path_is_minimal() {
    let mut rng = StdRng::seed_from_u64(SEED + 5);
    for _ in 0..ROUNDS {
        let analyzer = GraphAnalyzer::new(random_edges(&mut rng)).unwrap();
        let (index, adj) = (analyzer.index(), analyzer.matrix());

        for (i, &src) in index.nodes().iter().enumerate() {
            for (j, &dst) in index.nodes().iter().enumerate() {
                let path = analyzer.shortest_path(src, dst);
                match brute_force_distance(adj, i, j) {
                    None => assert!(path.is_empty(), "{src} -> {dst} should be unreachable"),
                    Some(distance) => {
                        assert_eq!(path.len() - 1, distance, "{src} -> {dst}");
                        assert_eq!(path.first(), Some(&src));
                        assert_eq!(path.last(), Some(&dst));
                        for hop in path.windows(2) {
                            let a = index.index_of(hop[0]).unwrap();
                            let b = index.index_of(hop[1]).unwrap();
                            assert!(adj.has_edge(a, b));
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn test_unknown_nodes_are_soft() {
    let mut rng = StdRng::seed_from_u64(SEED + 6);
    for _ in 0..ROUNDS {
        let analyzer = GraphAnalyzer::new(random_edges(&mut rng)).unwrap();
        // Pool values are in -50..50, so 500 never appears.
        let outsider = NodeId(500);

        assert!(analyzer.bfs_tree(outsider).is_empty());
        for &node in analyzer.index().nodes() {
            assert!(analyzer.shortest_path(outsider, node).is_empty());
            assert!(analyzer.shortest_path(node, outsider).is_empty());
        }
    }
}
