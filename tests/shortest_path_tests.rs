use num_traits::Float;
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use weighted_paths::algorithm::dijkstra::Dijkstra;
use weighted_paths::algorithm::{reconstruct_path, ShortestPathAlgorithm, ShortestPathResult};
use weighted_paths::graph::generators::{generate_grid, generate_random_connected};
use weighted_paths::graph::{Graph, MutableGraph, UndirectedGraph};
use weighted_paths::{Error, Result};

type W = OrderedFloat<f64>;

// The graph from the worked example: A-B 4, A-C 2, B-C 1, B-D 5, C-D 8, C-E 10, D-E 2
fn example_graph() -> UndirectedGraph<&'static str, W> {
    UndirectedGraph::from_edges(vec![
        ("A", "B", OrderedFloat(4.0)),
        ("A", "C", OrderedFloat(2.0)),
        ("B", "C", OrderedFloat(1.0)),
        ("B", "D", OrderedFloat(5.0)),
        ("C", "D", OrderedFloat(8.0)),
        ("C", "E", OrderedFloat(10.0)),
        ("D", "E", OrderedFloat(2.0)),
    ])
    .unwrap()
}

// Relaxes every edge until nothing changes; slow but obviously correct
fn reference_distances(graph: &UndirectedGraph<usize, W>, source: usize) -> BTreeMap<usize, W> {
    let mut dist: BTreeMap<usize, W> = graph
        .vertices()
        .into_iter()
        .map(|v| (v, OrderedFloat(f64::INFINITY)))
        .collect();
    dist.insert(source, OrderedFloat(0.0));

    loop {
        let mut changed = false;
        for (u, v, w) in graph.edges() {
            for (a, b) in [(*u, *v), (*v, *u)] {
                let candidate = dist[&a] + w;
                if candidate < dist[&b] {
                    dist.insert(b, candidate);
                    changed = true;
                }
            }
        }
        if !changed {
            return dist;
        }
    }
}

fn assert_shortest_path_tree(
    graph: &UndirectedGraph<usize, W>,
    result: &ShortestPathResult<usize, W>,
) {
    let source = result.source;
    assert_eq!(result.distances[&source], OrderedFloat(0.0));
    assert_eq!(*result.predecessors.source(), source);
    assert!(!result.predecessors.is_empty());
    assert_eq!(result.predecessors.len(), result.distances.len());

    // Every tree link points at a vertex that was reached first
    for (vertex, pred) in result.predecessors.iter() {
        assert!(result.distances.contains_key(vertex));
        if let Some(pred) = pred {
            assert!(result.distances[pred] <= result.distances[vertex]);
            assert!(
                graph.has_edge(pred, vertex),
                "tree link {} -> {} is not an edge",
                pred,
                vertex
            );
        }
    }

    for (&v, &dist_v) in &result.distances {
        if v == source {
            assert!(result.predecessors.predecessor(&v).is_none());
            continue;
        }
        match result.predecessors.predecessor(&v) {
            Some(&pred) => {
                let weight = graph.weight(&pred, &v).unwrap();
                assert_eq!(dist_v, result.distances[&pred] + weight, "tree edge {} -> {}", pred, v);
            }
            None => assert!(dist_v.is_infinite(), "vertex {} has a distance but no predecessor", v),
        }
    }

    // Triangle inequality over every edge, in both directions
    for (u, v, w) in graph.edges() {
        assert!(result.distances[v] <= result.distances[u] + w);
        assert!(result.distances[u] <= result.distances[v] + w);
    }
}

// Test the worked example distances
#[test]
fn test_example_distances() {
    let graph = example_graph();
    let result = Dijkstra::new().compute_shortest_paths(&graph, "A").unwrap();

    let expected = [("A", 0.0), ("B", 3.0), ("C", 2.0), ("D", 8.0), ("E", 10.0)];
    for (vertex, distance) in expected {
        let found = result.distance(&vertex);
        assert_eq!(found, Some(OrderedFloat(distance)), "distance to {}", vertex);
    }
    assert_eq!(result.distances.len(), 5);
}

// Test the worked example path and its cost
#[test]
fn test_example_path_to_e() {
    let graph = example_graph();
    let result = Dijkstra::new().compute_shortest_paths(&graph, "A").unwrap();

    let path = reconstruct_path(&result.predecessors, &"E").unwrap();
    assert_eq!(path, vec!["A", "C", "B", "D", "E"]);

    let cost = ShortestPathResult::path_cost(&graph, &path).unwrap();
    assert_eq!(Some(cost), result.distance(&"E"));
}

#[test]
fn test_example_stats() {
    let graph = example_graph();
    let result = Dijkstra::new().compute_shortest_paths(&graph, "A").unwrap();

    assert_eq!(result.stats.settled, 5);
    assert_eq!(result.stats.pushes, 8);
    assert_eq!(result.stats.stale_pops, 3);
    assert_eq!(result.stats.relaxations, 7);
    assert!(result.stats.pushes <= graph.edge_count() + 1);
}

#[test]
fn test_get_path_matches_reconstruct_path() {
    let graph = example_graph();
    let dijkstra = Dijkstra::new();
    let result = dijkstra.compute_shortest_paths(&graph, "A").unwrap();

    let path = <Dijkstra as ShortestPathAlgorithm<&str, W, UndirectedGraph<&str, W>>>::get_path(
        &dijkstra, &result, &"D",
    )
    .unwrap();
    assert_eq!(path, vec!["A", "C", "B", "D"]);
    assert_eq!(path, result.path_to(&"D").unwrap());
}

#[test]
fn test_path_to_source_is_single_vertex() {
    let graph = example_graph();
    let result = Dijkstra::new().compute_shortest_paths(&graph, "C").unwrap();

    assert_eq!(result.path_to(&"C").unwrap(), vec!["C"]);
}

// Test a source that has no edges at all
#[test]
fn test_isolated_source() {
    let graph: UndirectedGraph<&str, W> = UndirectedGraph::new();
    let result = Dijkstra::new().compute_shortest_paths(&graph, "Z").unwrap();

    assert_eq!(result.distances.len(), 1);
    assert_eq!(result.distances[&"Z"], OrderedFloat(0.0));
    assert_eq!(result.path_to(&"Z").unwrap(), vec!["Z"]);
    assert_eq!(result.stats.settled, 1);
}

#[test]
fn test_isolated_source_in_nonempty_graph() {
    let graph = example_graph();
    let result = Dijkstra::new().compute_shortest_paths(&graph, "Z").unwrap();

    assert_eq!(result.distance(&"Z"), Some(OrderedFloat(0.0)));
    assert_eq!(result.reachable_count(), 1);
    assert!(result.distances[&"A"].is_infinite());
    assert!(matches!(result.path_to(&"A"), Err(Error::UnreachableTarget(_))));
}

// Test two components: {A, B} and {X, Y}
#[test]
fn test_disconnected_components() {
    let graph = UndirectedGraph::from_edges(vec![
        ("A", "B", OrderedFloat(1.0)),
        ("X", "Y", OrderedFloat(1.0)),
    ])
    .unwrap();
    let result = Dijkstra::new().compute_shortest_paths(&graph, "A").unwrap();

    assert_eq!(result.distance(&"B"), Some(OrderedFloat(1.0)));
    for unreachable in ["X", "Y"] {
        assert!(result.distances[&unreachable].is_infinite());
        assert!(!result.is_reachable(&unreachable));
        assert!(result.predecessors.contains(&unreachable));
        assert!(result.predecessors.predecessor(&unreachable).is_none());
    }

    let err = reconstruct_path(&result.predecessors, &"X").unwrap_err();
    assert!(matches!(err, Error::UnreachableTarget(ref v) if v.contains('X')));
}

#[test]
fn test_unknown_target_is_unreachable() {
    let graph = example_graph();
    let result = Dijkstra::new().compute_shortest_paths(&graph, "A").unwrap();

    assert!(matches!(result.path_to(&"Q"), Err(Error::UnreachableTarget(_))));
    assert_eq!(result.distance(&"Q"), None);
}

// Test that equal-cost alternatives resolve the same way every time
#[test]
fn test_ties_are_deterministic() {
    let graph = UndirectedGraph::from_edges(vec![
        ("A", "C", OrderedFloat(1.0)),
        ("A", "B", OrderedFloat(1.0)),
        ("C", "D", OrderedFloat(1.0)),
        ("B", "D", OrderedFloat(1.0)),
    ])
    .unwrap();

    let dijkstra = Dijkstra::new();
    let first = dijkstra.compute_shortest_paths(&graph, "A").unwrap();
    assert_eq!(first.predecessors.predecessor(&"D"), Some(&"B"));
    assert_eq!(first.path_to(&"D").unwrap(), vec!["A", "B", "D"]);

    for _ in 0..5 {
        let again = dijkstra.compute_shortest_paths(&graph, "A").unwrap();
        assert_eq!(again.distances, first.distances);
        assert_eq!(again.predecessors, first.predecessors);
    }
}

#[test]
fn test_zero_weight_edges() {
    let graph = UndirectedGraph::from_edges(vec![
        ("A", "B", OrderedFloat(0.0)),
        ("B", "C", OrderedFloat(0.0)),
        ("A", "C", OrderedFloat(1.0)),
    ])
    .unwrap();
    let result = Dijkstra::new().compute_shortest_paths(&graph, "A").unwrap();

    assert_eq!(result.distance(&"C"), Some(OrderedFloat(0.0)));
    assert_eq!(result.path_to(&"C").unwrap(), vec!["A", "B", "C"]);
}

#[test]
fn test_self_loop_is_ignored() {
    let graph = UndirectedGraph::from_edges(vec![
        ("A", "A", OrderedFloat(3.0)),
        ("A", "B", OrderedFloat(2.0)),
    ])
    .unwrap();
    let result = Dijkstra::new().compute_shortest_paths(&graph, "A").unwrap();

    assert_eq!(result.distance(&"A"), Some(OrderedFloat(0.0)));
    assert_eq!(result.distance(&"B"), Some(OrderedFloat(2.0)));
    assert_eq!(result.stats.settled, 2);
}

// Test that an infinite weight never makes its endpoint reachable
#[test]
fn test_infinite_weight_edge_leaves_target_unreachable() {
    let graph = UndirectedGraph::from_edges(vec![("A", "B", OrderedFloat(f64::INFINITY))]).unwrap();
    let result = Dijkstra::new().compute_shortest_paths(&graph, "A").unwrap();

    assert!(result.distances[&"B"].is_infinite());
    assert!(result.predecessors.predecessor(&"B").is_none());
    assert!(matches!(result.path_to(&"B"), Err(Error::UnreachableTarget(_))));
    assert_eq!(result.reachable_count(), 1);
}

#[test]
fn test_source_self_loop_path() {
    let graph = UndirectedGraph::from_edges(vec![("A", "A", OrderedFloat(1.0))]).unwrap();
    let result = Dijkstra::new().compute_shortest_paths(&graph, "A").unwrap();

    assert_eq!(result.path_to(&"A").unwrap(), vec!["A"]);
    assert_eq!(result.predecessors.len(), 1);
}

// Test the overwritten weight is the one the solver sees
#[test]
fn test_reinserted_edge_uses_latest_weight() {
    let mut graph = example_graph();
    graph.add_edge("E", "C", OrderedFloat(1.0)).unwrap();
    let result = Dijkstra::new().compute_shortest_paths(&graph, "A").unwrap();

    assert_eq!(result.distance(&"E"), Some(OrderedFloat(3.0)));
    assert_eq!(result.path_to(&"E").unwrap(), vec!["A", "C", "E"]);
}

// Test path finding on a grid, where many equal-cost paths exist
#[test]
fn test_grid_distances() {
    let graph = generate_grid(10, 10);
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    // Manhattan distance with unit weights
    for y in 0..10 {
        for x in 0..10 {
            let vertex = y * 10 + x;
            assert_eq!(result.distance(&vertex), Some(OrderedFloat((x + y) as f64)));
        }
    }

    let path = result.path_to(&99).unwrap();
    assert_eq!(path.len(), 19);
    assert_eq!(path[0], 0, "Path should start at source");
    assert_eq!(path[path.len() - 1], 99, "Path should end at target");
    for step in path.windows(2) {
        assert!(graph.has_edge(&step[0], &step[1]), "Path should only use existing edges");
    }
    assert_shortest_path_tree(&graph, &result);
}

// Test against exhaustive relaxation on seeded random graphs
#[test]
fn test_random_graphs_match_reference() {
    let mut rng = StdRng::seed_from_u64(2024);
    let dijkstra = Dijkstra::new();

    for round in 0..20 {
        let n = rng.gen_range(2..60);
        let mut graph = generate_random_connected(n, n * 2, 50.0, &mut rng);

        // A separate component that must stay unreachable
        graph.add_edge(1_000, 1_001, OrderedFloat(1.0)).unwrap();

        let source = rng.gen_range(0..n);
        let result = dijkstra.compute_shortest_paths(&graph, source).unwrap();

        assert_eq!(result.distances, reference_distances(&graph, source), "round {}", round);
        assert_eq!(result.reachable_count(), n);
        assert!(result.stats.pushes <= graph.edge_count() + 1);
        assert_eq!(result.stats.settled, n);
        assert!(result.path_to(&1_000).is_err());
        assert_shortest_path_tree(&graph, &result);

        for target in 0..n {
            let path = result.path_to(&target).unwrap();
            assert_eq!(path[0], source);
            assert_eq!(*path.last().unwrap(), target);
            let cost = ShortestPathResult::path_cost(&graph, &path).unwrap();
            assert!((cost.into_inner() - result.distances[&target].into_inner()).abs() < 1e-9);
        }
    }
}

#[test]
fn test_compute_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(99);
    let graph = generate_random_connected(200, 600, 10.0, &mut rng);
    let dijkstra = Dijkstra::new();

    let first = dijkstra.compute_shortest_paths(&graph, 17).unwrap();
    let second = dijkstra.compute_shortest_paths(&graph, 17).unwrap();

    assert_eq!(first.distances, second.distances);
    assert_eq!(first.predecessors, second.predecessors);
    assert_eq!(first.stats, second.stats);
}

/// Graph that stores whatever it is given, negative weights included
#[derive(Debug)]
struct UncheckedGraph {
    adjacency: BTreeMap<u32, Vec<(u32, W)>>,
}

impl UncheckedGraph {
    fn new(edges: &[(u32, u32, f64)]) -> Self {
        let mut adjacency: BTreeMap<u32, Vec<(u32, W)>> = BTreeMap::new();
        for &(u, v, w) in edges {
            adjacency.entry(u).or_default().push((v, OrderedFloat(w)));
            adjacency.entry(v).or_default().push((u, OrderedFloat(w)));
        }
        UncheckedGraph { adjacency }
    }
}

impl Graph<u32, W> for UncheckedGraph {
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(|edges| edges.len()).sum::<usize>() / 2
    }

    fn vertices(&self) -> Vec<u32> {
        self.adjacency.keys().copied().collect()
    }

    fn neighbor_edges(&self, vertex: &u32) -> Box<dyn Iterator<Item = (u32, W)> + '_> {
        match self.adjacency.get(vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn has_vertex(&self, vertex: &u32) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn has_edge(&self, u: &u32, v: &u32) -> bool {
        self.neighbor_edges(u).any(|(n, _)| n == *v)
    }

    fn weight(&self, u: &u32, v: &u32) -> Result<W> {
        self.neighbor_edges(u)
            .find(|(n, _)| n == v)
            .map(|(_, w)| w)
            .ok_or_else(|| Error::EdgeNotFound {
                from: u.to_string(),
                to: v.to_string(),
            })
    }
}

// Test that negative weights are caught before running
#[test]
fn test_negative_weight_rejected_at_compute_time() {
    let graph = UncheckedGraph::new(&[(0, 1, 2.0), (1, 2, -5.0), (0, 2, 1.0)]);
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0);

    assert!(matches!(result, Err(Error::InvalidWeight { weight, .. }) if weight == -5.0));
}

// Test that skipping validation still terminates on a bad graph
#[test]
fn test_negative_weight_without_validation_terminates() {
    let graph = UncheckedGraph::new(&[(0, 1, 2.0), (1, 2, -5.0), (0, 2, 1.0)]);
    let result = Dijkstra::new()
        .with_weight_validation(false)
        .compute_shortest_paths(&graph, 0)
        .unwrap();

    assert_eq!(result.stats.settled, 3);
    assert!(result.stats.pushes <= graph.edge_count() + 1);
}
