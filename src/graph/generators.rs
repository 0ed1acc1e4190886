use crate::graph::{MutableGraph, UndirectedGraph};
use ordered_float::OrderedFloat;
use rand::prelude::*;

/// Generates a connected random graph on vertices `0..n`.
///
/// A random spanning tree guarantees connectivity; `extra_edges` further edges are
/// then added between random distinct vertices. Weights are drawn from
/// `1.0..max_weight`. The same `rng` state always yields the same graph.
pub fn generate_random_connected<R: Rng>(
    n: usize,
    extra_edges: usize,
    max_weight: f64,
    rng: &mut R,
) -> UndirectedGraph<usize, OrderedFloat<f64>> {
    assert!(max_weight > 1.0, "max_weight must be greater than 1.0");
    assert!(max_weight.is_finite(), "max_weight must be finite");

    let mut graph = UndirectedGraph::new();

    // Attach each new vertex to a random earlier one
    for v in 1..n {
        let parent = rng.gen_range(0..v);
        let weight = OrderedFloat(rng.gen_range(1.0..max_weight));
        graph.add_edge(parent, v, weight).expect("positive weight");
    }

    if n > 1 {
        for _ in 0..extra_edges {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            if u != v {
                let weight = OrderedFloat(rng.gen_range(1.0..max_weight));
                graph.add_edge(u, v, weight).expect("positive weight");
            }
        }
    }

    graph
}

/// Generates a `width` x `height` grid with 4-connectivity and unit weights.
/// Vertex ids are `y * width + x`.
pub fn generate_grid(width: usize, height: usize) -> UndirectedGraph<usize, OrderedFloat<f64>> {
    let mut graph = UndirectedGraph::new();

    for y in 0..height {
        for x in 0..width {
            let current = y * width + x;
            if x + 1 < width {
                graph
                    .add_edge(current, current + 1, OrderedFloat(1.0))
                    .expect("positive weight");
            }
            if y + 1 < height {
                graph
                    .add_edge(current, current + width, OrderedFloat(1.0))
                    .expect("positive weight");
            }
        }
    }

    graph
}
