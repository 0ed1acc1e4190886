use std::time::{Duration, Instant};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ordered_float::OrderedFloat;
use weighted_paths::algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm};
use weighted_paths::graph::generators::generate_random_connected;
use weighted_paths::graph::{Graph, UndirectedGraph};

// Function to benchmark Dijkstra on a graph
fn benchmark_dijkstra(
    dijkstra: &Dijkstra,
    graph: &UndirectedGraph<usize, OrderedFloat<f64>>,
    source: usize,
) -> Result<(Duration, usize), weighted_paths::Error> {
    let start = Instant::now();
    let result = dijkstra.compute_shortest_paths(graph, source)?;
    let duration = start.elapsed();

    println!(
        "  - Settled {} vertices in {:?} ({} pushes, {} stale pops)",
        result.stats.settled, duration, result.stats.pushes, result.stats.stale_pops
    );

    Ok((duration, result.reachable_count()))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Define graph sizes to test
    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000, 200_000];

    // Edge factor: average number of edges per vertex
    let edge_factor = 2.0;

    println!("=====================================================");
    println!("Benchmark: Dijkstra on random connected graphs");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let checked = Dijkstra::new();
    let unchecked = Dijkstra::new().with_weight_validation(false);
    let mut rng = StdRng::seed_from_u64(42);
    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let extra_edges = ((edge_factor - 1.0) * size as f64) as usize;
        let graph = generate_random_connected(size, extra_edges, 100.0, &mut rng);
        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let (checked_time, reachable) = benchmark_dijkstra(&checked, &graph, 0)?;
        let (unchecked_time, _) = benchmark_dijkstra(&unchecked, &graph, 0)?;
        results.push((size, reachable, checked_time, unchecked_time));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<10} | {:<15} | {:<15}",
        "Vertices", "Reachable", "Validated (ms)", "Unchecked (ms)"
    );
    println!("-----------------------------------------------------");

    for (size, reachable, checked_time, unchecked_time) in &results {
        println!(
            "{:<10} | {:<10} | {:<15} | {:<15}",
            size,
            reachable,
            checked_time.as_millis(),
            unchecked_time.as_millis()
        );
    }

    Ok(())
}
