use log::{error, info};
use ordered_float::OrderedFloat;
use std::env;
use std::process;
use weighted_paths::graph::io::load_graph;
use weighted_paths::graph::{Graph, MutableGraph};
use weighted_paths::{Dijkstra, ShortestPathAlgorithm, ShortestPathReport, UndirectedGraph};

/// Command line configuration
#[derive(Debug, Clone)]
struct CliConfig {
    /// JSON edge-list document; the demo graph is used when absent
    graph_file: Option<String>,
    source: String,
    json: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            graph_file: None,
            source: "A".to_string(),
            json: false,
        }
    }
}

impl CliConfig {
    /// Parses `[GRAPH_FILE [SOURCE]] [--json]`
    fn from_args<I: Iterator<Item = String>>(args: I) -> Self {
        let mut config = CliConfig::default();
        let mut positional = Vec::new();
        for arg in args {
            if arg == "--json" {
                config.json = true;
            } else {
                positional.push(arg);
            }
        }

        let mut positional = positional.into_iter();
        config.graph_file = positional.next();
        if let Some(source) = positional.next() {
            config.source = source;
        }
        config
    }
}

fn demo_graph() -> weighted_paths::Result<UndirectedGraph<String, OrderedFloat<f64>>> {
    let mut graph = UndirectedGraph::new();
    let edges = [
        ("A", "B", 4.0),
        ("A", "C", 2.0),
        ("B", "C", 1.0),
        ("B", "D", 5.0),
        ("C", "D", 8.0),
        ("C", "E", 10.0),
        ("D", "E", 2.0),
    ];
    for (u, v, weight) in edges {
        graph.add_edge(u.to_string(), v.to_string(), OrderedFloat(weight))?;
    }
    Ok(graph)
}

fn run(config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    let graph = match &config.graph_file {
        Some(path) => {
            info!("loading graph from {}", path);
            load_graph(path)?
        }
        None => {
            info!("no graph file given, using the demo graph");
            demo_graph()?
        }
    };
    info!(
        "graph has {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    // Insertion already rejected invalid weights
    let dijkstra = Dijkstra::new().with_weight_validation(false);
    let result = dijkstra.compute_shortest_paths(&graph, config.source.clone())?;
    let name = <Dijkstra as ShortestPathAlgorithm<
        String,
        OrderedFloat<f64>,
        UndirectedGraph<String, OrderedFloat<f64>>,
    >>::name(&dijkstra);
    let report = ShortestPathReport::from_result(name, &result);

    if config.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report);
    }

    Ok(())
}

fn main() {
    // Initialize logging
    env_logger::init();

    let config = CliConfig::from_args(env::args().skip(1));
    if let Err(err) = run(&config) {
        error!("{}", err);
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
