//! Edge-list documents for building graphs from external data.
//!
//! ```json
//! { "edges": [ { "from": "A", "to": "B", "weight": 4.0 } ] }
//! ```

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::graph::{MutableGraph, UndirectedGraph};
use crate::Result;

/// A single undirected edge in a graph document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

/// A graph described as a list of undirected edges
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl GraphDocument {
    /// Builds the graph, rejecting the first edge with a negative or NaN weight
    pub fn into_graph(self) -> Result<UndirectedGraph<String, OrderedFloat<f64>>> {
        let mut graph = UndirectedGraph::new();
        for edge in self.edges {
            graph.add_edge(edge.from, edge.to, OrderedFloat(edge.weight))?;
        }
        Ok(graph)
    }

    /// Describes an existing graph, listing each undirected edge once
    pub fn from_graph(graph: &UndirectedGraph<String, OrderedFloat<f64>>) -> Self {
        let edges = graph
            .edges()
            .map(|(from, to, weight)| EdgeRecord {
                from: from.clone(),
                to: to.clone(),
                weight: weight.into_inner(),
            })
            .collect();
        GraphDocument { edges }
    }
}

/// Parses a graph from a JSON edge-list document
pub fn parse_graph(json: &str) -> Result<UndirectedGraph<String, OrderedFloat<f64>>> {
    let document: GraphDocument = serde_json::from_str(json)?;
    document.into_graph()
}

/// Reads a graph from any JSON source
pub fn read_graph<R: Read>(reader: R) -> Result<UndirectedGraph<String, OrderedFloat<f64>>> {
    let document: GraphDocument = serde_json::from_reader(reader)?;
    document.into_graph()
}

/// Loads a graph from a JSON file on disk
pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<UndirectedGraph<String, OrderedFloat<f64>>> {
    let file = File::open(path)?;
    read_graph(BufReader::new(file))
}
