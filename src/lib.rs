//! Weighted Paths - Single-Source Shortest Paths on Undirected Graphs
//!
//! This library computes shortest distances and a predecessor tree from one source
//! vertex over a weighted undirected graph with non-negative edge weights, using
//! Dijkstra's greedy label-setting algorithm with a binary-heap frontier.
//!
//! Paths are reconstructed from the predecessor tree; a target with no finite
//! distance is reported as [`Error::UnreachableTarget`] rather than as a
//! degenerate one-vertex path.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod report;

pub use algorithm::{
    dijkstra::Dijkstra, reconstruct_path, DistanceMap, PredecessorMap, SearchStats,
    ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::undirected::UndirectedGraph;
pub use report::ShortestPathReport;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid weight {weight} on edge {from} - {to}: weights must be non-negative numbers")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("Edge not found: {from} - {to}")]
    EdgeNotFound { from: String, to: String },

    #[error("Target vertex {0} is unreachable from the source")]
    UnreachableTarget(String),

    #[error("Algorithm execution error: {0}")]
    AlgorithmError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid graph document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
