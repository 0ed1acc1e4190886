pub mod traits;
pub mod dijkstra;

pub use traits::{
    reconstruct_path, DistanceMap, PredecessorMap, SearchStats, ShortestPathAlgorithm,
    ShortestPathResult,
};
