pub mod traits;
pub mod undirected;
pub mod generators;
pub mod io;

pub use traits::{check_weight, Graph, MutableGraph};
pub use undirected::UndirectedGraph;
