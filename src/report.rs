use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};

use crate::algorithm::ShortestPathResult;

/// Distance and path for one vertex of a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexReport {
    pub vertex: String,
    /// `None` when the vertex is unreachable
    pub distance: Option<f64>,
    /// `None` when the vertex is unreachable
    pub path: Option<Vec<String>>,
}

/// Presentation of a shortest path result, one entry per vertex in ascending order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPathReport {
    pub algorithm: String,
    pub source: String,
    pub settled: usize,
    pub vertices: Vec<VertexReport>,
}

impl ShortestPathReport {
    /// Builds a report, rendering vertices with `Display`
    pub fn from_result<V, W>(algorithm: &str, result: &ShortestPathResult<V, W>) -> Self
    where
        V: Ord + Clone + Debug + Display,
        W: Float + Debug + Copy,
    {
        let vertices = result
            .distances
            .keys()
            .map(|vertex| {
                let distance = result.distance(vertex).and_then(|d| d.to_f64());
                let path = match distance {
                    Some(_) => result
                        .path_to(vertex)
                        .ok()
                        .map(|path| path.iter().map(|v| v.to_string()).collect()),
                    None => None,
                };
                VertexReport {
                    vertex: vertex.to_string(),
                    distance,
                    path,
                }
            })
            .collect();

        ShortestPathReport {
            algorithm: algorithm.to_string(),
            source: result.source.to_string(),
            settled: result.stats.settled,
            vertices,
        }
    }

    /// Entry for `vertex`, if it is part of the report
    pub fn entry(&self, vertex: &str) -> Option<&VertexReport> {
        self.vertices.iter().find(|entry| entry.vertex == vertex)
    }

    /// Serializes the report as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Display for ShortestPathReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Shortest distances from vertex {}:", self.source)?;
        for entry in &self.vertices {
            match (&entry.distance, &entry.path) {
                (Some(distance), Some(path)) => {
                    writeln!(f, "To {}: {}", entry.vertex, distance)?;
                    writeln!(f, "Path: {}", path.join(" -> "))?;
                }
                _ => {
                    writeln!(f, "To {}: unreachable", entry.vertex)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
