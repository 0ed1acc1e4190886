use std::collections::BTreeSet;
use std::fmt::Debug;
use log::{debug, trace};
use num_traits::Float;

use crate::algorithm::{
    DistanceMap, PredecessorMap, SearchStats, ShortestPathAlgorithm, ShortestPathResult,
};
use crate::data_structures::Frontier;
use crate::graph::{check_weight, Graph};
use crate::Result;

/// Classic Dijkstra's algorithm implementation
///
/// Uses a binary-heap frontier with lazy deletion: an improved tentative distance
/// is pushed as a new entry and outdated entries are skipped when popped.
#[derive(Debug, Clone)]
pub struct Dijkstra {
    /// Whether to scan the graph for negative or NaN weights before running
    validate_weights: bool,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra {
            validate_weights: true,
        }
    }

    /// Enable or disable the weight scan done before each computation.
    ///
    /// Graphs built through [`crate::UndirectedGraph`] are validated on insertion,
    /// so the scan can be skipped for them.
    pub fn with_weight_validation(mut self, validate: bool) -> Self {
        self.validate_weights = validate;
        self
    }

    fn validate<V, W, G>(graph: &G) -> Result<()>
    where
        V: Ord + Clone + Debug,
        W: Float + Debug + Copy,
        G: Graph<V, W>,
    {
        for u in graph.vertices() {
            for (v, weight) in graph.neighbor_edges(&u) {
                check_weight(&u, &v, weight)?;
            }
        }
        Ok(())
    }
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W, G> ShortestPathAlgorithm<V, W, G> for Dijkstra
where
    V: Ord + Clone + Debug,
    W: Float + Debug + Copy + Ord,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: V) -> Result<ShortestPathResult<V, W>> {
        if self.validate_weights {
            Self::validate::<V, W, G>(graph)?;
        }

        // Every vertex starts unreached; the source may have no edges at all
        let mut distances: DistanceMap<V, W> = DistanceMap::new();
        let mut predecessors = PredecessorMap::new(source.clone());
        for vertex in graph.vertices() {
            distances.insert(vertex.clone(), W::infinity());
            predecessors.register(vertex);
        }
        distances.insert(source.clone(), W::zero());

        let mut stats = SearchStats::default();
        let mut visited: BTreeSet<V> = BTreeSet::new();
        let mut frontier = Frontier::new();
        frontier.push(source.clone(), W::zero());
        stats.pushes += 1;

        // Main Dijkstra loop
        while let Some((u, dist_u)) = frontier.pop() {
            // A cheaper entry for u was already settled
            if visited.contains(&u) {
                stats.stale_pops += 1;
                continue;
            }
            visited.insert(u.clone());
            stats.settled += 1;
            trace!("settled {:?} at {:?}", u, dist_u);

            for (v, weight) in graph.neighbor_edges(&u) {
                if visited.contains(&v) {
                    continue;
                }

                let candidate = dist_u + weight;
                let improves = distances.get(&v).map_or(true, |current| candidate < *current);

                if improves {
                    trace!("relaxed {:?} to {:?} via {:?}", v, candidate, u);
                    distances.insert(v.clone(), candidate);
                    predecessors.set(v.clone(), u.clone());
                    frontier.push(v, candidate);
                    stats.relaxations += 1;
                    stats.pushes += 1;
                }
            }
        }

        debug!(
            "dijkstra from {:?}: {} of {} vertices settled, {} pushes, {} stale pops",
            source,
            stats.settled,
            distances.len(),
            stats.pushes,
            stats.stale_pops
        );

        Ok(ShortestPathResult {
            source,
            distances,
            predecessors,
            stats,
        })
    }
}
