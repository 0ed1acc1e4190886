use log::warn;
use num_traits::Float;
use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::graph::Graph;
use crate::{Error, Result};

/// Best known distance from the source for every vertex; unreachable vertices map
/// to infinity rather than being absent.
pub type DistanceMap<V, W> = BTreeMap<V, W>;

/// Predecessor links of a shortest path tree rooted at `source`
///
/// Every vertex of the computation has an entry: the vertex preceding it on a
/// shortest path, or `None` for the source and for vertices that were never
/// relaxed.
#[derive(Debug, Clone, PartialEq)]
pub struct PredecessorMap<V>
where
    V: Ord + Clone + Debug,
{
    source: V,
    links: BTreeMap<V, Option<V>>,
}

impl<V> PredecessorMap<V>
where
    V: Ord + Clone + Debug,
{
    /// Creates a map holding only the source, which has no predecessor
    pub fn new(source: V) -> Self {
        let mut links = BTreeMap::new();
        links.insert(source.clone(), None);
        PredecessorMap { source, links }
    }

    /// Registers a vertex with no predecessor yet; existing links are kept
    pub fn register(&mut self, vertex: V) {
        self.links.entry(vertex).or_insert(None);
    }

    /// Sets the predecessor of `vertex`
    pub fn set(&mut self, vertex: V, predecessor: V) {
        self.links.insert(vertex, Some(predecessor));
    }

    /// The root of the tree
    pub fn source(&self) -> &V {
        &self.source
    }

    /// Returns the predecessor of `vertex`, `None` for the source, unrelaxed or unknown vertices
    pub fn predecessor(&self, vertex: &V) -> Option<&V> {
        self.links.get(vertex).and_then(|link| link.as_ref())
    }

    /// Returns true if the vertex has an entry in the map
    pub fn contains(&self, vertex: &V) -> bool {
        self.links.contains_key(vertex)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Iterates over `(vertex, predecessor)` in ascending vertex order
    pub fn iter(&self) -> impl Iterator<Item = (&V, Option<&V>)> + '_ {
        self.links.iter().map(|(vertex, link)| (vertex, link.as_ref()))
    }

    /// Walks predecessor links back from `target` and returns the path source → target.
    ///
    /// Returns [`Error::UnreachableTarget`] when `target` is not the source and has
    /// no predecessor, including when it is not in the map at all.
    pub fn path_to(&self, target: &V) -> Result<Vec<V>> {
        if *target != self.source && self.predecessor(target).is_none() {
            return Err(Error::UnreachableTarget(format!("{:?}", target)));
        }

        // Build path in reverse order
        let mut path = vec![target.clone()];
        let mut current = target;
        while *current != self.source {
            match self.predecessor(current) {
                Some(pred) => {
                    path.push(pred.clone());
                    current = pred;
                }
                None => {
                    warn!(
                        "predecessor chain from {:?} ends at {:?} before reaching the source",
                        target, current
                    );
                    return Err(Error::AlgorithmError(format!(
                        "broken predecessor chain at {:?}",
                        current
                    )));
                }
            }

            // A tree path never visits more vertices than the map holds
            if path.len() > self.links.len() {
                warn!("predecessor chain from {:?} contains a cycle", target);
                return Err(Error::AlgorithmError(format!(
                    "cycle in predecessor chain from {:?}",
                    target
                )));
            }
        }

        path.reverse();
        Ok(path)
    }
}

/// Reconstructs the shortest path from the source of `predecessors` to `target`
pub fn reconstruct_path<V>(predecessors: &PredecessorMap<V>, target: &V) -> Result<Vec<V>>
where
    V: Ord + Clone + Debug,
{
    predecessors.path_to(target)
}

/// Counters collected during one shortest path computation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Vertices whose distance was finalized
    pub settled: usize,
    /// Entries pushed onto the frontier, the initial source entry included
    pub pushes: usize,
    /// Popped entries discarded because their vertex was already settled
    pub stale_pops: usize,
    /// Edge relaxations that improved a tentative distance
    pub relaxations: usize,
}

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathResult<V, W>
where
    V: Ord + Clone + Debug,
    W: Float + Debug + Copy,
{
    /// Source vertex
    pub source: V,

    /// Distances from source to each vertex, infinity when unreachable
    pub distances: DistanceMap<V, W>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: PredecessorMap<V>,

    /// Work counters of the computation
    pub stats: SearchStats,
}

impl<V, W> ShortestPathResult<V, W>
where
    V: Ord + Clone + Debug,
    W: Float + Debug + Copy,
{
    /// Finite distance to `vertex`, `None` when unreachable or unknown
    pub fn distance(&self, vertex: &V) -> Option<W> {
        self.distances
            .get(vertex)
            .copied()
            .filter(|distance| distance.is_finite())
    }

    /// Returns true if `vertex` has a finite distance from the source
    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.distance(vertex).is_some()
    }

    /// Number of vertices with a finite distance, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.values().filter(|d| d.is_finite()).count()
    }

    /// Shortest path from the source to `target`
    pub fn path_to(&self, target: &V) -> Result<Vec<V>> {
        self.predecessors.path_to(target)
    }

    /// Sums the edge weights along `path` in `graph`
    pub fn path_cost<G: Graph<V, W>>(graph: &G, path: &[V]) -> Result<W> {
        path.windows(2)
            .try_fold(W::zero(), |total, step| -> Result<W> {
                Ok(total + graph.weight(&step[0], &step[1])?)
            })
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<V, W, G>
where
    V: Ord + Clone + Debug,
    W: Float + Debug + Copy,
    G: Graph<V, W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: V) -> Result<ShortestPathResult<V, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<V, W>, target: &V) -> Result<Vec<V>> {
        reconstruct_path(&result.predecessors, target)
    }
}
