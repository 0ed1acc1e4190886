use crate::graph::traits::{check_weight, Graph, MutableGraph};
use crate::{Error, Result};
use log::debug;
use num_traits::Float;
use std::collections::BTreeMap;
use std::fmt::Debug;

/// An undirected weighted graph implementation using ordered adjacency maps
///
/// Every edge is stored under both endpoints with the same weight, so
/// `weight(u, v) == weight(v, u)` always holds. Vertices exist implicitly: a
/// vertex is part of the graph once it appears in an edge.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<V, W>
where
    V: Ord + Clone + Debug,
    W: Float + Debug + Copy,
{
    /// Adjacency for each vertex: vertex -> {neighbor -> weight}
    adjacency: BTreeMap<V, BTreeMap<V, W>>,

    /// Number of distinct undirected edges (a self-loop counts once)
    edge_count: usize,
}

impl<V, W> UndirectedGraph<V, W>
where
    V: Ord + Clone + Debug,
    W: Float + Debug + Copy,
{
    /// Creates a new empty undirected graph
    pub fn new() -> Self {
        UndirectedGraph {
            adjacency: BTreeMap::new(),
            edge_count: 0,
        }
    }

    /// Builds a graph from `(u, v, weight)` triples, stopping at the first invalid weight
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (V, V, W)>,
    {
        let mut graph = UndirectedGraph::new();
        for (u, v, weight) in edges {
            graph.add_edge(u, v, weight)?;
        }
        Ok(graph)
    }

    /// Returns an iterator over every undirected edge once, as `(u, v, weight)` with `u <= v`
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V, W)> + '_ {
        self.adjacency.iter().flat_map(|(u, neighbors)| {
            neighbors
                .iter()
                .filter(move |(v, _)| u <= *v)
                .map(move |(v, weight)| (u, v, *weight))
        })
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.edges()
            .all(|(_, _, weight)| !weight.is_nan() && weight >= W::zero())
    }
}

impl<V, W> Default for UndirectedGraph<V, W>
where
    V: Ord + Clone + Debug,
    W: Float + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> Graph<V, W> for UndirectedGraph<V, W>
where
    V: Ord + Clone + Debug,
    W: Float + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn vertices(&self) -> Vec<V> {
        self.adjacency.keys().cloned().collect()
    }

    fn neighbor_edges(&self, vertex: &V) -> Box<dyn Iterator<Item = (V, W)> + '_> {
        if let Some(neighbors) = self.adjacency.get(vertex) {
            Box::new(neighbors.iter().map(|(v, weight)| (v.clone(), *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn has_edge(&self, u: &V, v: &V) -> bool {
        self.adjacency
            .get(u)
            .map_or(false, |neighbors| neighbors.contains_key(v))
    }

    fn weight(&self, u: &V, v: &V) -> Result<W> {
        self.adjacency
            .get(u)
            .and_then(|neighbors| neighbors.get(v))
            .copied()
            .ok_or_else(|| Error::EdgeNotFound {
                from: format!("{:?}", u),
                to: format!("{:?}", v),
            })
    }
}

impl<V, W> MutableGraph<V, W> for UndirectedGraph<V, W>
where
    V: Ord + Clone + Debug,
    W: Float + Debug + Copy,
{
    fn add_edge(&mut self, u: V, v: V, weight: W) -> Result<()> {
        if let Err(err) = check_weight(&u, &v, weight) {
            debug!("rejected edge {:?} - {:?}: {}", u, v, err);
            return Err(err);
        }

        // Overwrite both directions; only a new pair grows the edge count
        let previous = self
            .adjacency
            .entry(u.clone())
            .or_default()
            .insert(v.clone(), weight);
        self.adjacency.entry(v).or_default().insert(u, weight);

        if previous.is_none() {
            self.edge_count += 1;
        }
        Ok(())
    }
}
