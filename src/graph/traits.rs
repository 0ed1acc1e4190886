use std::fmt::Debug;
use num_traits::Float;

use crate::Result;

/// Trait representing a weighted undirected graph
///
/// Vertices are opaque identifiers; their total order fixes the iteration order
/// of every query so that algorithms built on top are reproducible.
pub trait Graph<V, W>: Debug
where
    V: Ord + Clone + Debug,
    W: Float + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of undirected edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns every vertex that appears in an edge, in ascending order
    fn vertices(&self) -> Vec<V>;

    /// Returns an iterator over `(neighbor, weight)` pairs, in ascending neighbor order.
    /// Empty for a vertex with no recorded edges.
    fn neighbor_edges(&self, vertex: &V) -> Box<dyn Iterator<Item = (V, W)> + '_>;

    /// Returns the vertices adjacent to `vertex`, in ascending order
    fn neighbors(&self, vertex: &V) -> Vec<V> {
        self.neighbor_edges(vertex).map(|(neighbor, _)| neighbor).collect()
    }

    /// Returns true if the vertex appears in any edge
    fn has_vertex(&self, vertex: &V) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, u: &V, v: &V) -> bool;

    /// Gets the weight of the edge between `u` and `v`.
    ///
    /// Fails with [`crate::Error::EdgeNotFound`] when the vertices are not adjacent.
    fn weight(&self, u: &V, v: &V) -> Result<W>;
}

/// Trait for mutable graph operations
pub trait MutableGraph<V, W>: Graph<V, W>
where
    V: Ord + Clone + Debug,
    W: Float + Debug + Copy,
{
    /// Adds an undirected edge between `u` and `v`, overwriting the weight of an
    /// existing edge between the same pair.
    ///
    /// Fails with [`crate::Error::InvalidWeight`] for a negative or NaN weight; the
    /// graph is left unchanged in that case.
    fn add_edge(&mut self, u: V, v: V, weight: W) -> Result<()>;
}

/// Checks that `weight` is usable by a label-setting algorithm: a non-negative,
/// non-NaN number.
pub fn check_weight<V, W>(u: &V, v: &V, weight: W) -> Result<()>
where
    V: Debug,
    W: Float + Debug + Copy,
{
    if weight.is_nan() || weight < W::zero() {
        return Err(crate::Error::InvalidWeight {
            from: format!("{:?}", u),
            to: format!("{:?}", v),
            weight: weight.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(())
}
