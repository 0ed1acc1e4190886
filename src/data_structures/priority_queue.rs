use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority frontier for label-setting shortest path algorithms
///
/// Entries are `(priority, vertex)` pairs popped in ascending priority, ties in
/// ascending vertex order. There is no decrease-key: a vertex whose tentative
/// distance improves is pushed again, and the outdated entry stays in the heap
/// until the caller pops and discards it.
#[derive(Debug)]
pub struct Frontier<V, P>
where
    V: Ord + Clone + Debug,
    P: Ord + Copy + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> Frontier<V, P>
where
    V: Ord + Clone + Debug,
    P: Ord + Copy + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a vertex with the given tentative distance
    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(Reverse((priority, vertex)));
    }

    /// Removes the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, vertex))| (vertex, priority))
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn peek(&self) -> Option<(&V, P)> {
        self.heap.peek().map(|Reverse((priority, vertex))| (vertex, *priority))
    }
}

impl<V, P> Default for Frontier<V, P>
where
    V: Ord + Clone + Debug,
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
