//! Traits for graph interfaces

pub type IndexT = u32;

/// Read-only view of an undirected simple graph.
///
/// Vertices are `0..n()`. Every edge appears once in `edges()` and in the
/// neighborhoods of both of its endpoints.
pub trait Graph {
    fn n(&self) -> usize;

    fn neighbors(&self, i: IndexT) -> &[IndexT];

    fn edges(&self) -> &[(IndexT, IndexT)];

    fn degree(&self, i: IndexT) -> usize {
        self.neighbors(i).len()
    }

    fn num_edges(&self) -> usize {
        self.edges().len()
    }
}
