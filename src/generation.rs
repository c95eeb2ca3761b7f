//! random graphs with a target edge density

use rand::seq::IndexedRandom;
use rand::Rng;
use thiserror::Error;

use crate::graph::{GraphError, IndexT, UndirectedGraph};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GenerationError {
    #[error("edge fraction must lie in [0, 1], got {0}")]
    InvalidEdgeFraction(f64),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// number of edges a graph on `n` vertices gets for `edge_fraction` of all pairs
pub fn edge_count(n: usize, edge_fraction: f64) -> usize {
    let max_edges = n * n.saturating_sub(1) / 2;
    (max_edges as f64 * edge_fraction).floor() as usize
}

/// Generates a graph on `n` vertices whose edges are a uniform sample, without
/// replacement, of `edge_count(n, edge_fraction)` of the possible pairs.
pub fn random_graph<R: Rng + ?Sized>(
    n: usize,
    edge_fraction: f64,
    rng: &mut R,
) -> Result<UndirectedGraph, GenerationError> {
    if !(0.0..=1.0).contains(&edge_fraction) {
        return Err(GenerationError::InvalidEdgeFraction(edge_fraction));
    }

    let mut possible_edges: Vec<(IndexT, IndexT)> = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n as IndexT {
        for j in (i + 1)..n as IndexT {
            possible_edges.push((i, j));
        }
    }

    let edges: Vec<(IndexT, IndexT)> = possible_edges
        .choose_multiple(rng, edge_count(n, edge_fraction))
        .copied()
        .collect();

    Ok(UndirectedGraph::from_edges(n, &edges)?)
}
