//! an undirected simple graph stored as an edge list plus adjacency vectors

use std::collections::HashSet;

use thiserror::Error;

use super::{Graph, IndexT};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("edge ({u}, {v}) references a vertex outside 0..{n}")]
    VertexOutOfRange { u: IndexT, v: IndexT, n: usize },

    #[error("self-loop on vertex {v}")]
    SelfLoop { v: IndexT },

    #[error("edge ({u}, {v}) appears more than once")]
    DuplicateEdge { u: IndexT, v: IndexT },

    #[error("neighborhood of vertex {v} does not match the edge list")]
    InconsistentNeighborhood { v: IndexT },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndirectedGraph {
    neighborhoods: Vec<Vec<IndexT>>,
    edges: Vec<(IndexT, IndexT)>,
}

impl UndirectedGraph {
    /// constructs a graph with `n` vertices and no edges
    pub fn empty(n: usize) -> UndirectedGraph {
        UndirectedGraph {
            neighborhoods: vec![Vec::new(); n],
            edges: Vec::new(),
        }
    }

    /// Builds a graph from an edge list, rejecting out-of-range endpoints,
    /// self-loops and repeated edges (in either orientation).
    ///
    /// Edges are stored as `(min, max)` in the order given.
    pub fn from_edges(
        n: usize,
        edges: &[(IndexT, IndexT)],
    ) -> Result<UndirectedGraph, GraphError> {
        let mut neighborhoods: Vec<Vec<IndexT>> = vec![Vec::new(); n];
        let mut normalized: Vec<(IndexT, IndexT)> = Vec::with_capacity(edges.len());
        let mut seen: HashSet<(IndexT, IndexT)> = HashSet::with_capacity(edges.len());

        for &(u, v) in edges {
            check_edge(u, v, n)?;
            let edge = (u.min(v), u.max(v));
            if !seen.insert(edge) {
                return Err(GraphError::DuplicateEdge { u, v });
            }
            neighborhoods[u as usize].push(v);
            neighborhoods[v as usize].push(u);
            normalized.push(edge);
        }

        Ok(UndirectedGraph {
            neighborhoods,
            edges: normalized,
        })
    }

    /// the complete graph on `n` vertices
    pub fn complete(n: usize) -> UndirectedGraph {
        let mut edges = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for i in 0..n as IndexT {
            for j in (i + 1)..n as IndexT {
                edges.push((i, j));
            }
        }
        let neighborhoods: Vec<Vec<IndexT>> = (0..n as IndexT)
            .map(|i| (0..n as IndexT).filter(|&j| j != i).collect())
            .collect();

        UndirectedGraph {
            neighborhoods,
            edges,
        }
    }

    /// returns the number of nodes in the graph
    pub fn size(&self) -> usize {
        self.neighborhoods.len()
    }

    /// returns the neighborhood of a node
    pub fn get_neighborhood(&self, i: IndexT) -> &[IndexT] {
        assert!(i < self.size() as IndexT);
        &self.neighborhoods[i as usize]
    }

    /// sum of degrees of all nodes
    pub fn total_degree(&self) -> usize {
        2 * self.edges.len()
    }

    /// maximum degree of the graph
    pub fn max_degree(&self) -> usize {
        self.neighborhoods
            .iter()
            .map(|n| n.len())
            .max()
            .unwrap_or(0)
    }

    /// fraction of the n(n-1)/2 possible edges that are present
    pub fn density(&self) -> f64 {
        let n = self.size();
        if n < 2 {
            return 0.0;
        }
        self.edges.len() as f64 / (n * (n - 1) / 2) as f64
    }
}

impl Graph for UndirectedGraph {
    fn n(&self) -> usize {
        self.size()
    }

    fn neighbors(&self, i: IndexT) -> &[IndexT] {
        self.get_neighborhood(i)
    }

    fn edges(&self) -> &[(IndexT, IndexT)] {
        &self.edges
    }
}

fn check_edge(u: IndexT, v: IndexT, n: usize) -> Result<(), GraphError> {
    if u as usize >= n || v as usize >= n {
        return Err(GraphError::VertexOutOfRange { u, v, n });
    }
    if u == v {
        return Err(GraphError::SelfLoop { v });
    }
    Ok(())
}

/// Re-checks the structural invariants of any `Graph` implementor: endpoints
/// in range, no self-loops, no repeated edges, and neighborhoods that list
/// each edge exactly once from both of its endpoints.
pub fn validate_graph(graph: &dyn Graph) -> Result<(), GraphError> {
    let n = graph.n();
    let mut edge_set: HashSet<(IndexT, IndexT)> = HashSet::with_capacity(graph.num_edges());
    for &(u, v) in graph.edges() {
        check_edge(u, v, n)?;
        if !edge_set.insert((u.min(v), u.max(v))) {
            return Err(GraphError::DuplicateEdge { u, v });
        }
    }

    // directed (vertex, neighbor) entries seen so far
    let mut listed: HashSet<(IndexT, IndexT)> = HashSet::with_capacity(2 * edge_set.len());
    for v in 0..n as IndexT {
        for &w in graph.neighbors(v) {
            check_edge(v, w, n)?;
            if !edge_set.contains(&(v.min(w), v.max(w))) || !listed.insert((v, w)) {
                return Err(GraphError::InconsistentNeighborhood { v });
            }
        }
    }

    for &(u, v) in graph.edges() {
        if !listed.contains(&(u, v)) {
            return Err(GraphError::InconsistentNeighborhood { v: u });
        }
        if !listed.contains(&(v, u)) {
            return Err(GraphError::InconsistentNeighborhood { v });
        }
    }
    Ok(())
}
