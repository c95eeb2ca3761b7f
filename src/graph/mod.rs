//! Graph implementation and associated functionality

pub mod io;


mod graph_traits;
mod undirected_graph;

pub use graph_traits::*;
pub use undirected_graph::*;
