//! the proper-coloring predicate

use crate::graph::Graph;

use super::Coloring;

/// Returns true if no edge joins two vertices of the same color.
///
/// An edge with an endpoint outside the coloring makes it invalid.
pub fn is_valid(graph: &dyn Graph, coloring: &Coloring) -> bool {
    is_valid_counted(graph, coloring).0
}

/// Same as [`is_valid`], also returning the number of edges checked.
///
/// Stops at the first violating edge, which is counted.
pub fn is_valid_counted(graph: &dyn Graph, coloring: &Coloring) -> (bool, u64) {
    if coloring.len() != graph.n() {
        return (false, 0);
    }
    is_valid_slice(graph, coloring.as_slice())
}

pub(crate) fn is_valid_slice(graph: &dyn Graph, colors: &[super::ColorT]) -> (bool, u64) {
    let mut checks = 0;
    for &(u, v) in graph.edges() {
        checks += 1;
        match (colors.get(u as usize), colors.get(v as usize)) {
            (Some(a), Some(b)) if a != b => {}
            _ => return (false, checks),
        }
    }
    (true, checks)
}
