//! First-fit greedy coloring over a caller-supplied vertex order.

use std::collections::HashSet;

use tracing::debug;

use crate::graph::{Graph, IndexT};

use super::{check_graph, ColorT, Coloring, ColoringError, ColoringResult, OperationCounts};

/// vertices sorted by degree, highest first; ties keep ascending id order
pub fn degree_descending_order(graph: &dyn Graph) -> Vec<IndexT> {
    let mut order: Vec<IndexT> = (0..graph.n() as IndexT).collect();
    order.sort_by_key(|&v| std::cmp::Reverse(graph.degree(v)));
    order
}

/// vertices sorted by degree, lowest first; ties keep ascending id order
pub fn degree_ascending_order(graph: &dyn Graph) -> Vec<IndexT> {
    let mut order: Vec<IndexT> = (0..graph.n() as IndexT).collect();
    order.sort_by_key(|&v| graph.degree(v));
    order
}

/// Colors vertices in `order`, giving each the smallest color not used by an
/// already-colored neighbor.
///
/// `order` must be a permutation of `0..n`. Counts one basic operation per
/// color-membership test and one configuration per vertex colored.
pub fn greedy_chromatic_number(
    graph: &dyn Graph,
    order: &[IndexT],
) -> Result<ColoringResult, ColoringError> {
    check_graph(graph)?;
    check_order(graph.n(), order)?;
    Ok(first_fit(graph, order))
}

/// greedy coloring with the highest-degree vertices first
pub fn greedy_descending(graph: &dyn Graph) -> Result<ColoringResult, ColoringError> {
    check_graph(graph)?;
    Ok(first_fit(graph, &degree_descending_order(graph)))
}

/// greedy coloring with the lowest-degree vertices first
pub fn greedy_ascending(graph: &dyn Graph) -> Result<ColoringResult, ColoringError> {
    check_graph(graph)?;
    Ok(first_fit(graph, &degree_ascending_order(graph)))
}

/// the unchecked core, shared with the randomized strategy
pub(crate) fn first_fit(graph: &dyn Graph, order: &[IndexT]) -> ColoringResult {
    let mut assigned: Vec<Option<ColorT>> = vec![None; graph.n()];
    let mut counts = OperationCounts::default();

    for &vertex in order {
        let neighbor_colors: HashSet<ColorT> = graph
            .neighbors(vertex)
            .iter()
            .filter_map(|&u| assigned[u as usize])
            .collect();

        let mut color: ColorT = 0;
        loop {
            counts.basic_operations += 1;
            if !neighbor_colors.contains(&color) {
                break;
            }
            color += 1;
        }

        assigned[vertex as usize] = Some(color);
        counts.configurations_tested += 1;
    }

    let coloring = Coloring::new(assigned.into_iter().map(|c| c.unwrap_or(0)).collect());
    let chromatic_number = coloring.num_colors();
    debug!(n = graph.n(), k = chromatic_number, "greedy coloring finished");

    ColoringResult {
        chromatic_number,
        coloring,
        counts,
    }
}

fn check_order(n: usize, order: &[IndexT]) -> Result<(), ColoringError> {
    if order.len() != n {
        return Err(ColoringError::InvalidArgument(format!(
            "order has {} vertices, graph has {}",
            order.len(),
            n
        )));
    }
    let mut seen = vec![false; n];
    for &v in order {
        if v as usize >= n || seen[v as usize] {
            return Err(ColoringError::InvalidArgument(format!(
                "order is not a permutation of 0..{n} (vertex {v})"
            )));
        }
        seen[v as usize] = true;
    }
    Ok(())
}
