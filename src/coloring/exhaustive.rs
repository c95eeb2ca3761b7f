//! Exact chromatic number by brute force.
//!
//! For k = 1, 2, ... every assignment in {0..k}^n is generated in
//! lexicographic order (vertex 0 is the most significant digit) and checked
//! edge by edge. The first valid assignment wins. Nothing is pruned: the
//! counters are meant to expose the full k^n cost.

use itertools::Itertools;
use tracing::debug;

use crate::graph::Graph;

use super::validity::is_valid_slice;
use super::{check_graph, ColorT, Coloring, ColoringError, ColoringResult, OperationCounts};

/// Returns the chromatic number of `graph` with a witness coloring.
///
/// Runs in O(m * k^n); callers should bound `n` (around 10-12 is already slow).
pub fn exhaustive_chromatic_number(graph: &dyn Graph) -> Result<ColoringResult, ColoringError> {
    check_graph(graph)?;
    let n = graph.n();
    let mut counts = OperationCounts::default();

    if n == 0 {
        return Ok(ColoringResult {
            chromatic_number: 0,
            coloring: Coloring::default(),
            counts,
        });
    }

    for k in 1..=n {
        let candidates = (0..n).map(|_| 0..k as ColorT).multi_cartesian_product();
        for candidate in candidates {
            counts.configurations_tested += 1;
            let (valid, checks) = is_valid_slice(graph, &candidate);
            counts.basic_operations += checks;
            if valid {
                debug!(
                    n,
                    k,
                    configurations = counts.configurations_tested,
                    "exhaustive search found a valid coloring"
                );
                return Ok(ColoringResult {
                    chromatic_number: k,
                    coloring: Coloring::new(candidate),
                    counts,
                });
            }
        }
    }

    // unreachable for a simple graph: at k = n the all-distinct assignment is valid
    Ok(ColoringResult {
        chromatic_number: n,
        coloring: Coloring::new((0..n as ColorT).collect()),
        counts,
    })
}
