//! Greedy coloring restarted over distinct random vertex orders.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::graph::{Graph, IndexT};

use super::greedy::first_fit;
use super::{check_graph, ColoringError, ColoringResult, OperationCounts};

/// Trial budget used by the sweep: six orders per vertex, capped at 500 and
/// at the number of distinct orders, never below one.
pub fn default_trials(n: usize) -> usize {
    let budget = (6 * n).min(500) as u64;
    let budget = permutation_count(n).map_or(budget, |available| budget.min(available));
    budget.max(1) as usize
}

/// Runs first-fit greedy over `trials` distinct uniformly random orders and
/// keeps the coloring with the fewest colors.
///
/// Orders are redrawn until they differ from every order already tried, so
/// asking for more trials than there are permutations of the vertex set is
/// rejected up front. Counts are summed over all trials. The returned
/// coloring is the first one that reached the best color count.
pub fn random_greedy_chromatic_number<R: Rng + ?Sized>(
    graph: &dyn Graph,
    trials: usize,
    rng: &mut R,
) -> Result<ColoringResult, ColoringError> {
    check_graph(graph)?;
    if trials == 0 {
        return Err(ColoringError::InvalidArgument(
            "randomized greedy needs at least one trial".to_string(),
        ));
    }

    let n = graph.n();
    if let Some(available) = permutation_count(n) {
        if trials as u64 > available {
            return Err(ColoringError::InvalidArgument(format!(
                "{trials} trials requested, {n} vertices only have {available} orders"
            )));
        }
    }

    let mut order: Vec<IndexT> = (0..n as IndexT).collect();
    let mut tested_orders: HashSet<Vec<IndexT>> = HashSet::with_capacity(trials);
    let mut counts = OperationCounts::default();
    let mut best: Option<ColoringResult> = None;

    for _ in 0..trials {
        loop {
            order.shuffle(rng);
            if tested_orders.insert(order.clone()) {
                break;
            }
        }

        let trial = first_fit(graph, &order);
        counts += trial.counts;
        let improves = best
            .as_ref()
            .map_or(true, |b| trial.chromatic_number < b.chromatic_number);
        if improves {
            best = Some(trial);
        }
    }

    // trials >= 1, so at least one result was recorded
    let best = best.ok_or_else(|| ColoringError::InvalidArgument("no trials ran".to_string()))?;
    debug!(n, trials, k = best.chromatic_number, "randomized greedy finished");

    Ok(ColoringResult {
        chromatic_number: best.chromatic_number,
        coloring: best.coloring,
        counts,
    })
}

/// n!, or None when it does not fit in a u64
fn permutation_count(n: usize) -> Option<u64> {
    (1..=n as u64).try_fold(1u64, |acc, i| acc.checked_mul(i))
}
