//! Property tests for the coloring strategies on small random graphs.
//!
//! Graphs have at most 7 vertices so the exhaustive search stays cheap.

use std::collections::HashSet;

use chromatic::coloring::{
    exhaustive_chromatic_number, greedy_chromatic_number, is_valid,
    random_greedy_chromatic_number, ColorT, ColoringResult, Strategy,
};
use chromatic::graph::{Graph, IndexT, UndirectedGraph};
use proptest::prelude::*;
use proptest::strategy::Strategy as PropStrategy;
use rand::rngs::StdRng;
use rand::SeedableRng;

const MAX_VERTICES: usize = 7;

fn small_graph() -> impl PropStrategy<Value = UndirectedGraph> {
    (
        0..=MAX_VERTICES,
        proptest::collection::vec(any::<bool>(), MAX_VERTICES * (MAX_VERTICES - 1) / 2),
    )
        .prop_map(|(n, mask)| {
            let mut edges = Vec::new();
            let mut bit = 0;
            for i in 0..MAX_VERTICES as IndexT {
                for j in (i + 1)..MAX_VERTICES as IndexT {
                    if mask[bit] && (j as usize) < n {
                        edges.push((i, j));
                    }
                    bit += 1;
                }
            }
            UndirectedGraph::from_edges(n, &edges).unwrap()
        })
}

fn uses_contiguous_colors(result: &ColoringResult) -> bool {
    let used: HashSet<ColorT> = result.coloring.as_slice().iter().copied().collect();
    used == (0..result.chromatic_number as ColorT).collect()
}

proptest! {
    #[test]
    fn prop_exhaustive_is_valid_and_lower_bounds_heuristics(
        graph in small_graph(),
        seed in any::<u64>(),
    ) {
        let exact = exhaustive_chromatic_number(&graph).unwrap();
        prop_assert!(is_valid(&graph, &exact.coloring));
        prop_assert!(uses_contiguous_colors(&exact));

        let mut rng = StdRng::seed_from_u64(seed);
        for strategy in Strategy::ALL {
            let result = strategy.run(&graph, &mut rng).unwrap();
            prop_assert!(is_valid(&graph, &result.coloring));
            prop_assert!(uses_contiguous_colors(&result));
            prop_assert!(result.chromatic_number >= exact.chromatic_number);
            prop_assert!(result.chromatic_number <= graph.n());
            if graph.n() > 0 {
                prop_assert!(result.chromatic_number >= 1);
            }
        }
    }

    #[test]
    fn prop_greedy_valid_for_any_order(graph in small_graph(), seed in any::<u64>()) {
        use rand::seq::SliceRandom;

        let mut order: Vec<IndexT> = (0..graph.n() as IndexT).collect();
        order.shuffle(&mut StdRng::seed_from_u64(seed));
        let result = greedy_chromatic_number(&graph, &order).unwrap();
        prop_assert!(is_valid(&graph, &result.coloring));
        prop_assert_eq!(result.counts.configurations_tested, graph.n() as u64);
        // first-fit never exceeds max degree + 1
        let max_degree = (0..graph.n() as IndexT).map(|v| graph.degree(v)).max().unwrap_or(0);
        prop_assert!(result.chromatic_number <= max_degree + 1);
    }

    #[test]
    fn prop_random_greedy_reproducible(graph in small_graph(), seed in any::<u64>()) {
        let trials = 1.max(graph.n());
        let a = random_greedy_chromatic_number(&graph, trials, &mut StdRng::seed_from_u64(seed));
        let b = random_greedy_chromatic_number(&graph, trials, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(a, b);
    }
}
