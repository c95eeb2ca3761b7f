//! The density × vertex-count sweep: which graphs to build, which strategies
//! to run on each, and how a run turns into result records.

use std::path::PathBuf;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::warn;

use crate::coloring::{ColoringResult, Strategy};
use crate::graph::Graph;
use crate::util::results::{precision, ExperimentRecord};

#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentConfig {
    pub min_vertices: usize,
    pub max_vertices: usize,
    /// edge percentages of the generated graphs
    pub densities: Vec<f64>,
    /// exhaustive search is skipped above this many vertices
    pub exhaustive_max_vertices: usize,
    /// None uses `default_trials(n)`
    pub random_trials: Option<usize>,
    pub seed: u64,
    pub graph_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        ExperimentConfig {
            min_vertices: 4,
            max_vertices: 100,
            densities: vec![12.5, 25.0, 50.0, 75.0],
            exhaustive_max_vertices: 10,
            random_trials: None,
            seed: 103199,
            graph_dir: PathBuf::from("graphs"),
            output_dir: PathBuf::from("results"),
        }
    }
}

/// one cell of the sweep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Configuration {
    pub vertices: usize,
    pub edge_pct: f64,
}

impl Configuration {
    /// Seed for this configuration's own rng, so results do not depend on
    /// the order in which configurations are scheduled.
    pub fn seed(&self, base_seed: u64) -> u64 {
        base_seed
            .wrapping_mul(0x9E37_79B9_7F4A_7C15)
            .wrapping_add((self.vertices as u64) << 20)
            .wrapping_add((self.edge_pct * 100.0) as u64)
    }

    pub fn rng(&self, base_seed: u64) -> StdRng {
        StdRng::seed_from_u64(self.seed(base_seed))
    }
}

impl ExperimentConfig {
    pub fn configurations(&self) -> Vec<Configuration> {
        (self.min_vertices..=self.max_vertices)
            .flat_map(|vertices| {
                self.densities.iter().map(move |&edge_pct| Configuration {
                    vertices,
                    edge_pct,
                })
            })
            .collect()
    }

    pub fn strategies(&self) -> Vec<Strategy> {
        vec![
            Strategy::Exhaustive,
            Strategy::GreedyDescending,
            Strategy::GreedyAscending,
            Strategy::RandomGreedy {
                trials: self.random_trials,
            },
        ]
    }

    /// strategies worth running on a graph with `n` vertices
    pub fn strategies_for(&self, n: usize) -> Vec<Strategy> {
        self.strategies()
            .into_iter()
            .filter(|s| !s.is_exact() || n <= self.exhaustive_max_vertices)
            .collect()
    }
}

/// Runs each strategy on `graph`, timing every call.
///
/// Strategies that fail are logged and left out. When an exact strategy ran,
/// every record carries its precision relative to that result.
pub fn run_strategies(
    graph: &dyn Graph,
    edge_pct: Option<f64>,
    strategies: &[Strategy],
    rng: &mut StdRng,
) -> Vec<(Strategy, ExperimentRecord)> {
    let mut runs: Vec<(Strategy, ColoringResult, f64)> = Vec::with_capacity(strategies.len());

    for &strategy in strategies {
        let start = Instant::now();
        match strategy.run(graph, rng) {
            Ok(result) => {
                let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;
                runs.push((strategy, result, elapsed_ms));
            }
            Err(e) => warn!(%strategy, n = graph.n(), error = %e, "strategy failed, skipping"),
        }
    }

    let exact = runs
        .iter()
        .find(|(s, _, _)| s.is_exact())
        .map(|(_, r, _)| r.chromatic_number);

    runs.into_iter()
        .map(|(strategy, result, exec_time_ms)| {
            let record = ExperimentRecord {
                vertices: graph.n(),
                edges: graph.num_edges(),
                edge_pct,
                chromatic_number: result.chromatic_number,
                exec_time_ms,
                counts: result.counts,
                precision: exact.map(|k| precision(k, result.chromatic_number)),
            };
            (strategy, record)
        })
        .collect()
}
