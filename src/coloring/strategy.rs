use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::graph::Graph;

use super::{
    default_trials, exhaustive_chromatic_number, greedy_ascending, greedy_descending,
    random_greedy_chromatic_number, ColoringError, ColoringResult,
};

/// The interchangeable coloring algorithms.
///
/// `RandomGreedy { trials: None }` uses [`default_trials`] for the graph's size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Exhaustive,
    GreedyDescending,
    GreedyAscending,
    RandomGreedy { trials: Option<usize> },
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Exhaustive,
        Strategy::GreedyDescending,
        Strategy::GreedyAscending,
        Strategy::RandomGreedy { trials: None },
    ];

    pub fn run<R: Rng + ?Sized>(
        &self,
        graph: &dyn Graph,
        rng: &mut R,
    ) -> Result<ColoringResult, ColoringError> {
        match *self {
            Strategy::Exhaustive => exhaustive_chromatic_number(graph),
            Strategy::GreedyDescending => greedy_descending(graph),
            Strategy::GreedyAscending => greedy_ascending(graph),
            Strategy::RandomGreedy { trials } => {
                let trials = trials.unwrap_or_else(|| default_trials(graph.n()));
                random_greedy_chromatic_number(graph, trials, rng)
            }
        }
    }

    /// short name, also used for result file names
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Exhaustive => "exhaustive",
            Strategy::GreedyDescending => "greedy",
            Strategy::GreedyAscending => "greedy_ascending",
            Strategy::RandomGreedy { .. } => "random_greedy",
        }
    }

    /// whether the result is the true chromatic number
    pub fn is_exact(&self) -> bool {
        matches!(self, Strategy::Exhaustive)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::RandomGreedy { trials: Some(t) } => write!(f, "{}:{}", self.name(), t),
            _ => write!(f, "{}", self.name()),
        }
    }
}

impl FromStr for Strategy {
    type Err = ColoringError;

    fn from_str(s: &str) -> Result<Strategy, ColoringError> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        let (name, trials) = match normalized.split_once(':') {
            Some((name, trials)) => {
                let trials = trials.parse::<usize>().map_err(|_| {
                    ColoringError::InvalidArgument(format!("invalid trial count in {s:?}"))
                })?;
                (name.to_string(), Some(trials))
            }
            None => (normalized, None),
        };

        match (name.as_str(), trials) {
            ("exhaustive", None) => Ok(Strategy::Exhaustive),
            ("greedy" | "greedy_descending", None) => Ok(Strategy::GreedyDescending),
            ("greedy_ascending", None) => Ok(Strategy::GreedyAscending),
            ("random_greedy", trials) => Ok(Strategy::RandomGreedy { trials }),
            _ => Err(ColoringError::InvalidArgument(format!(
                "unknown strategy {s:?}"
            ))),
        }
    }
}
