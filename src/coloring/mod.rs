//! Vertex coloring strategies and their instrumentation.
//!
//! Every strategy is a free function taking a `&dyn Graph` and returning a
//! [`ColoringResult`]: the color count, a witness coloring and the operation
//! counters accumulated during that one call.

pub mod exhaustive;
pub mod greedy;
pub mod random_greedy;
pub mod strategy;
pub mod validity;


use std::ops::{Add, AddAssign};

use thiserror::Error;

use crate::graph::{validate_graph, Graph, GraphError, IndexT};

pub use exhaustive::exhaustive_chromatic_number;
pub use greedy::{
    degree_ascending_order, degree_descending_order, greedy_ascending, greedy_chromatic_number,
    greedy_descending,
};
pub use random_greedy::{default_trials, random_greedy_chromatic_number};
pub use strategy::Strategy;
pub use validity::{is_valid, is_valid_counted};

pub type ColorT = u32;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColoringError {
    #[error("invalid graph: {0}")]
    InvalidGraph(#[from] GraphError),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// a color per vertex, indexed by vertex id
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Coloring {
    colors: Vec<ColorT>,
}

impl Coloring {
    pub fn new(colors: Vec<ColorT>) -> Coloring {
        Coloring { colors }
    }

    /// returns the color of a vertex
    pub fn color(&self, v: IndexT) -> ColorT {
        self.colors[v as usize]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// one more than the largest color used, or 0 for an empty coloring
    pub fn num_colors(&self) -> usize {
        self.colors
            .iter()
            .max()
            .map(|&c| c as usize + 1)
            .unwrap_or(0)
    }

    pub fn as_slice(&self) -> &[ColorT] {
        &self.colors
    }
}

impl From<Vec<ColorT>> for Coloring {
    fn from(colors: Vec<ColorT>) -> Coloring {
        Coloring::new(colors)
    }
}

/// Work counters for complexity reporting, scoped to one strategy call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OperationCounts {
    /// edge checks (exhaustive) or color-membership tests (greedy)
    pub basic_operations: u64,
    /// full candidate colorings (exhaustive) or vertex assignments (greedy)
    pub configurations_tested: u64,
}

impl Add for OperationCounts {
    type Output = OperationCounts;

    fn add(self, other: OperationCounts) -> OperationCounts {
        OperationCounts {
            basic_operations: self.basic_operations + other.basic_operations,
            configurations_tested: self.configurations_tested + other.configurations_tested,
        }
    }
}

impl AddAssign for OperationCounts {
    fn add_assign(&mut self, other: OperationCounts) {
        *self = *self + other;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoringResult {
    pub chromatic_number: usize,
    pub coloring: Coloring,
    pub counts: OperationCounts,
}

fn check_graph(graph: &dyn Graph) -> Result<(), ColoringError> {
    validate_graph(graph).map_err(ColoringError::from)
}
