pub mod coloring;
pub mod experiment;
pub mod generation;
pub mod graph;
pub mod util;
