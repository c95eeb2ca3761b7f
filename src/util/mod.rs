pub mod cache;
pub mod dataset;
pub mod results;
