//! CSV logging of per-strategy experiment results

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use crate::coloring::{OperationCounts, Strategy};

pub const HEADER: [&str; 8] = [
    "vertices",
    "edges",
    "edge_pct",
    "chromatic_number",
    "exec_time_ms",
    "basic_operations",
    "configurations_tested",
    "precision",
];

/// One strategy run on one graph.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentRecord {
    pub vertices: usize,
    pub edges: usize,
    /// None for graphs that were not generated with a target density
    pub edge_pct: Option<f64>,
    pub chromatic_number: usize,
    pub exec_time_ms: f64,
    pub counts: OperationCounts,
    /// distance from the exact chromatic number, when it is known
    pub precision: Option<usize>,
}

impl ExperimentRecord {
    fn to_row(&self) -> [String; 8] {
        [
            self.vertices.to_string(),
            self.edges.to_string(),
            self.edge_pct.map(|p| p.to_string()).unwrap_or_default(),
            self.chromatic_number.to_string(),
            format!("{:.4}", self.exec_time_ms),
            self.counts.basic_operations.to_string(),
            self.counts.configurations_tested.to_string(),
            self.precision.map(|p| p.to_string()).unwrap_or_default(),
        ]
    }
}

/// absolute difference between a heuristic color count and the exact one
pub fn precision(exact: usize, estimate: usize) -> usize {
    exact.abs_diff(estimate)
}

/// Appends records to a CSV file, writing the header only if the file is new.
pub struct ResultLogger {
    writer: csv::Writer<File>,
}

impl ResultLogger {
    pub fn open(path: &Path) -> csv::Result<ResultLogger> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let mut writer = csv::Writer::from_writer(file);

        // if the file is empty, write the header
        if writer.get_ref().metadata()?.len() == 0 {
            writer.write_record(HEADER)?;
            writer.flush()?;
        }

        Ok(ResultLogger { writer })
    }

    /// writes one row and flushes it, so partial sweeps leave usable files
    pub fn write(&mut self, record: &ExperimentRecord) -> csv::Result<()> {
        self.writer.write_record(record.to_row())?;
        self.writer.flush()?;
        Ok(())
    }
}

/// One `<strategy>_results.csv` file per strategy name inside a directory.
pub struct StrategyLoggers {
    dir: PathBuf,
    loggers: HashMap<&'static str, ResultLogger>,
}

impl StrategyLoggers {
    /// creates `dir` if needed and opens a file for each of `strategies`
    pub fn open(dir: &Path, strategies: &[Strategy]) -> csv::Result<StrategyLoggers> {
        fs::create_dir_all(dir)?;
        let mut loggers = StrategyLoggers {
            dir: dir.to_path_buf(),
            loggers: HashMap::new(),
        };
        for &strategy in strategies {
            loggers.logger(strategy)?;
        }
        Ok(loggers)
    }

    pub fn path(dir: &Path, strategy: Strategy) -> PathBuf {
        dir.join(format!("{}_results.csv", strategy.name()))
    }

    /// appends `record` to the file of `strategy`, opening it on first use
    pub fn write(&mut self, strategy: Strategy, record: &ExperimentRecord) -> csv::Result<()> {
        self.logger(strategy)?.write(record)
    }

    fn logger(&mut self, strategy: Strategy) -> csv::Result<&mut ResultLogger> {
        let logger = match self.loggers.entry(strategy.name()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                entry.insert(ResultLogger::open(&Self::path(&self.dir, strategy))?)
            }
        };
        Ok(logger)
    }
}
