//! locating and loading graph files from disk

use std::fs;
use std::io::{Error, ErrorKind, Result};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::warn;

use crate::graph::io::{read, read_edge_list};
use crate::graph::{Graph, UndirectedGraph};

/// extensions picked up when a directory is given
pub const GRAPH_EXTENSIONS: [&str; 3] = ["edges", "txt", "bin"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    /// the binary cache format written by `graph::io::save`
    Binary,
    /// whitespace-separated `u v` lines
    EdgeList,
}

impl GraphFormat {
    /// `.bin` files are binary, anything else is read as an edge list
    pub fn from_path(path: &Path) -> GraphFormat {
        match path.extension().and_then(|e| e.to_str()) {
            Some("bin") => GraphFormat::Binary,
            _ => GraphFormat::EdgeList,
        }
    }
}

impl FromStr for GraphFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "bin" => Ok(GraphFormat::Binary),
            "edges" => Ok(GraphFormat::EdgeList),
            other => Err(format!("unknown graph format {other:?}")),
        }
    }
}

/// Reads one graph. `format` overrides the extension; `skip_lines` only
/// applies to edge lists.
pub fn load_graph(
    path: &Path,
    format: Option<GraphFormat>,
    skip_lines: usize,
) -> Result<UndirectedGraph> {
    match format.unwrap_or_else(|| GraphFormat::from_path(path)) {
        GraphFormat::Binary => read(path),
        GraphFormat::EdgeList => read_edge_list(path, skip_lines),
    }
}

/// Expands directories into the graph files they contain (not recursively,
/// sorted by name); plain files are kept as given.
pub fn expand_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let mut found: Vec<PathBuf> = fs::read_dir(input)?
                .map(|entry| entry.map(|e| e.path()))
                .collect::<Result<Vec<_>>>()?
                .into_iter()
                .filter(|path| {
                    path.is_file()
                        && path
                            .extension()
                            .and_then(|e| e.to_str())
                            .is_some_and(|e| GRAPH_EXTENSIONS.contains(&e))
                })
                .collect();
            found.sort();
            files.extend(found);
        } else if input.exists() {
            files.push(input.clone());
        } else {
            return Err(Error::new(
                ErrorKind::NotFound,
                format!("{} does not exist", input.display()),
            ));
        }
    }
    Ok(files)
}

/// Loads every file, skipping (with a warning) those that fail to parse, and
/// returns them by ascending vertex count. Equal sizes keep their input order.
pub fn load_by_size(
    paths: &[PathBuf],
    format: Option<GraphFormat>,
    skip_lines: usize,
) -> Vec<(PathBuf, UndirectedGraph)> {
    let mut graphs: Vec<(PathBuf, UndirectedGraph)> = paths
        .iter()
        .filter_map(|path| match load_graph(path, format, skip_lines) {
            Ok(graph) => Some((path.clone(), graph)),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load graph, skipping");
                None
            }
        })
        .collect();
    graphs.sort_by_key(|(_, graph)| graph.n());
    graphs
}
