//! on-disk cache of generated graphs, keyed by vertex count and edge percentage

use std::fs;
use std::io::{Error, ErrorKind, Result};
use std::path::{Path, PathBuf};

use rand::Rng;
use tracing::{debug, warn};

use crate::generation::{edge_count, random_graph};
use crate::graph::{io, Graph, UndirectedGraph};

/// cache file name for a graph with `n` vertices and `edge_pct` percent of all edges
pub fn graph_filename(n: usize, edge_pct: f64) -> String {
    format!("graph_{}_vertices_{}_edges.bin", n, edge_pct.trunc() as u64)
}

pub fn graph_path(dir: &Path, n: usize, edge_pct: f64) -> PathBuf {
    dir.join(graph_filename(n, edge_pct))
}

/// Returns the cached graph for (`n`, `edge_pct`) if one can be read, otherwise
/// generates a fresh one with `rng` and writes it to the cache.
///
/// Unreadable cache files are regenerated and overwritten, as are files whose
/// vertex or edge count does not match (`n`, `edge_pct`). File names only keep
/// the integer part of the percentage, so two densities can share a file.
pub fn load_or_generate<R: Rng + ?Sized>(
    dir: &Path,
    n: usize,
    edge_pct: f64,
    rng: &mut R,
) -> Result<UndirectedGraph> {
    let path = graph_path(dir, n, edge_pct);
    let expected_edges = edge_count(n, edge_pct / 100.0);

    if path.exists() {
        match io::read(&path) {
            Ok(graph) if graph.n() == n && graph.num_edges() == expected_edges => {
                debug!(path = %path.display(), "loaded cached graph");
                return Ok(graph);
            }
            Ok(graph) => warn!(
                path = %path.display(),
                vertices = graph.n(),
                edges = graph.num_edges(),
                expected_edges,
                "cached graph does not match its configuration, regenerating"
            ),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "corrupted graph cache, regenerating")
            }
        }
    }

    let graph = random_graph(n, edge_pct / 100.0, rng)
        .map_err(|e| Error::new(ErrorKind::InvalidInput, e))?;

    fs::create_dir_all(dir)?;
    io::save(&graph, &path)?;
    debug!(path = %path.display(), edges = graph.edges().len(), "cached new graph");

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn filename_uses_integer_percentage() {
        assert_eq!(graph_filename(12, 12.5), "graph_12_vertices_12_edges.bin");
        assert_eq!(graph_filename(4, 75.0), "graph_4_vertices_75_edges.bin");
    }

    #[test]
    fn second_load_hits_the_cache() {
        let dir = tempdir().unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let first = load_or_generate(dir.path(), 20, 50.0, &mut rng).unwrap();
        assert!(graph_path(dir.path(), 20, 50.0).exists());

        // a different rng would give a different graph if it were regenerated
        let mut other = StdRng::seed_from_u64(2);
        let second = load_or_generate(dir.path(), 20, 50.0, &mut other).unwrap();
        assert_eq!(first, second);
        assert_eq!(second.num_edges(), 95);
    }

    #[test]
    fn corrupted_cache_is_regenerated() {
        let dir = tempdir().unwrap();
        let path = graph_path(dir.path(), 8, 25.0);
        fs::write(&path, [1u8, 2, 3]).unwrap();

        let mut rng = StdRng::seed_from_u64(4);
        let graph = load_or_generate(dir.path(), 8, 25.0, &mut rng).unwrap();
        assert_eq!(graph.n(), 8);
        assert_eq!(graph.num_edges(), 7);

        // the file was replaced with a readable graph
        assert_eq!(io::read(&path).unwrap(), graph);
    }

    #[test]
    fn cache_with_oversized_header_is_regenerated() {
        let dir = tempdir().unwrap();
        let path = graph_path(dir.path(), 6, 50.0);
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&6u32.to_le_bytes());
        bytes.extend_from_slice(&u32::MAX.to_le_bytes());
        fs::write(&path, bytes).unwrap();

        let mut rng = StdRng::seed_from_u64(4);
        let graph = load_or_generate(dir.path(), 6, 50.0, &mut rng).unwrap();
        assert_eq!(graph.num_edges(), 7);
        assert_eq!(io::read(&path).unwrap(), graph);
    }

    #[test]
    fn mismatched_cache_is_regenerated() {
        let dir = tempdir().unwrap();
        let mut rng = StdRng::seed_from_u64(9);

        // 12.5% and 12.9% share a file name; on 20 vertices they give 23 and 24 edges
        let low = load_or_generate(dir.path(), 20, 12.5, &mut rng).unwrap();
        assert_eq!(low.num_edges(), 23);

        let high = load_or_generate(dir.path(), 20, 12.9, &mut rng).unwrap();
        assert_eq!(high.num_edges(), 24);
        assert_eq!(io::read(&graph_path(dir.path(), 20, 12.9)).unwrap(), high);

        // a valid file for the wrong vertex count is not reused either
        io::save(&UndirectedGraph::complete(3), &graph_path(dir.path(), 4, 50.0)).unwrap();
        let graph = load_or_generate(dir.path(), 4, 50.0, &mut rng).unwrap();
        assert_eq!(graph.n(), 4);
        assert_eq!(graph.num_edges(), 3);
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("graphs").join("random");
        let mut rng = StdRng::seed_from_u64(4);
        load_or_generate(&nested, 5, 12.5, &mut rng).unwrap();
        assert!(graph_path(&nested, 5, 12.5).exists());
    }
}
