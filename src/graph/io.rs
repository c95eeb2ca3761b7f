//! reading and writing graphs
//!
//! The binary format is used for the on-disk graph cache:
//! - 2 x u32 (little-endian): n, m
//! - m x (u32, u32): edge endpoints
//!
//! Text edge lists (one `u v` pair per line) are read for external graphs.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Error, ErrorKind, Read, Result, Write};
use std::path::Path;

use super::{Graph, IndexT, UndirectedGraph};

/// save the graph to a file
pub fn save(graph: &UndirectedGraph, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writer.write_all(&(graph.n() as u32).to_le_bytes())?;
    writer.write_all(&(graph.num_edges() as u32).to_le_bytes())?;

    for &(u, v) in graph.edges() {
        writer.write_all(&u.to_le_bytes())?;
        writer.write_all(&v.to_le_bytes())?;
    }
    writer.flush()
}

/// reads a graph written by `save`, re-validating every edge
pub fn read(path: &Path) -> Result<UndirectedGraph> {
    let file = File::open(path)?;
    let file_len = file.metadata()?.len();
    let mut reader = BufReader::new(file);

    let mut header = [0u8; 8];
    reader.read_exact(&mut header)?;
    let n = u32::from_le_bytes([header[0], header[1], header[2], header[3]]) as usize;
    let m = u32::from_le_bytes([header[4], header[5], header[6], header[7]]) as usize;

    // the header is untrusted: check it against the file before allocating
    let expected_len = 8 + 8 * m as u64;
    if file_len < expected_len {
        return Err(Error::new(
            ErrorKind::UnexpectedEof,
            format!("header declares {m} edges but the file holds {file_len} bytes"),
        ));
    }
    if file_len > expected_len {
        return Err(Error::new(ErrorKind::InvalidData, "trailing bytes after edge data"));
    }

    let mut edge_bytes = vec![0u8; m * 8];
    reader.read_exact(&mut edge_bytes)?;

    let edges: Vec<(IndexT, IndexT)> = edge_bytes
        .chunks_exact(8)
        .map(|chunk| {
            (
                u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]),
                u32::from_le_bytes([chunk[4], chunk[5], chunk[6], chunk[7]]),
            )
        })
        .collect();

    // anything after the declared edges means the header lied
    let mut trailing = [0u8; 1];
    if reader.read(&mut trailing)? != 0 {
        return Err(Error::new(ErrorKind::InvalidData, "trailing bytes after edge data"));
    }

    UndirectedGraph::from_edges(n, &edges).map_err(|e| Error::new(ErrorKind::InvalidData, e))
}

/// Reads a whitespace-separated edge list.
///
/// The first `skip_lines` lines are skipped, as are blank lines and comments
/// starting with `#` or `%`. Vertex labels can be arbitrary non-negative
/// integers; they are relabelled densely in the order they are first seen.
/// Self-loops and repeated edges are dropped.
pub fn read_edge_list(path: &Path, skip_lines: usize) -> Result<UndirectedGraph> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut labels: HashMap<u64, IndexT> = HashMap::new();
    let mut seen: HashSet<(IndexT, IndexT)> = HashSet::new();
    let mut edges: Vec<(IndexT, IndexT)> = Vec::new();

    for (line_number, line) in reader.lines().enumerate().skip(skip_lines) {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('%') {
            continue;
        }

        let mut fields = trimmed.split_whitespace();
        let (u, v) = match (fields.next(), fields.next()) {
            (Some(u), Some(v)) => (parse_label(u, line_number)?, parse_label(v, line_number)?),
            _ => {
                return Err(Error::new(
                    ErrorKind::InvalidData,
                    format!("line {}: expected two vertex labels", line_number + 1),
                ))
            }
        };

        let u = relabel(&mut labels, u);
        let v = relabel(&mut labels, v);
        if u == v {
            continue;
        }
        if seen.insert((u.min(v), u.max(v))) {
            edges.push((u, v));
        }
    }

    UndirectedGraph::from_edges(labels.len(), &edges)
        .map_err(|e| Error::new(ErrorKind::InvalidData, e))
}

fn parse_label(field: &str, line_number: usize) -> Result<u64> {
    field.parse::<u64>().map_err(|_| {
        Error::new(
            ErrorKind::InvalidData,
            format!("line {}: invalid vertex label {:?}", line_number + 1, field),
        )
    })
}

fn relabel(labels: &mut HashMap<u64, IndexT>, label: u64) -> IndexT {
    let next = labels.len() as IndexT;
    *labels.entry(label).or_insert(next)
}
