use std::collections::HashMap;
use std::env;
use std::path::Path;
use std::process;
use std::time::Instant;

use chromatic::graph::io::{read, read_edge_list};
use chromatic::graph::{Graph, UndirectedGraph};

fn main() {
    // Get the filename from command-line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <graph_file> [skip_lines]", args[0]);
        process::exit(1);
    }

    let graph_file = Path::new(&args[1]);
    let skip_lines = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(0);
    println!("Reading graph from file: {}", graph_file.display());

    // Measure the time it takes to read the graph
    let start = Instant::now();
    let loaded = match graph_file.extension().and_then(|e| e.to_str()) {
        Some("bin") => read(graph_file),
        _ => read_edge_list(graph_file, skip_lines),
    };
    let graph: UndirectedGraph = match loaded {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error reading graph file: {}", e);
            process::exit(1);
        }
    };
    let elapsed = start.elapsed();

    println!("Graph loaded in {:.3} seconds", elapsed.as_secs_f64());
    println!("Number of nodes: {}", graph.n());
    println!("Number of edges: {}", graph.num_edges());
    println!("Edge density: {:.2}%", graph.density() * 100.0);

    if graph.n() == 0 {
        println!("\nGraph info summary complete");
        return;
    }

    let mut min_degree = graph.max_degree();
    let mut degree_distribution = HashMap::new();
    for i in 0..graph.n() as u32 {
        let degree = graph.degree(i);
        min_degree = min_degree.min(degree);
        *degree_distribution.entry(degree).or_insert(0) += 1;
    }

    println!(
        "Average degree: {:.2}",
        graph.total_degree() as f64 / graph.n() as f64
    );
    println!("Minimum degree: {}", min_degree);
    println!("Maximum degree: {}", graph.max_degree());
    // first-fit never needs more than max degree + 1 colors
    println!("Greedy color bound: {}", graph.max_degree() + 1);

    // Show degree distribution (limit to 10 most common degrees)
    println!("\nDegree distribution (top 10):");
    let mut distribution: Vec<_> = degree_distribution.into_iter().collect();
    distribution.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    for (i, (degree, count)) in distribution.iter().take(10).enumerate() {
        println!(
            "  {}: {} nodes with degree {} ({:.2}%)",
            i + 1,
            count,
            degree,
            (*count as f64 / graph.n() as f64) * 100.0
        );
    }

    // Sample some nodes and their neighborhoods
    println!("\nSample of neighborhoods:");
    for i in 0..5.min(graph.n()) as u32 {
        let neighborhood = graph.neighbors(i);
        println!(
            "Node {} (degree {}): {}",
            i,
            neighborhood.len(),
            if neighborhood.len() <= 10 {
                format!("{:?}", neighborhood)
            } else {
                format!(
                    "{:?}...(and {} more)",
                    &neighborhood[..10],
                    neighborhood.len() - 10
                )
            }
        );
    }

    println!("\nGraph info summary complete");
}
