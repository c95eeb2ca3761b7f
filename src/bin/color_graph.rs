use clap::{Arg, ArgAction, Command};
use std::path::{Path, PathBuf};
use std::time::Instant;

use chromatic::coloring::Strategy;
use chromatic::experiment::{run_strategies, ExperimentConfig};
use chromatic::graph::Graph;
use chromatic::util::dataset::{expand_inputs, load_by_size, GraphFormat};
use chromatic::util::results::StrategyLoggers;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let matches = Command::new("color_graph")
        .about("Colors graph files, smallest first, with the chosen strategies")
        .arg(
            Arg::new("graph")
                .long("graph")
                .short('g')
                .value_name("FILE|DIR")
                .help("Graph file or directory of .edges/.txt/.bin files; repeatable")
                .action(ArgAction::Append)
                .required(true),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .value_parser(["bin", "edges"])
                .help("Graph file format (default: inferred from the extension)"),
        )
        .arg(
            Arg::new("skip_lines")
                .long("skip-lines")
                .value_name("N")
                .help("Header lines to skip in an edge list (SW graphs have 4)")
                .value_parser(clap::value_parser!(usize))
                .default_value("0"),
        )
        .arg(
            Arg::new("strategy")
                .long("strategy")
                .value_name("NAME")
                .help("exhaustive, greedy, greedy-ascending, random-greedy[:TRIALS]; repeatable")
                .value_parser(clap::value_parser!(Strategy))
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("exhaustive_max_vertices")
                .long("exhaustive-max-vertices")
                .value_name("N")
                .help("Largest graph the exhaustive search runs on when no strategy is given")
                .value_parser(clap::value_parser!(usize))
                .default_value("10"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .short('s')
                .value_name("SEED")
                .value_parser(clap::value_parser!(u64))
                .default_value("103199"),
        )
        .arg(
            Arg::new("output_dir")
                .long("output-dir")
                .short('o')
                .value_name("DIR")
                .help("Append results to <strategy>_results.csv files in this directory"),
        )
        .get_matches();

    let inputs: Vec<PathBuf> = matches
        .get_many::<String>("graph")
        .unwrap()
        .map(PathBuf::from)
        .collect();
    let format = matches
        .get_one::<String>("format")
        .map(|f| f.parse::<GraphFormat>())
        .transpose()?;
    let skip_lines = *matches.get_one::<usize>("skip_lines").unwrap();

    let files = expand_inputs(&inputs)?;
    let start = Instant::now();
    let graphs = load_by_size(&files, format, skip_lines);
    println!(
        "Loaded {} of {} graph files in {:.3} seconds",
        graphs.len(),
        files.len(),
        start.elapsed().as_secs_f64()
    );

    let config = ExperimentConfig {
        exhaustive_max_vertices: *matches.get_one::<usize>("exhaustive_max_vertices").unwrap(),
        ..Default::default()
    };
    let chosen: Option<Vec<Strategy>> = matches
        .get_many::<Strategy>("strategy")
        .map(|chosen| chosen.copied().collect());

    let mut loggers = match matches.get_one::<String>("output_dir") {
        Some(dir) => {
            let strategies = chosen.clone().unwrap_or_else(|| config.strategies());
            Some(StrategyLoggers::open(Path::new(dir), &strategies)?)
        }
        None => None,
    };

    let mut rng = StdRng::seed_from_u64(*matches.get_one::<u64>("seed").unwrap());

    for (path, graph) in &graphs {
        let strategies = chosen
            .clone()
            .unwrap_or_else(|| config.strategies_for(graph.n()));

        println!(
            "\n{} ({} vertices, {} edges)",
            path.display(),
            graph.n(),
            graph.num_edges()
        );
        for (strategy, record) in run_strategies(graph, None, &strategies, &mut rng) {
            println!(
                "  {:<16} k = {:<4} {:>10.4} ms  ops = {:<12} configs = {:<10} precision = {}",
                strategy.to_string(),
                record.chromatic_number,
                record.exec_time_ms,
                record.counts.basic_operations,
                record.counts.configurations_tested,
                record
                    .precision
                    .map(|p| p.to_string())
                    .unwrap_or_else(|| "-".to_string())
            );
            if let Some(loggers) = loggers.as_mut() {
                loggers.write(strategy, &record)?;
            }
        }
    }

    if let Some(dir) = matches.get_one::<String>("output_dir") {
        println!("\nResults appended to {}", dir);
    }

    Ok(())
}
