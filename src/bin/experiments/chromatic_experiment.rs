use clap::{Arg, Command};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Instant;

use chromatic::coloring::Strategy;
use chromatic::experiment::{run_strategies, Configuration, ExperimentConfig};
use chromatic::util::cache::load_or_generate;
use chromatic::util::results::{ExperimentRecord, StrategyLoggers};
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let matches = Command::new("chromatic_experiment")
        .about("Colors random graphs over a range of sizes and edge densities, logging to CSV")
        .arg(
            Arg::new("min_vertices")
                .long("min-vertices")
                .value_name("N")
                .value_parser(clap::value_parser!(usize))
                .default_value("4"),
        )
        .arg(
            Arg::new("max_vertices")
                .long("max-vertices")
                .short('n')
                .value_name("N")
                .value_parser(clap::value_parser!(usize))
                .default_value("100"),
        )
        .arg(
            Arg::new("densities")
                .long("densities")
                .short('e')
                .value_name("PCT,...")
                .help("Edge percentages of the generated graphs")
                .value_parser(clap::value_parser!(f64))
                .value_delimiter(',')
                .default_value("12.5,25,50,75"),
        )
        .arg(
            Arg::new("exhaustive_max_vertices")
                .long("exhaustive-max-vertices")
                .value_name("N")
                .help("Largest graph the exhaustive search is run on")
                .value_parser(clap::value_parser!(usize))
                .default_value("10"),
        )
        .arg(
            Arg::new("trials")
                .long("trials")
                .short('t')
                .value_name("COUNT")
                .help("Random orders per graph for the randomized greedy (default: min(500, 6n))")
                .value_parser(clap::value_parser!(usize)),
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
            Arg::new("graph_dir")
                .long("graph-dir")
                .value_name("DIR")
                .default_value("graphs"),
        )
        .arg(
            Arg::new("output_dir")
                .long("output-dir")
                .short('o')
                .value_name("DIR")
                .default_value("results"),
        )
        .get_matches();

    let config = ExperimentConfig {
        min_vertices: *matches.get_one::<usize>("min_vertices").unwrap(),
        max_vertices: *matches.get_one::<usize>("max_vertices").unwrap(),
        densities: matches.get_many::<f64>("densities").unwrap().copied().collect(),
        exhaustive_max_vertices: *matches.get_one::<usize>("exhaustive_max_vertices").unwrap(),
        random_trials: matches.get_one::<usize>("trials").copied(),
        seed: *matches.get_one::<u64>("seed").unwrap(),
        graph_dir: PathBuf::from(matches.get_one::<String>("graph_dir").unwrap()),
        output_dir: PathBuf::from(matches.get_one::<String>("output_dir").unwrap()),
    };

    // rows are written as soon as a configuration finishes
    let loggers = Mutex::new(StrategyLoggers::open(
        &config.output_dir,
        &config.strategies(),
    )?);

    let configurations = config.configurations();
    println!(
        "Running {} configurations ({}..={} vertices, densities {:?})",
        configurations.len(),
        config.min_vertices,
        config.max_vertices,
        config.densities
    );

    let pb = ProgressBar::new(configurations.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} {wide_bar:.green/gray} {pos}/{len} [{elapsed_precise}]({eta})")
            .unwrap()
            .progress_chars("█▓░"),
    );
    pb.set_message("Coloring graphs");

    let start = Instant::now();

    // each configuration owns its graph and rng
    let results: Vec<(Configuration, Vec<(Strategy, ExperimentRecord)>)> = configurations
        .par_iter()
        .progress_with(pb.clone())
        .filter_map(|&cfg| {
            let mut rng = cfg.rng(config.seed);
            let graph =
                match load_or_generate(&config.graph_dir, cfg.vertices, cfg.edge_pct, &mut rng) {
                    Ok(graph) => graph,
                    Err(e) => {
                        warn!(
                            vertices = cfg.vertices,
                            edge_pct = cfg.edge_pct,
                            error = %e,
                            "could not obtain graph, skipping"
                        );
                        return None;
                    }
                };
            let records = run_strategies(
                &graph,
                Some(cfg.edge_pct),
                &config.strategies_for(cfg.vertices),
                &mut rng,
            );

            let mut loggers = loggers.lock().unwrap();
            for (strategy, record) in &records {
                if let Err(e) = loggers.write(*strategy, record) {
                    warn!(strategy = strategy.name(), error = %e, "could not write result row");
                }
            }
            Some((cfg, records))
        })
        .collect();

    pb.finish_with_message("Colored graphs");
    let elapsed = start.elapsed();
    println!(
        "ran {} configurations in {}.{:03} seconds",
        results.len(),
        elapsed.as_secs(),
        elapsed.subsec_millis()
    );

    for (cfg, records) in &results {
        println!("\n({} vertices, {}% edges)", cfg.vertices, cfg.edge_pct);
        for (strategy, record) in records {
            println!(
                "  {:<16} k = {:<3} {:>10.4} ms  ops = {:<12} configs = {}",
                strategy.name(),
                record.chromatic_number,
                record.exec_time_ms,
                record.counts.basic_operations,
                record.counts.configurations_tested
            );
        }
    }

    println!(
        "\nExperiment complete. Results saved to {}",
        config.output_dir.display()
    );
    Ok(())
}
