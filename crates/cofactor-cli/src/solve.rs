//! The end-to-end solve flow: parse, expand, race, decode, report.

use crate::config::RunConfig;
use crate::report::{self, Outcome, Report};
use crate::Cli;
use cofactor_format::CircuitCnf;
use cofactor_search::{decode_factors, expand};
use cofactor_worker::run_search;
use std::fs;
use std::time::Instant;

pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let CircuitCnf { header, clauses } = CircuitCnf::from_path(&cli.input)?;
    let config = RunConfig::resolve(cli, &header)?;

    println!("     Version: {}", report::VERSION);
    println!();
    println!(" Total Cores: {}", config.total_cores);
    println!("      System: {}", config.reserve_cores);
    println!("  Used Cores: {}", config.usable_cores);
    println!();
    println!("Input Number: {}", header.input_number);
    println!("        Bits: {}", header.num_bits);
    println!("     Clauses: {}", header.num_clauses);
    println!("        VARs: {}", header.num_vars);
    if let Some(queues) = config.limits.max_queues {
        println!("  Queue size: {queues}");
    } else if config.limits.override_max_tasks {
        println!("       Depth: {}", config.limits.max_depth);
    } else {
        println!("  BFS #Tasks: {}", config.limits.max_tasks);
    }
    println!();

    let bfs_start = Instant::now();
    let expansion = expand(clauses, &config.limits);
    let bfs_secs = bfs_start.elapsed().as_secs_f64();
    let queue_size = expansion.frontier.len();
    tracing::info!(
        queue = queue_size,
        tasks = expansion.task_count,
        depth = expansion.iterations,
        "BFS complete, DFS parallel initiated"
    );

    let dfs_start = Instant::now();
    let search = run_search(expansion.frontier, config.usable_cores);
    let dfs_secs = dfs_start.elapsed().as_secs_f64();
    let total_secs = bfs_start.elapsed().as_secs_f64();

    let outcome = match &search.assignment {
        Some(assignment) => {
            let (fact1, fact2) =
                decode_factors(assignment, &header.first_input, &header.second_input);
            let verified = fact1.clone() * fact2.clone() == header.input_number;
            Outcome::Factored {
                fact1,
                fact2,
                verified,
            }
        }
        None => Outcome::Prime,
    };

    let utc_time = report::current_utc_time();
    let problem_id = report::problem_id(
        &header.input_number,
        header.num_bits,
        config.usable_cores,
        &utc_time,
    );

    let summary = Report {
        num_bits: header.num_bits,
        num_vars: header.num_vars,
        num_clauses: header.num_clauses,
        input_number: header.input_number,
        outcome,
        bfs_secs,
        dfs_secs,
        total_secs,
        total_cores: config.total_cores,
        used_cores: config.usable_cores,
        dfs_threads: search.threads,
        queue_size,
        depth: expansion.iterations,
        tasks: expansion.task_count,
        dimacs: cli.input.display().to_string(),
        utc_time,
        problem_id: problem_id.clone(),
    };
    let text = summary.render();
    println!("{text}");

    let stem = cli
        .input
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("input");
    let filename = report::output_filename(
        "cofactor",
        stem,
        &problem_id,
        &config.flag,
        config.reserve_cores,
    );
    let output_path = config.output_directory.join(filename);
    fs::write(&output_path, &text)?;
    println!("Result saved: {}", output_path.display());

    Ok(())
}
