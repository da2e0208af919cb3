//! Cofactor CLI - parallel SAT factoring of multiplication-circuit CNFs.

mod config;
mod report;
mod solve;

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cofactor")]
#[command(author, version, about = "Parallel BFS/DFS SAT factoring engine", long_about = None)]
struct Cli {
    /// Input DIMACS file from the Purdom-Sabry CNF generator
    input: PathBuf,

    /// Custom bound on BFS iterations (ignores the task-count bound)
    #[arg(short, long)]
    depth: Option<usize>,

    /// Maximum cumulative BFS tasks
    #[arg(short = 't', long)]
    max_tasks: Option<usize>,

    /// Maximum simultaneous frontier size (supersedes --max-tasks)
    #[arg(short = 'q', long)]
    max_queues: Option<usize>,

    /// CPU cores reserved for the system
    #[arg(short, long, default_value_t = 0)]
    reserve_cores: usize,

    /// Directory for the result report (defaults to the working directory)
    #[arg(short, long)]
    output_directory: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    solve::run(&cli)
}

/// Maps repeated `-v` flags onto a log filter; an explicit `RUST_LOG`
/// takes precedence.
fn init_logging(verbose: u8) {
    const LEVELS: [&str; 4] = ["warn", "info", "debug", "trace"];
    let fallback = LEVELS[usize::from(verbose).min(LEVELS.len() - 1)];
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
