//! Run-configuration resolution.

use crate::Cli;
use cofactor_base::{Error, Result};
use cofactor_format::Header;
use cofactor_search::ExpandLimits;
use std::path::PathBuf;
use std::thread;

/// Fully-resolved run configuration: BFS bounds, core budget and output
/// placement.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Bounds for the BFS expansion phase.
    pub limits: ExpandLimits,
    /// Cores reported by the operating system.
    pub total_cores: usize,
    /// Cores the search may use.
    pub usable_cores: usize,
    /// Cores held back for the system.
    pub reserve_cores: usize,
    /// Directory the report is written to.
    pub output_directory: PathBuf,
    /// Bound token for the output filename: `q<n>`, `d<n>`, `t<n>` or
    /// `auto`.
    pub flag: String,
}

impl RunConfig {
    /// Resolves CLI arguments against the parsed header.
    ///
    /// Without an explicit bound, BFS is allowed `num_clauses - num_vars`
    /// tasks and as many iterations. `--max-tasks` also pins the depth,
    /// `--depth` drops the task bound entirely and `--max-queues`
    /// supersedes both.
    pub fn resolve(cli: &Cli, header: &Header) -> Result<Self> {
        let total_cores = thread::available_parallelism().map_or(1, |n| n.get());
        if cli.reserve_cores > total_cores {
            return Err(Error::Config(format!(
                "reserve_cores ({}) exceeds total cores ({total_cores})",
                cli.reserve_cores
            )));
        }
        let mut usable_cores = total_cores - cli.reserve_cores;
        if usable_cores == 0 {
            tracing::warn!("all cores reserved, running on a single worker");
            usable_cores = 1;
        }

        let default_tasks = header.num_clauses.saturating_sub(header.num_vars);
        let override_max_tasks = cli.depth.is_some();
        let max_tasks = cli.max_tasks.unwrap_or(default_tasks);
        let max_depth = cli.depth.or(cli.max_tasks).unwrap_or(default_tasks);

        let flag = if let Some(queues) = cli.max_queues {
            format!("q{queues}")
        } else if let Some(depth) = cli.depth {
            format!("d{depth}")
        } else if let Some(tasks) = cli.max_tasks {
            format!("t{tasks}")
        } else {
            "auto".to_string()
        };

        let output_directory = match &cli.output_directory {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };

        Ok(Self {
            limits: ExpandLimits {
                max_depth,
                max_tasks,
                max_queues: cli.max_queues,
                override_max_tasks,
            },
            total_cores,
            usable_cores,
            reserve_cores: cli.reserve_cores,
            output_directory,
            flag,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cli;
    use clap::Parser;
    use num_bigint::BigUint;

    fn cli(extra: &[&str]) -> Cli {
        let mut argv = vec!["cofactor".to_string(), "toy15.dimacs".to_string()];
        argv.extend(extra.iter().map(|arg| (*arg).to_string()));
        Cli::parse_from(argv)
    }

    fn header(num_vars: usize, num_clauses: usize) -> Header {
        Header {
            input_number: BigUint::from(15u32),
            num_vars,
            num_clauses,
            num_bits: 4,
            first_input: vec![2, 1],
            second_input: vec![5, 4, 3],
        }
    }

    #[test]
    fn test_default_bounds() {
        let config = RunConfig::resolve(&cli(&[]), &header(10, 40)).unwrap();
        assert_eq!(config.limits.max_tasks, 30);
        assert_eq!(config.limits.max_depth, 30);
        assert_eq!(config.limits.max_queues, None);
        assert!(!config.limits.override_max_tasks);
        assert_eq!(config.flag, "auto");
        assert_eq!(config.reserve_cores, 0);
        assert!(config.usable_cores >= 1);
        assert!(config.usable_cores <= config.total_cores);
    }

    #[test]
    fn test_depth_drops_the_task_bound() {
        let config = RunConfig::resolve(&cli(&["-d", "500"]), &header(10, 40)).unwrap();
        assert!(config.limits.override_max_tasks);
        assert_eq!(config.limits.max_depth, 500);
        assert_eq!(config.flag, "d500");
    }

    #[test]
    fn test_max_tasks_pins_depth() {
        let config = RunConfig::resolve(&cli(&["-t", "100"]), &header(10, 40)).unwrap();
        assert_eq!(config.limits.max_tasks, 100);
        assert_eq!(config.limits.max_depth, 100);
        assert!(!config.limits.override_max_tasks);
        assert_eq!(config.flag, "t100");
    }

    #[test]
    fn test_max_queues_supersedes_other_bounds() {
        let config = RunConfig::resolve(&cli(&["-q", "4", "-t", "100"]), &header(10, 40)).unwrap();
        assert_eq!(config.limits.max_queues, Some(4));
        assert_eq!(config.flag, "q4");
    }

    #[test]
    fn test_reserve_exceeding_total_cores_aborts() {
        let huge = usize::MAX.to_string();
        let result = RunConfig::resolve(&cli(&["-r", &huge]), &header(10, 40));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_output_directory_flag_is_kept() {
        let config = RunConfig::resolve(&cli(&["-o", "/tmp/results"]), &header(10, 40)).unwrap();
        assert_eq!(config.output_directory, PathBuf::from("/tmp/results"));
    }
}
