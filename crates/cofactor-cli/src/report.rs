//! Result report construction and output naming.

use chrono::Utc;
use cofactor_base::utils::fast_hash;
use num_bigint::BigUint;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::Write as _;

/// Engine version stamped into every report.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

static RE_LONG_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{5})(\d+)").expect("valid regex"));

/// What the search concluded about the input number.
#[derive(Debug)]
pub enum Outcome {
    /// A satisfying assignment decoded into two factors.
    Factored {
        /// First factor.
        fact1: BigUint,
        /// Second factor.
        fact2: BigUint,
        /// Whether `fact1 * fact2` reproduces the input number.
        verified: bool,
    },
    /// The frontier drained without a winner.
    Prime,
}

/// Everything the plain-text report contains.
#[derive(Debug)]
pub struct Report {
    /// Bit width from the generator header.
    pub num_bits: usize,
    /// Declared variable count.
    pub num_vars: usize,
    /// Declared clause count.
    pub num_clauses: usize,
    /// The product under factorization.
    pub input_number: BigUint,
    /// Search conclusion.
    pub outcome: Outcome,
    /// BFS wall time in seconds.
    pub bfs_secs: f64,
    /// DFS wall time in seconds.
    pub dfs_secs: f64,
    /// End-to-end wall time in seconds.
    pub total_secs: f64,
    /// Cores reported by the operating system.
    pub total_cores: usize,
    /// Cores the search was allowed to use.
    pub used_cores: usize,
    /// Worker threads in the DFS phase.
    pub dfs_threads: usize,
    /// Frontier size handed to the DFS phase.
    pub queue_size: usize,
    /// BFS iterations performed.
    pub depth: usize,
    /// Cumulative BFS tasks.
    pub tasks: usize,
    /// Input path as given on the command line.
    pub dimacs: String,
    /// UTC timestamp of the run.
    pub utc_time: String,
    /// 16-hex run identifier.
    pub problem_id: String,
}

impl Report {
    /// Renders the report text written to the output file and echoed to
    /// stdout.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "        Bits: {}", self.num_bits);
        let _ = writeln!(out, "        VARs: {}", self.num_vars);
        let _ = writeln!(out, "     Clauses: {}", self.num_clauses);
        let _ = writeln!(out);
        let _ = writeln!(out, "Input Number: {}", self.input_number);
        match &self.outcome {
            Outcome::Factored {
                fact1,
                fact2,
                verified,
            } => {
                let _ = writeln!(out, "      FACT 1: {fact1}");
                let _ = writeln!(out, "      FACT 2: {fact2}");
                let verdict = if *verified { "verified." } else { "FALSE" };
                let _ = writeln!(out, "              {verdict}");
            }
            Outcome::Prime => {
                let _ = writeln!(out, "              Prime!");
            }
        }
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "    BFS time: {} seconds ({})",
            self.bfs_secs,
            format_percentage(self.bfs_secs, self.total_secs)
        );
        let _ = writeln!(out, "              {}", format_duration(self.bfs_secs));
        let _ = writeln!(
            out,
            "    DFS time: {} seconds ({})",
            self.dfs_secs,
            format_percentage(self.dfs_secs, self.total_secs)
        );
        let _ = writeln!(out, "              {}", format_duration(self.dfs_secs));
        let _ = writeln!(out, "  Total time: {} seconds", self.total_secs);
        let _ = writeln!(out, "              {}", format_duration(self.total_secs));
        let _ = writeln!(out, " Total Cores: {}", self.total_cores);
        let _ = writeln!(out, "  Used Cores: {}", self.used_cores);
        let _ = writeln!(out, " DFS Threads: {}", self.dfs_threads);
        let _ = writeln!(out, "  Queue Size: {}", self.queue_size);
        let _ = writeln!(out, "       Depth: {}", self.depth);
        let _ = writeln!(out, "       Tasks: {}", self.tasks);
        let _ = writeln!(out, "     Version: {VERSION}");
        let _ = writeln!(out, "      DIMACS: {}", self.dimacs);
        let _ = writeln!(out, "   Zulu time: {}", self.utc_time);
        let _ = writeln!(out, "  Problem ID: {}", self.problem_id);
        out
    }
}

/// Formats seconds as a human-readable duration.
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    const MINUTE: f64 = 60.0;
    const HOUR: f64 = 60.0 * MINUTE;
    const DAY: f64 = 24.0 * HOUR;
    const MONTH: f64 = 30.0 * DAY;

    let mut rest = seconds;
    let mut out = String::new();
    let months = (rest / MONTH) as u64;
    rest -= months as f64 * MONTH;
    let days = (rest / DAY) as u64;
    rest -= days as f64 * DAY;
    let hours = (rest / HOUR) as u64;
    rest -= hours as f64 * HOUR;
    let minutes = (rest / MINUTE) as u64;
    rest -= minutes as f64 * MINUTE;

    if months > 0 {
        let _ = write!(out, "{months} months ");
    }
    if days > 0 {
        let _ = write!(out, "{days} days ");
    }
    if hours > 0 {
        let _ = write!(out, "{hours} hours ");
    }
    if minutes > 0 {
        let _ = write!(out, "{minutes} minutes ");
    }
    let _ = write!(out, "{rest} seconds");
    out
}

/// Formats `part` as a percentage of `total` with two decimals.
#[must_use]
pub fn format_percentage(part: f64, total: f64) -> String {
    let percentage = if total > 0.0 {
        part / total * 100.0
    } else {
        0.0
    };
    format!("{percentage:.2}%")
}

/// Current UTC time in the report's fixed format.
#[must_use]
pub fn current_utc_time() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Derives the 16-hex run identifier from the run parameters.
#[must_use]
pub fn problem_id(
    input_number: &BigUint,
    num_bits: usize,
    num_threads: usize,
    utc_time: &str,
) -> String {
    let data = format!("{input_number}-{num_bits}-{num_threads}-{utc_time}");
    format!("{:016x}", fast_hash(&data))
}

/// Builds the output filename from its parts.
///
/// Long digit runs in the input stem are collapsed (a five-digit prefix
/// followed by more digits becomes `<prefix>e<suffix>`) so filenames stay
/// readable for large products.
#[must_use]
pub fn output_filename(
    program: &str,
    input_stem: &str,
    problem_id: &str,
    flag: &str,
    reserve_cores: usize,
) -> String {
    let stem = sanitize_stem(input_stem);
    let short_id = &problem_id[..problem_id.len().min(5)];
    format!("{program}_{stem}_{short_id}_{flag}_r{reserve_cores}.txt")
}

fn sanitize_stem(name: &str) -> String {
    let base = name.strip_suffix(".dimacs").unwrap_or(name);
    RE_LONG_NUMBER.replace_all(base, "${1}e${2}").into_owned()
}
