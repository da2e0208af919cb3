//! Unified error types for Cofactor.

use thiserror::Error;

/// The main error type for Cofactor operations.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input file contained no data.
    #[error("Input file is empty: {0}")]
    EmptyInput(String),

    /// A mandatory DIMACS header field could not be extracted.
    #[error("Missing DIMACS header field: {0}")]
    MissingHeader(&'static str),

    /// The parser produced no clauses.
    #[error("No clauses parsed from DIMACS input")]
    NoClauses,

    /// Invalid run configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
