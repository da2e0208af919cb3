//! DIMACS CNF parsing for multiplication circuits.

use crate::header::Header;
use cofactor_base::{Clause, ClauseSet, Error, Lit, Result};
use std::fs;
use std::path::Path;

/// A parsed multiplication-circuit CNF: generator header plus clauses.
#[derive(Debug, Clone)]
pub struct CircuitCnf {
    /// Header fields from the generator comments.
    pub header: Header,
    /// The clauses, in file order.
    pub clauses: ClauseSet,
}

impl CircuitCnf {
    /// Parses a circuit CNF from raw DIMACS text.
    pub fn parse(text: &str) -> Result<Self> {
        let header = Header::parse(text)?;
        let clauses = parse_clauses(text);
        if clauses.is_empty() {
            return Err(Error::NoClauses);
        }
        Ok(Self { header, clauses })
    }

    /// Reads and parses a circuit CNF from a file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        if text.is_empty() {
            return Err(Error::EmptyInput(path.display().to_string()));
        }
        Self::parse(&text)
    }
}

/// Extracts clauses from DIMACS text.
///
/// Unit clauses become `{0, 0, x}` and ternary clauses `{x, y, z}`; the
/// generator emits nothing else, so any other arity is dropped.
fn parse_clauses(text: &str) -> ClauseSet {
    let mut clauses = ClauseSet::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('c') || line.starts_with('p') {
            continue;
        }
        let mut lits: Vec<Lit> = Vec::with_capacity(3);
        for token in line.split_whitespace() {
            match token.parse::<Lit>() {
                Ok(0) | Err(_) => break,
                Ok(lit) => lits.push(lit),
            }
        }
        match lits.len() {
            0 => {}
            1 => clauses.push(Clause::unit(lits[0])),
            3 => clauses.push(Clause::new(lits[0], lits[1], lits[2])),
            arity => {
                tracing::debug!(arity, line, "ignoring clause of unsupported arity");
            }
        }
    }
    clauses
}
