//! Purdom-Sabry header extraction.
//!
//! The CNF generator records the product and the factor variable lists in
//! comment lines; these are pulled out of the raw text with regexes before
//! any clause parsing happens.

use cofactor_base::{Error, Lit, Result};
use num_bigint::BigUint;
use once_cell::sync::Lazy;
use regex::Regex;

static RE_PRODUCT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Circuit for product = ([0-9]+) \[").expect("valid regex"));
static RE_PROBLEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"p cnf ([0-9]+) ([0-9]+)").expect("valid regex"));
static RE_FIRST_INPUT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Variables for first input \[msb,\.\.\.,lsb\]: \[(.*?)\]").expect("valid regex")
});
static RE_SECOND_INPUT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Variables for second input \[msb,\.\.\.,lsb\]: \[(.*?)\]").expect("valid regex")
});

/// Header fields of a Purdom-Sabry multiplication CNF.
#[derive(Debug, Clone)]
pub struct Header {
    /// The product the circuit multiplies to.
    pub input_number: BigUint,
    /// Declared variable count from the `p cnf` line.
    pub num_vars: usize,
    /// Declared clause count from the `p cnf` line.
    pub num_clauses: usize,
    /// Bit width reported by the generator (final entry of `second_input`).
    pub num_bits: usize,
    /// Variable indices of the first factor, MSB to LSB.
    pub first_input: Vec<Lit>,
    /// Variable indices of the second factor, MSB to LSB.
    pub second_input: Vec<Lit>,
}

impl Header {
    /// Extracts the header fields from raw DIMACS text.
    ///
    /// The product line and the `p cnf` line are mandatory. A missing
    /// input-variable list is only logged: the search can still run, the
    /// corresponding factor just decodes to zero.
    pub fn parse(text: &str) -> Result<Self> {
        let input_number = RE_PRODUCT
            .captures(text)
            .and_then(|c| c[1].parse::<BigUint>().ok())
            .ok_or(Error::MissingHeader("Circuit for product"))?;

        let problem = RE_PROBLEM
            .captures(text)
            .ok_or(Error::MissingHeader("p cnf"))?;
        let num_vars = problem[1]
            .parse::<usize>()
            .map_err(|_| Error::MissingHeader("p cnf"))?;
        let num_clauses = problem[2]
            .parse::<usize>()
            .map_err(|_| Error::MissingHeader("p cnf"))?;

        let first_input = input_list(text, &RE_FIRST_INPUT, "first");
        let second_input = input_list(text, &RE_SECOND_INPUT, "second");
        let num_bits = second_input.last().map_or(0, |&v| v as usize);

        Ok(Self {
            input_number,
            num_vars,
            num_clauses,
            num_bits,
            first_input,
            second_input,
        })
    }
}

fn input_list(text: &str, re: &Regex, which: &str) -> Vec<Lit> {
    match re.captures(text) {
        Some(caps) => caps[1]
            .split(',')
            .filter_map(|tok| tok.trim().parse::<Lit>().ok())
            .collect(),
        None => {
            tracing::warn!("could not find '{which} input' section in the DIMACS header");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
c Circuit for product = 15 [4 bits]
c Variables for first input [msb,...,lsb]: [2, 1]
c Variables for second input [msb,...,lsb]: [5, 4, 3]
p cnf 5 6
";

    #[test]
    fn test_parse_header() {
        let header = Header::parse(SAMPLE).unwrap();
        assert_eq!(header.input_number, BigUint::from(15u32));
        assert_eq!(header.num_vars, 5);
        assert_eq!(header.num_clauses, 6);
        assert_eq!(header.first_input, vec![2, 1]);
        assert_eq!(header.second_input, vec![5, 4, 3]);
        assert_eq!(header.num_bits, 3);
    }

    #[test]
    fn test_missing_product_is_fatal() {
        let text = "p cnf 3 2\n1 0\n";
        assert!(matches!(
            Header::parse(text),
            Err(Error::MissingHeader("Circuit for product"))
        ));
    }

    #[test]
    fn test_missing_problem_line_is_fatal() {
        let text = "c Circuit for product = 15 [4 bits]\n1 0\n";
        assert!(matches!(
            Header::parse(text),
            Err(Error::MissingHeader("p cnf"))
        ));
    }

    #[test]
    fn test_missing_input_lists_warn_only() {
        let text = "c Circuit for product = 15 [4 bits]\np cnf 3 2\n";
        let header = Header::parse(text).unwrap();
        assert!(header.first_input.is_empty());
        assert!(header.second_input.is_empty());
        assert_eq!(header.num_bits, 0);
    }
}
