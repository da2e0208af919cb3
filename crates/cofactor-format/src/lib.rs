//! # cofactor-format
//!
//! Input parsing for Cofactor.
//!
//! Multiplication-circuit CNFs arrive as DIMACS text with a Purdom-Sabry
//! comment header carrying the product and the factor variable lists. This
//! crate turns that text into the engine's clause model:
//!
//! - **Header**: regex extraction of the product, `p cnf` counts and the
//!   two input-variable lists
//! - **Clauses**: line-oriented extraction of unit and ternary clauses

pub mod dimacs;
pub mod header;

pub use dimacs::CircuitCnf;
pub use header::Header;
