//! # cofactor-base
//!
//! Core types and utilities for the Cofactor SAT factoring engine.
//!
//! This crate provides the foundational building blocks used across all
//! other Cofactor crates, including:
//!
//! - **Clause Model**: fixed-width three-slot clauses and clause sets
//! - **Buffer Pool**: clause-set recycling for the splitter hot loop
//! - **Error Types**: unified error handling across the engine
//! - **Utilities**: hashing helpers

pub mod clause;
pub mod error;
pub mod pool;
pub mod utils;

pub use clause::{has_conflict, Clause, ClauseSet, Lit};
pub use error::{Error, Result};
pub use pool::ClausePool;
