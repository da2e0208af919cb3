//! # cofactor-worker
//!
//! The parallel DFS driver.
//!
//! Takes the frontier produced by the BFS phase and races a pool of worker
//! threads over it: each worker pops tasks from a shared queue and runs the
//! sequential DFS in first-assignment mode. The first worker to find a
//! satisfying extension publishes it and every other worker winds down.
//! A drained frontier with no winner means the formula is unsatisfiable.

pub mod pool;

pub use pool::{run_search, SearchOutcome};
