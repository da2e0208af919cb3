//! Search tasks and the BFS frontier.

use cofactor_base::{ClauseSet, Lit};
use std::collections::VecDeque;

/// A unit of search work: a clause set plus the branch decisions that
/// produced it from the root.
#[derive(Debug, Clone)]
pub struct Task {
    /// The clause set still to be satisfied.
    pub clauses: ClauseSet,
    /// Literals chosen along the path from the root.
    pub path: Vec<Lit>,
}

impl Task {
    /// Creates the root task with an empty decision path.
    #[must_use]
    pub fn root(clauses: ClauseSet) -> Self {
        Self {
            clauses,
            path: Vec::new(),
        }
    }
}

/// FIFO queue of open tasks handed from the BFS phase to the DFS phase.
pub type Frontier = VecDeque<Task>;
