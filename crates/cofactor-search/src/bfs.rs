//! Breadth-first frontier expansion.

use crate::decision::choice;
use crate::resolve::resolution_step;
use crate::task::{Frontier, Task};
use cofactor_base::{has_conflict, ClauseSet};

/// Bounds governing frontier growth.
#[derive(Debug, Clone)]
pub struct ExpandLimits {
    /// Upper bound on expansion iterations.
    pub max_depth: usize,
    /// Upper bound on cumulative tasks produced, root included.
    pub max_tasks: usize,
    /// When set, caps the simultaneous frontier size and supersedes the
    /// task-count bound.
    pub max_queues: Option<usize>,
    /// When true, the task-count bound is ignored and only depth applies.
    pub override_max_tasks: bool,
}

/// Outcome of the expansion phase.
#[derive(Debug)]
pub struct Expansion {
    /// The open tasks to hand to the DFS phase.
    pub frontier: Frontier,
    /// Cumulative tasks produced, root included.
    pub task_count: usize,
    /// Expansion iterations performed.
    pub iterations: usize,
}

/// Grows a frontier from the root clause set under the given limits.
///
/// Each step pops the head task, splits it on its pivot and enqueues every
/// child that is neither empty nor conflicting. Terminal children are
/// simply discarded here; deciding satisfiability is the DFS phase's job on
/// whatever remains in the frontier.
///
/// Expansion stops at the first bound to trip: queue drained, frontier size
/// at `max_queues`, task count at `max_tasks`, or iterations at
/// `max_depth` (see [`ExpandLimits`] for which bound applies when).
#[must_use]
pub fn expand(root: ClauseSet, limits: &ExpandLimits) -> Expansion {
    let mut frontier = Frontier::new();
    frontier.push_back(Task::root(root));
    let mut task_count: usize = 1;
    let mut iterations: usize = 0;

    loop {
        if let Some(cap) = limits.max_queues {
            if frontier.len() >= cap {
                break;
            }
        } else if !limits.override_max_tasks && task_count >= limits.max_tasks {
            break;
        }
        let Some(task) = frontier.pop_front() else {
            break;
        };

        let pivot = choice(&task.clauses);
        if pivot == 0 {
            // An already-satisfied task cannot reach the frontier before
            // the configured bound trips; if one does, that is a bug in
            // the expansion bounds, not a solution to record.
            debug_assert!(
                !task.clauses.is_empty(),
                "solved task reached the BFS frontier"
            );
            tracing::warn!(depth = iterations, "dropping solved task from BFS frontier");
            continue;
        }

        let (left, right) = resolution_step(&task.clauses, pivot);
        for (child, lit) in [(left, pivot), (right, -pivot)] {
            if child.is_empty() || has_conflict(&child) {
                continue;
            }
            let mut path = task.path.clone();
            path.push(lit);
            frontier.push_back(Task {
                clauses: child,
                path,
            });
            task_count += 1;
            tracing::debug!(
                queue = frontier.len(),
                depth = iterations + 1,
                tasks = task_count,
                "frontier grown"
            );
        }

        iterations += 1;
        if limits.max_queues.is_none() && iterations >= limits.max_depth {
            break;
        }
    }

    Expansion {
        frontier,
        task_count,
        iterations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cofactor_base::Clause;

    fn chain(n: i32) -> ClauseSet {
        // x1, x1 -> x2, ..., x(n-1) -> xn as 3-slot clauses with holes.
        let mut set = vec![Clause::unit(1)];
        for v in 1..n {
            set.push(Clause::new(0, -v, v + 1));
        }
        set
    }

    fn unlimited() -> ExpandLimits {
        ExpandLimits {
            max_depth: usize::MAX,
            max_tasks: usize::MAX,
            max_queues: None,
            override_max_tasks: false,
        }
    }

    #[test]
    fn test_zero_queue_cap_returns_root_only() {
        let limits = ExpandLimits {
            max_queues: Some(0),
            ..unlimited()
        };
        let expansion = expand(chain(4), &limits);
        assert_eq!(expansion.frontier.len(), 1);
        assert_eq!(expansion.task_count, 1);
        assert_eq!(expansion.iterations, 0);
        assert!(expansion.frontier[0].path.is_empty());
    }

    #[test]
    fn test_queue_cap_bounds_frontier() {
        let limits = ExpandLimits {
            max_queues: Some(4),
            ..unlimited()
        };
        let expansion = expand(chain(8), &limits);
        assert!(expansion.frontier.len() <= 4);
    }

    #[test]
    fn test_task_bound_stops_expansion() {
        let limits = ExpandLimits {
            max_tasks: 3,
            max_depth: usize::MAX,
            max_queues: None,
            override_max_tasks: false,
        };
        let expansion = expand(chain(8), &limits);
        assert!(expansion.task_count >= 3);
    }

    #[test]
    fn test_depth_bound_stops_expansion() {
        let limits = ExpandLimits {
            max_depth: 2,
            max_tasks: usize::MAX,
            max_queues: None,
            override_max_tasks: true,
        };
        let expansion = expand(chain(8), &limits);
        assert_eq!(expansion.iterations, 2);
    }

    #[test]
    fn test_paths_have_distinct_variables() {
        let limits = ExpandLimits {
            max_depth: 6,
            max_tasks: usize::MAX,
            max_queues: None,
            override_max_tasks: true,
        };
        let expansion = expand(chain(8), &limits);
        for task in &expansion.frontier {
            let mut vars: Vec<i32> = task.path.iter().map(|l| l.abs()).collect();
            vars.sort_unstable();
            let len = vars.len();
            vars.dedup();
            assert_eq!(vars.len(), len, "path repeats a variable");
        }
    }
}
