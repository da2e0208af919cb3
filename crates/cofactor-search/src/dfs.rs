//! Sequential depth-first assignment search.

use crate::decision::choice;
use crate::resolve::resolution_step_into;
use cofactor_base::{has_conflict, ClausePool, ClauseSet, Lit};
use std::collections::HashSet;

/// Searches a clause set depth-first, collecting satisfying assignments.
///
/// Works an explicit stack of (clause set, decision path) pairs. A conflict
/// clause kills its branch; an empty clause set means the path so far is a
/// satisfying assignment. Assignments are deduplicated, and with
/// `first_assignment` the search stops at the first one recorded.
///
/// The left child is pushed before the right, so the `i := false` branch is
/// explored first. The traversal is deterministic for a given clause set.
#[must_use]
pub fn satisfy_iterative(root: ClauseSet, first_assignment: bool) -> Vec<Vec<Lit>> {
    let mut pool = ClausePool::new();
    let mut stack: Vec<(ClauseSet, Vec<Lit>)> = vec![(root, Vec::new())];
    let mut results: Vec<Vec<Lit>> = Vec::new();
    let mut seen: HashSet<Vec<Lit>> = HashSet::new();

    while let Some((set, path)) = stack.pop() {
        if has_conflict(&set) {
            pool.release(set);
            continue;
        }

        let pivot = choice(&set);
        if pivot == 0 {
            if seen.insert(path.clone()) {
                results.push(path);
                if first_assignment {
                    return results;
                }
            }
            pool.release(set);
            continue;
        }

        let mut left = pool.obtain(set.len());
        let mut right = pool.obtain(set.len());
        resolution_step_into(&set, pivot, &mut left, &mut right);
        pool.release(set);

        for (child, lit) in [(left, pivot), (right, -pivot)] {
            if child.is_empty() {
                let mut extended = path.clone();
                extended.push(lit);
                if seen.insert(extended.clone()) {
                    results.push(extended);
                    if first_assignment {
                        return results;
                    }
                }
                pool.release(child);
            } else if has_conflict(&child) {
                pool.release(child);
            } else {
                let mut extended = path.clone();
                extended.push(lit);
                stack.push((child, extended));
            }
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use cofactor_base::Clause;

    #[test]
    fn test_empty_set_is_satisfied_by_empty_path() {
        let results = satisfy_iterative(ClauseSet::new(), false);
        assert_eq!(results, vec![Vec::<Lit>::new()]);
    }

    #[test]
    fn test_conflict_clause_kills_search() {
        let results = satisfy_iterative(vec![Clause::CONFLICT], false);
        assert!(results.is_empty());
    }

    #[test]
    fn test_single_unit() {
        let results = satisfy_iterative(vec![Clause::unit(3)], false);
        assert_eq!(results, vec![vec![3]]);
    }

    #[test]
    fn test_contradicting_units_unsat() {
        let results = satisfy_iterative(vec![Clause::unit(1), Clause::unit(-1)], false);
        assert!(results.is_empty());
    }

    #[test]
    fn test_first_assignment_mode_is_deterministic() {
        let set = vec![Clause::new(1, 2, 3), Clause::new(-1, -2, -3)];
        let first = satisfy_iterative(set.clone(), true);
        assert_eq!(first.len(), 1);
        for _ in 0..10 {
            assert_eq!(satisfy_iterative(set.clone(), true), first);
        }
    }

    #[test]
    fn test_assignments_never_repeat_a_variable() {
        let set = vec![
            Clause::new(1, 2, 3),
            Clause::new(-1, 2, -3),
            Clause::new(1, -2, 3),
        ];
        for assignment in satisfy_iterative(set, false) {
            let mut vars: Vec<Lit> = assignment.iter().map(|l| l.abs()).collect();
            vars.sort_unstable();
            let len = vars.len();
            vars.dedup();
            assert_eq!(vars.len(), len, "assignment repeats a variable");
        }
    }
}
