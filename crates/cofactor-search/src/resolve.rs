//! The resolution splitting operator.

use cofactor_base::{Clause, ClauseSet, Lit};

/// Produces the two successor clause sets for positive pivot `i`.
///
/// The left child assumes `i := true`: every nonzero slot is shifted by
/// `i`, any clause reaching the `2*i` marker is dropped (it contained `i`
/// and is satisfied), and surviving slots are shifted back. A slot holding
/// `-i` cancels to zero during the shift and stays a hole, which is how a
/// falsified literal leaves its clause. The right child mirrors the whole
/// procedure with `-i`.
#[must_use]
pub fn resolution_step(set: &[Clause], i: Lit) -> (ClauseSet, ClauseSet) {
    let mut left = ClauseSet::with_capacity(set.len());
    let mut right = ClauseSet::with_capacity(set.len());
    resolution_step_into(set, i, &mut left, &mut right);
    (left, right)
}

/// Pool-friendly variant of [`resolution_step`] writing into
/// caller-provided buffers. Both buffers must be empty.
pub fn resolution_step_into(set: &[Clause], i: Lit, left: &mut ClauseSet, right: &mut ClauseSet) {
    debug_assert!(i > 0, "pivot must be positive");
    shift_filter(set, i, left);
    for clause in left.iter_mut() {
        for lit in &mut clause.lits {
            if *lit != 0 {
                *lit -= i;
            }
        }
    }
    shift_filter(set, -i, right);
    for clause in right.iter_mut() {
        for lit in &mut clause.lits {
            if *lit != 0 {
                *lit += i;
            }
        }
    }
}

/// Shifts every nonzero slot by `shift`, dropping clauses that reach the
/// `2*shift` marker.
fn shift_filter(set: &[Clause], shift: Lit, out: &mut ClauseSet) {
    let marker = 2 * shift;
    'clauses: for clause in set {
        let mut shifted = Clause::CONFLICT;
        for (slot, &lit) in clause.lits.iter().enumerate() {
            if lit == 0 {
                continue;
            }
            let moved = lit + shift;
            if moved == marker {
                continue 'clauses;
            }
            shifted.lits[slot] = moved;
        }
        out.push(shifted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_satisfied_clause_dropped() {
        // {1, 2, 3} is satisfied by 1 := true and vanishes from the left
        // child; the right child keeps {0, 2, 3}.
        let set = vec![Clause::new(1, 2, 3)];
        let (left, right) = resolution_step(&set, 1);
        assert!(left.is_empty());
        assert_eq!(right, vec![Clause::new(0, 2, 3)]);
    }

    #[test]
    fn test_falsified_literal_becomes_hole() {
        let set = vec![Clause::new(-1, 2, 3)];
        let (left, right) = resolution_step(&set, 1);
        assert_eq!(left, vec![Clause::new(0, 2, 3)]);
        assert!(right.is_empty());
    }

    #[test]
    fn test_unit_clause_splits_into_conflict() {
        // Assigning the unit's variable the wrong way yields {0,0,0}.
        let set = vec![Clause::unit(5)];
        let (left, right) = resolution_step(&set, 5);
        assert!(left.is_empty());
        assert_eq!(right, vec![Clause::CONFLICT]);
    }

    #[test]
    fn test_untouched_clause_survives_both_sides() {
        let set = vec![Clause::new(2, 3, 4)];
        let (left, right) = resolution_step(&set, 7);
        assert_eq!(left, set);
        assert_eq!(right, set);
    }

    #[test]
    fn test_pivot_never_survives() {
        // Every retained clause keeps three slots, and the pivot variable
        // is gone from both children: satisfied clauses are dropped,
        // falsified occurrences collapse to holes.
        let set = vec![
            Clause::unit(1),
            Clause::new(-1, 2, -3),
            Clause::new(1, -2, 3),
        ];
        for pivot in 1..=3 {
            let (left, right) = resolution_step(&set, pivot);
            for clause in left.iter().chain(right.iter()) {
                for &lit in &clause.lits {
                    assert_ne!(lit.abs(), pivot);
                }
            }
        }
    }
}
