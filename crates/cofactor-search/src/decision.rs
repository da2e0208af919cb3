//! Branch-variable selection.

use cofactor_base::{Clause, Lit};

/// Picks the pivot variable for a clause set.
///
/// Scans in clause order: the first unit clause (two holes) wins, then the
/// first two-literal clause (one hole) decides via its trailing nonzero
/// slot, then the first nonzero slot of the leading clause. Ties are
/// broken by clause-set order, never by literal value, so the search is
/// reproducible for a given parse order.
///
/// Returns `0` when the set is empty, which the callers treat as "already
/// satisfied".
#[must_use]
pub fn choice(set: &[Clause]) -> Lit {
    for clause in set {
        if clause.holes() == 2 {
            return clause.first_lit().map_or(0, Lit::abs);
        }
    }
    for clause in set {
        if clause.holes() == 1 {
            return clause.last_lit().map_or(0, Lit::abs);
        }
    }
    match set.first() {
        Some(clause) => clause.first_lit().map_or(0, Lit::abs),
        None => 0,
    }
}
