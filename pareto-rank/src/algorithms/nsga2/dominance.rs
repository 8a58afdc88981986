#[cfg(test)]
#[path = "../../../tests/unit/algorithms/nsga2/dominance_test.rs"]
mod dominance_test;

use crate::utils::compare_floats;
use std::cmp::Ordering;

/// Calculates dominance order of two objective vectors where every objective is minimized.
///
/// Returns `Ordering::Less` when `a` dominates `b`: `a` is not worse than `b` in all objectives
/// and strictly better in at least one. `Ordering::Greater` is returned when `b` dominates `a`,
/// `Ordering::Equal` when vectors are identical or incomparable. As a consequence, a vector never
/// dominates itself.
///
/// Both vectors are expected to have the same length and finite values only, as guaranteed by
/// `ObjectiveMatrix`. Ordering of non-finite values is unspecified.
pub fn dominance_order(a: &[f64], b: &[f64]) -> Ordering {
    debug_assert_eq!(a.len(), b.len());
    debug_assert!(a.iter().chain(b.iter()).all(|value| value.is_finite()));

    let mut less_cnt = 0;
    let mut greater_cnt = 0;

    for (left, right) in a.iter().zip(b.iter()) {
        match compare_floats(*left, *right) {
            Ordering::Less => less_cnt += 1,
            Ordering::Greater => greater_cnt += 1,
            Ordering::Equal => {}
        }

        // incomparable already, no need to check the rest
        if less_cnt > 0 && greater_cnt > 0 {
            return Ordering::Equal;
        }
    }

    if less_cnt > 0 && greater_cnt == 0 {
        Ordering::Less
    } else if greater_cnt > 0 && less_cnt == 0 {
        Ordering::Greater
    } else {
        debug_assert!(less_cnt == 0 && greater_cnt == 0);
        Ordering::Equal
    }
}

/// Checks whether `a` dominates `b`.
pub fn dominates(a: &[f64], b: &[f64]) -> bool {
    dominance_order(a, b) == Ordering::Less
}
