//! This module contains the ranking engine: it maps an objective matrix to a front rank per row.
//!
//! The engine is pure: it performs no I/O, keeps no state between calls and is deterministic, so
//! it can be called concurrently on independent matrices without any coordination.

#[cfg(test)]
#[path = "../../tests/unit/ranking/ranking_test.rs"]
mod ranking_test;

mod error;
pub use self::error::RankError;

mod matrix;
pub use self::matrix::ObjectiveMatrix;

use crate::algorithms::nsga2::non_dominated_sort;

/// A pareto front number, `1` denotes the best (non-dominated) front.
pub type Rank = usize;

/// Validates given rows of objective values and assigns a front rank to each of them.
///
/// Returns a rank per row in the order of rows. An empty input produces an empty result.
pub fn rank<R: AsRef<[f64]>>(rows: &[R]) -> Result<Vec<Rank>, RankError> {
    ObjectiveMatrix::new(rows).map(|matrix| rank_matrix(&matrix))
}

/// Assigns a front rank to each row of already validated `matrix`.
pub fn rank_matrix(matrix: &ObjectiveMatrix) -> Vec<Rank> {
    let mut ranks = vec![0; matrix.len()];

    let mut front = non_dominated_sort(matrix);
    while !front.is_empty() {
        let rank = front.rank();
        front.indices().iter().for_each(|&idx| {
            debug_assert_eq!(ranks[idx], 0);
            ranks[idx] = rank;
        });

        front = front.next_front();
    }

    debug_assert!(ranks.iter().all(|&rank| rank > 0));

    ranks
}

/// Returns row indices grouped by pareto fronts: the first element is the best front.
/// Indices within the same front are sorted in ascending order.
pub fn get_fronts(matrix: &ObjectiveMatrix) -> Vec<Vec<usize>> {
    let mut fronts = Vec::new();

    let mut front = non_dominated_sort(matrix);
    while !front.is_empty() {
        let mut indices = front.indices().to_vec();
        indices.sort_unstable();
        fronts.push(indices);

        front = front.next_front();
    }

    fronts
}

/// Returns amount of members in each front given ranks produced by the engine.
/// The first element corresponds to the rank `1`.
pub fn get_front_sizes(ranks: &[Rank]) -> Vec<usize> {
    let max_rank = ranks.iter().copied().max().unwrap_or(0);

    ranks.iter().filter(|&&rank| rank > 0).fold(vec![0; max_rank], |mut acc, &rank| {
        acc[rank - 1] += 1;
        acc
    })
}
