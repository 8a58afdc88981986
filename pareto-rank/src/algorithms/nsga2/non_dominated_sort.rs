//! Implementation of the [Fast Non-Dominated Sort Algorithm][1] as used by NSGA-II.
//! Time complexity is `O(K * N^2)`, where `K` is the number of objectives and `N` the number of rows.
//!
//! Non-dominated sorting is used in multi-objective (multivariate) optimization to group solutions
//! into non-dominated Pareto fronts according to their objectives. In the existence of multiple
//! objectives, a solution can happen to be better in one objective while at the same time worse in
//! another objective, and as such none of the two solutions _dominates_ the other.
//!
//! [1]: https://www.iitk.ac.in/kangal/Deb_NSGA-II.pdf "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II)"

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/nsga2/non_dominated_sort_test.rs"]
mod non_dominated_sort_test;

use super::dominance_order;
use crate::ranking::{ObjectiveMatrix, Rank};
use std::cmp::Ordering;

type RowIdx = usize;

/// A pareto front of the objective matrix together with the state required to discover the
/// fronts behind it.
#[derive(Debug, Clone)]
pub struct Front<'m> {
    dominated_rows: Vec<Vec<RowIdx>>,
    domination_count: Vec<usize>,
    previous_front: Vec<RowIdx>,
    current_front: Vec<RowIdx>,
    rank: Rank,
    matrix: &'m ObjectiveMatrix,
}

impl<'f, 'm: 'f> Front<'m> {
    /// Returns front number, the first front has rank `1`.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Iterates over the elements of the front.
    pub fn iter(&'f self) -> FrontElemIter<'f, 'm> {
        FrontElemIter { front: self, next_idx: 0 }
    }

    /// Returns indices of rows which belong to the front in the order of their discovery.
    pub fn indices(&self) -> &[RowIdx] {
        self.current_front.as_slice()
    }

    /// Returns true if the front has no members. An empty front terminates the sort.
    pub fn is_empty(&self) -> bool {
        self.current_front.is_empty()
    }

    /// Discharges dominated relationships of the current front and returns the next one.
    pub fn next_front(self) -> Self {
        let Front { dominated_rows, mut domination_count, previous_front, current_front, rank, matrix } = self;

        // reuse the previous_front
        let mut next_front = previous_front;
        next_front.clear();

        for &p_i in current_front.iter() {
            for &q_i in dominated_rows[p_i].iter() {
                debug_assert!(domination_count[q_i] > 0);

                domination_count[q_i] -= 1;
                if domination_count[q_i] == 0 {
                    // q_i is not dominated by any remaining row: it belongs to the next front.
                    next_front.push(q_i);
                }
            }
        }

        Self {
            dominated_rows,
            domination_count,
            previous_front: current_front,
            current_front: next_front,
            rank: rank + 1,
            matrix,
        }
    }
}

/// An iterator over rows of the front.
pub struct FrontElemIter<'f, 'm: 'f> {
    front: &'f Front<'m>,
    next_idx: usize,
}

impl<'f, 'm: 'f> Iterator for FrontElemIter<'f, 'm> {
    type Item = (&'m [f64], RowIdx);

    fn next(&mut self) -> Option<Self::Item> {
        let &row_idx = self.front.current_front.get(self.next_idx)?;
        self.next_idx += 1;

        Some((self.front.matrix.row(row_idx), row_idx))
    }
}

/// Performs a non-dominated sort of rows in the `matrix`. Returns the first Pareto front.
pub fn non_dominated_sort(matrix: &ObjectiveMatrix) -> Front<'_> {
    let size = matrix.len();

    // the indices of the rows that are dominated by this row
    let mut dominated_rows: Vec<Vec<RowIdx>> = vec![Vec::new(); size];

    // for each row, we keep a domination count, i.e. the number of rows that dominate the row
    let mut domination_count: Vec<usize> = vec![0; size];

    let mut current_front: Vec<RowIdx> = Vec::new();

    // initial pass over each combination of distinct rows: O(n*n / 2)
    let mut iter = matrix.rows().enumerate();
    while let Some((p_i, p)) = iter.next() {
        for (q_i, q) in iter.clone() {
            match dominance_order(p, q) {
                Ordering::Less => {
                    // p dominates q, add `q` to the set of rows dominated by `p`
                    dominated_rows[p_i].push(q_i);
                    domination_count[q_i] += 1;
                }
                Ordering::Greater => {
                    // q dominates p, add `p` to the set of rows dominated by `q`
                    dominated_rows[q_i].push(p_i);
                    domination_count[p_i] += 1;
                }
                Ordering::Equal => {}
            }
        }

        // all pairs with `p_i` are visited at this point, so the count is final
        if domination_count[p_i] == 0 {
            current_front.push(p_i);
        }
    }

    debug_assert!(size == 0 || !current_front.is_empty());

    Front { dominated_rows, domination_count, previous_front: Vec::new(), current_front, rank: 1, matrix }
}
