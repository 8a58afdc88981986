use crate::algorithms::nsga2::dominates;
use crate::ranking::ObjectiveMatrix;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Creates `n_fronts` with each having `n` rows in it.
pub fn create_rows_with_n_fronts(n: usize, n_fronts: usize) -> (Vec<Vec<f64>>, Vec<Vec<usize>>) {
    let mut rows = Vec::with_capacity(n * n_fronts);
    let mut expected_fronts = Vec::with_capacity(n_fronts);

    for front in 0..n_fronts {
        let mut current_front = Vec::with_capacity(n);
        for i in 0..n {
            rows.push(vec![(front + i) as f64, (front + n - i) as f64]);
            current_front.push(front * n + i);
        }
        expected_fronts.push(current_front);
    }

    (rows, expected_fronts)
}

/// Creates `size` rows with `dimension` objectives using seeded generator. Values are taken from
/// a small integer range, so duplicates and ties occur often.
pub fn create_random_rows(seed: u64, size: usize, dimension: usize) -> Vec<Vec<f64>> {
    let mut rng = SmallRng::seed_from_u64(seed);

    (0..size).map(|_| (0..dimension).map(|_| rng.gen_range(0..10) as f64).collect()).collect()
}

/// Returns a random permutation of `0..size` indices.
pub fn create_permutation(seed: u64, size: usize) -> Vec<usize> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut indices = (0..size).collect::<Vec<_>>();
    indices.shuffle(&mut rng);

    indices
}

/// Returns indices of rows which are not dominated by any other row.
pub fn get_non_dominated_indices(matrix: &ObjectiveMatrix) -> Vec<usize> {
    (0..matrix.len())
        .filter(|&q| !(0..matrix.len()).any(|p| p != q && dominates(matrix.row(p), matrix.row(q))))
        .collect()
}
