#[cfg(test)]
#[path = "../../tests/unit/ranking/matrix_test.rs"]
mod matrix_test;

use super::RankError;
use std::slice::ChunksExact;

/// A validated matrix of objective values: one row per candidate solution, one column per
/// minimized objective. All rows have the same length and every value is finite.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectiveMatrix {
    data: Vec<f64>,
    dimension: usize,
}

impl ObjectiveMatrix {
    /// Creates a new instance of `ObjectiveMatrix` from rows of objective values.
    ///
    /// Shape is checked for all rows before any value is inspected. An empty slice of rows
    /// produces an empty matrix.
    pub fn new<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, RankError> {
        let dimension = rows.first().map_or(0, |row| row.as_ref().len());

        if let Some((row, actual)) = rows
            .iter()
            .map(|row| row.as_ref().len())
            .enumerate()
            .find(|&(_, actual)| actual == 0 || actual != dimension)
        {
            return Err(RankError::ShapeMismatch { row, expected: dimension.max(1), actual });
        }

        let data = rows.iter().flat_map(|row| row.as_ref().iter().copied()).collect::<Vec<_>>();

        Self::validated(data, dimension)
    }

    /// Creates a new instance of `ObjectiveMatrix` from row-major `data` with `dimension`
    /// objectives per row.
    pub fn from_flat(data: Vec<f64>, dimension: usize) -> Result<Self, RankError> {
        if dimension == 0 {
            return Err(RankError::ShapeMismatch { row: 0, expected: 1, actual: 0 });
        }

        let remainder = data.len() % dimension;
        if remainder != 0 {
            let row = data.len() / dimension;
            return Err(RankError::ShapeMismatch { row, expected: dimension, actual: remainder });
        }

        Self::validated(data, dimension)
    }

    fn validated(data: Vec<f64>, dimension: usize) -> Result<Self, RankError> {
        if let Some((idx, &value)) = data.iter().enumerate().find(|(_, value)| !value.is_finite()) {
            return Err(RankError::InvalidValue { row: idx / dimension, column: idx % dimension, value });
        }

        Ok(Self { data, dimension })
    }

    /// Returns amount of rows.
    pub fn len(&self) -> usize {
        if self.dimension == 0 { 0 } else { self.data.len() / self.dimension }
    }

    /// Returns true if matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns amount of objectives per row, zero for an empty matrix built from no rows.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns objective values of the row with given index.
    ///
    /// # Panics
    /// Panics if `idx` is out of bounds.
    pub fn row(&self, idx: usize) -> &[f64] {
        let start = idx * self.dimension;
        &self.data[start..start + self.dimension]
    }

    /// Iterates over rows in their original order.
    pub fn rows(&self) -> ChunksExact<'_, f64> {
        self.data.chunks_exact(self.dimension.max(1))
    }
}
