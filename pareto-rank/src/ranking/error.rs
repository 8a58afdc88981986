use crate::utils::GenericError;
use std::fmt::{Display, Formatter};

/// An error returned when objective matrix cannot be ranked.
#[derive(Clone, Debug, PartialEq)]
pub enum RankError {
    /// Rows have differing lengths or there are no objectives at all.
    ShapeMismatch {
        /// Index of the first offending row.
        row: usize,
        /// Expected amount of objectives.
        expected: usize,
        /// Actual amount of objectives.
        actual: usize,
    },
    /// An objective value is not a finite real number.
    InvalidValue {
        /// Row index of the value.
        row: usize,
        /// Column (objective) index of the value.
        column: usize,
        /// The value itself.
        value: f64,
    },
}

impl Display for RankError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ShapeMismatch { row, actual: 0, .. } => write!(f, "row {row} has no objectives"),
            Self::ShapeMismatch { row, expected, actual } => {
                write!(f, "row {row} has {actual} objectives, but {expected} are expected")
            }
            Self::InvalidValue { row, column, value } => {
                write!(f, "row {row} has non-finite value '{value}' in objective {column}")
            }
        }
    }
}

impl std::error::Error for RankError {}

// NOTE row and column are matrix positions: table adapters remap them to physical positions
// before converting, see `select_objectives` in the cli crate.
impl From<RankError> for GenericError {
    fn from(value: RankError) -> Self {
        GenericError::from(value.to_string())
    }
}
