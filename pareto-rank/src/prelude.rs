//! This module reimports a common used types.

pub use crate::ranking::get_fronts;
pub use crate::ranking::get_front_sizes;
pub use crate::ranking::rank;
pub use crate::ranking::rank_matrix;
pub use crate::ranking::ObjectiveMatrix;
pub use crate::ranking::Rank;
pub use crate::ranking::RankError;

pub use crate::algorithms::nsga2::{dominance_order, dominates};

pub use crate::utils::Environment;
pub use crate::utils::InfoLogger;
pub use crate::utils::{GenericError, GenericResult};
