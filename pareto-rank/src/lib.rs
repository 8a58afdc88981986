//! This crate assigns *pareto front ranks* to a set of candidate solutions described by several
//! minimized objective scores.
//!
//! The engine is an implementation of the fast non-dominated sort used by NSGA-II: every row of
//! an objective matrix gets the number of the front it belongs to, where `1` is the best
//! (non-dominated) front.
//!
//! # Examples
//!
//! ```
//! use pareto_rank::prelude::*;
//!
//! let ranks = rank(&[[1., 1.], [2., 2.], [1., 2.]]).unwrap();
//!
//! assert_eq!(ranks, vec![1, 3, 2]);
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod algorithms;
pub mod prelude;
pub mod ranking;
pub mod utils;
