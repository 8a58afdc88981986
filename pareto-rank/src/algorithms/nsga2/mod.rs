//! This module contains a logic for grouping multiple solutions into pareto fronts based on
//! `Non Dominated Sorting Genetic Algorithm II` algorithm.
//!
//! Only the fast non-dominated sorting approach of NSGA-II is used here: the search procedure
//! itself (selection, crossover, mutation) is driven by an external optimizer which produces the
//! objective values ranked by this crate.
//!
//! For more details regarding NSGA-II algorithm details, check original paper "A fast and elitist
//! multiobjective genetic algorithm: NSGA-II", Kalyanmoy Deb et al. DOI: `0.1109/4235.996017`

mod dominance;
pub use self::dominance::*;

mod non_dominated_sort;
pub use self::non_dominated_sort::*;
