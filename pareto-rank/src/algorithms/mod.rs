//! This module contains algorithms used by the ranking engine.

pub mod nsga2;
