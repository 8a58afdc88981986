//! A library part of the command line interface: table adapters and configuration which feed
//! objective values from delimited text files into the ranking engine and merge ranks back.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub use pareto_rank as core;

pub mod extensions;
