// argsum - argument echo and bounded array summation
//!
//! Prints every process argument with its index, then sums a fixed
//! three-element array and prints the total.

pub mod arguments;
pub mod config;
pub mod runner;
pub mod summation;

#[cfg(test)]
pub mod tests;

// Re-export common types
pub use config::RunConfig;
pub use runner::{run, run_with, RunError};
pub use summation::{sum, sum_all, SumError};
