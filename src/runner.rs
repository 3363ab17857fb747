// Run sequence: echo arguments, then compute and print the total.
//
// Output goes to any `Write` so the whole sequence can run against a buffer
// in tests and against locked stdout in the binary.

use crate::arguments::print_arguments;
use crate::config::RunConfig;
use crate::summation;
use anyhow::{Context, Result};
use std::ffi::OsStr;
use std::io::Write;
use thiserror::Error;
use tracing::{debug, error};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RunError {
    #[error("self-check failed: expected total {expected}, got {actual}")]
    SelfCheckFailed { expected: i32, actual: i32 },
}

/// Check the computed total against the configured expectation.
pub fn verify_total(expected: i32, actual: i32) -> std::result::Result<(), RunError> {
    if expected != actual {
        error!(expected, actual, "total does not match expectation");
        return Err(RunError::SelfCheckFailed { expected, actual });
    }
    Ok(())
}

/// Run with the default inputs.
pub fn run<W, I, S>(args: I, out: &mut W) -> Result<i32>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    run_with(&RunConfig::default(), args, out)
}

/// Print `args`, sum `config.values[..config.count]`, verify and print the total.
pub fn run_with<W, I, S>(config: &RunConfig, args: I, out: &mut W) -> Result<i32>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let lines = print_arguments(out, args).context("Failed to write arguments")?;
    debug!(lines, "echoed arguments");

    let total = summation::sum(&config.values, config.count)
        .with_context(|| format!("Failed to sum {} values", config.count))?;
    verify_total(config.expected_total, total)?;

    writeln!(out, "total: {}", total).context("Failed to write total")?;
    out.flush().context("Failed to flush output")?;

    Ok(total)
}
