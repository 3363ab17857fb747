// Bounded summation over a fixed set of integers.
//
// The range is half-open: `sum(values, count)` adds `values[0..count]` and
// never touches `values[count]`. A count larger than the backing slice is
// reported as an error instead of reading past the end.

pub mod error;

pub use error::{Result, SumError};

use tracing::debug;

/// Sum the first `count` elements of `values`.
///
/// Returns `SumError::CountOutOfRange` when `count > values.len()` and
/// `SumError::Overflow` if the 32-bit accumulator would wrap.
pub fn sum(values: &[i32], count: usize) -> Result<i32> {
    let Some(window) = values.get(..count) else {
        return Err(SumError::CountOutOfRange {
            count,
            len: values.len(),
        });
    };

    let mut total: i32 = 0;
    for (index, value) in window.iter().enumerate() {
        total = total
            .checked_add(*value)
            .ok_or(SumError::Overflow { index })?;
    }

    debug!(count, total, "summed values");
    Ok(total)
}

/// Sum every element of `values`; the slice carries its own length.
pub fn sum_all(values: &[i32]) -> Result<i32> {
    sum(values, values.len())
}
