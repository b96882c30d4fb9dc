//! Second-largest distinct value
//!
//! "Second largest" means the largest value strictly less than the maximum.
//! Sequences without such a value (fewer than two elements, or all elements
//! equal) yield `None` rather than a sentinel.

use crate::domain::difference::ensure_numeric;
use crate::error::{DrillError, Result};

/// Find the second-largest distinct value
///
/// Single pass tracking the largest and second-largest values seen so far.
///
/// # Errors
/// * `EmptyInput` when `values` is empty
/// * `NotANumber` when a value is NaN (checked only once there are at least two values)
pub fn second_largest(values: &[f64]) -> Result<Option<f64>> {
    if values.is_empty() {
        return Err(DrillError::EmptyInput);
    }
    if values.len() < 2 {
        return Ok(None);
    }
    ensure_numeric(values)?;

    let mut largest = values[0];
    let mut second: Option<f64> = None;

    for &value in &values[1..] {
        if value > largest {
            second = Some(largest);
            largest = value;
        } else if value < largest && second.is_none_or(|s| value > s) {
            second = Some(value);
        }
    }

    Ok(second)
}

/// Find the second-largest distinct value and the first index where it occurs
///
/// Scans left to right; with repeated values the lowest index is reported.
pub fn second_largest_with_index(values: &[f64]) -> Result<Option<(f64, usize)>> {
    let Some(second) = second_largest(values)? else {
        return Ok(None);
    };

    Ok(values
        .iter()
        .position(|&v| v == second)
        .map(|index| (second, index)))
}
