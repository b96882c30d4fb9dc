//! Maximum forward difference
//!
//! This module finds max(values[j] - values[i]) over all i < j. Unlike the
//! classic stock-profit problem the result is not floored at 0: a strictly
//! decreasing sequence yields a negative difference. `max_profit` provides the
//! floored variant.

use crate::constants::MIN_PAIR_LEN;
use crate::error::{DrillError, Result};

/// Best forward difference and the pair of positions producing it
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DifferenceSpan {
    /// values[max_index] - values[min_index]
    pub difference: f64,
    /// Index of the smaller (earlier) element
    pub min_index: usize,
    /// Index of the larger (later) element
    pub max_index: usize,
}

/// Reject NaN elements, reporting the first offending index
pub(crate) fn ensure_numeric(values: &[f64]) -> Result<()> {
    match values.iter().position(|v| v.is_nan()) {
        Some(index) => Err(DrillError::NotANumber { index }),
        None => Ok(()),
    }
}

/// Find the maximum forward difference together with its indices
///
/// Single pass tracking the minimum seen so far. Ties keep the earliest
/// minimum and the earliest maximum after it.
///
/// # Errors
/// * `TooFewElements` when fewer than 2 values are given
/// * `NotANumber` when a value is NaN
pub fn max_difference_span(values: &[f64]) -> Result<DifferenceSpan> {
    if values.len() < MIN_PAIR_LEN {
        return Err(DrillError::TooFewElements {
            required: MIN_PAIR_LEN,
            found: values.len(),
        });
    }
    ensure_numeric(values)?;

    let mut min_index = 0;
    let mut best = DifferenceSpan {
        difference: values[1] - values[0],
        min_index: 0,
        max_index: 1,
    };

    for (i, &value) in values.iter().enumerate().skip(1) {
        let current = value - values[min_index];
        if current > best.difference {
            best = DifferenceSpan {
                difference: current,
                min_index,
                max_index: i,
            };
        }

        if value < values[min_index] {
            min_index = i;
        }
    }

    Ok(best)
}

/// Find max(values[j] - values[i]) over all i < j
///
/// The result can be negative when the sequence is strictly decreasing.
pub fn max_difference(values: &[f64]) -> Result<f64> {
    max_difference_span(values).map(|span| span.difference)
}

/// Maximum profit from one buy followed by one sell
///
/// Same as `max_difference` but floored at 0, and fewer than 2 prices yield 0
/// instead of an error.
pub fn max_profit(prices: &[f64]) -> Result<f64> {
    ensure_numeric(prices)?;
    if prices.len() < MIN_PAIR_LEN {
        return Ok(0.0);
    }
    Ok(max_difference(prices)?.max(0.0))
}
