//! Collatz trajectory operations
//!
//! This module provides the trajectory iterator and the step-count, sequence
//! and range-scan operations built on it.
//!
//! Starting values are `u64`. Trajectories are carried in `u128`, since paths
//! from 11-digit starts already climb past `u64::MAX`; a `3n + 1` step that does
//! not fit in `u128` reports `DrillError::Overflow`.

use crate::error::{DrillError, Result};
use tracing::debug;

#[cfg(not(feature = "parallel"))]
use crate::constants::SCAN_TRACE_INTERVAL;
#[cfg(not(feature = "parallel"))]
use tracing::trace;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Apply one Collatz step (n/2 for even n, 3n+1 for odd n)
///
/// Returns `None` when `3n + 1` overflows.
#[inline]
pub fn collatz_next(n: u128) -> Option<u128> {
    if n % 2 == 0 {
        Some(n / 2)
    } else {
        n.checked_mul(3)?.checked_add(1)
    }
}

/// Iterator over a Collatz trajectory
///
/// Yields the starting value, every intermediate value, and finally 1.
/// If a step overflows, yields a single `Err(DrillError::Overflow)` and stops.
#[derive(Clone, Debug)]
pub struct Trajectory {
    pending: Option<Result<u128>>,
}

impl Trajectory {
    /// Create a trajectory starting at `start` (must be positive)
    pub fn new(start: u64) -> Result<Self> {
        if start == 0 {
            return Err(DrillError::NotPositive);
        }
        Ok(Self {
            pending: Some(Ok(u128::from(start))),
        })
    }
}

impl Iterator for Trajectory {
    type Item = Result<u128>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.pending.take()?;
        if let Ok(current) = item
            && current != 1
        {
            self.pending = Some(collatz_next(current).ok_or(DrillError::Overflow));
        }
        Some(item)
    }
}

/// Count the steps needed to reach 1
///
/// `collatz_steps(1)` is 0.
pub fn collatz_steps(n: u64) -> Result<u32> {
    Trajectory::new(n)?
        .skip(1)
        .try_fold(0u32, |steps, value| value.map(|_| steps + 1))
}

/// Collect the full trajectory from `n` down to 1 inclusive
///
/// The returned sequence always ends in 1 and has `collatz_steps(n) + 1` elements.
pub fn collatz_sequence(n: u64) -> Result<Vec<u128>> {
    Trajectory::new(n)?.collect()
}

/// Highest value reached on the trajectory starting at `n`
pub fn collatz_peak(n: u64) -> Result<u128> {
    Trajectory::new(n)?.try_fold(0u128, |peak, value| value.map(|v| peak.max(v)))
}

/// Find the number in `[1, limit]` with the most steps
///
/// Returns `(number, steps)`. Ties go to the smallest number.
/// `limit = 0` scans nothing and returns `(1, 0)`.
#[cfg(not(feature = "parallel"))]
pub fn find_max_steps(limit: u64) -> Result<(u64, u32)> {
    let mut best = (1u64, 0u32);

    for n in 1..=limit {
        let steps = collatz_steps(n)?;
        if steps > best.1 {
            best = (n, steps);
        }

        if n % SCAN_TRACE_INTERVAL == 0 {
            trace!(scanned = n, limit, "collatz range scan progress");
        }
    }

    debug!(limit, number = best.0, steps = best.1, "collatz range scan finished");
    Ok(best)
}

/// Find the number in `[1, limit]` with the most steps (rayon version)
///
/// Produces the same result as the sequential scan, including the tie-break.
#[cfg(feature = "parallel")]
pub fn find_max_steps(limit: u64) -> Result<(u64, u32)> {
    let best = (1..=limit)
        .into_par_iter()
        .map(|n| collatz_steps(n).map(|steps| (n, steps)))
        .try_reduce(|| (1u64, 0u32), |a, b| Ok(prefer_longer(a, b)))?;

    debug!(limit, number = best.0, steps = best.1, "collatz range scan finished");
    Ok(best)
}

#[cfg(feature = "parallel")]
fn prefer_longer(a: (u64, u32), b: (u64, u32)) -> (u64, u32) {
    if b.1 > a.1 || (b.1 == a.1 && b.0 < a.0) {
        b
    } else {
        a
    }
}
