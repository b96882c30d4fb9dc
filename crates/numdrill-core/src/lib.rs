//! numdrill-core - Classic integer and sequence drills
//!
//! This crate provides one canonical implementation for each of:
//! - Collatz step counting, trajectories and range scans
//! - Digit counting and digit statistics, digit reversal, numeric palindromes
//! - Parity classification and even filtering
//! - Order statistics over sequences (forward difference, second largest, missing numbers)
//! - Uniqueness and duplicate utilities

pub mod constants;
pub mod error;
pub mod domain;
pub mod app;

// Re-export commonly used types
pub use error::{DrillError, Result};
pub use domain::classify::{Classification, classify};
pub use domain::collatz::{Trajectory, collatz_peak, collatz_sequence, collatz_steps, find_max_steps};
pub use domain::difference::{DifferenceSpan, max_difference, max_difference_span, max_profit};
pub use domain::digits::{
    DigitFrequency, Digits, ParityCounts, count_digit, count_digits, digit_frequency,
    digit_product, digit_sum, parity_counts,
};
pub use domain::evens::double_evens;
pub use domain::missing::{find_missing_number, find_missing_numbers};
pub use domain::palindrome::{is_palindrome, next_palindrome, palindromes_in_range};
pub use domain::reverse::reverse_number;
pub use domain::second_largest::{second_largest, second_largest_with_index};
pub use domain::uniqueness::{
    DedupOrder, all_unique, duplicates, first_duplicate, occurrence_counts, remove_duplicates,
    singletons,
};
