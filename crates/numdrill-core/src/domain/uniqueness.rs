//! Uniqueness and duplicate utilities
//!
//! All operations are generic over `T: Eq + Hash + Clone` and use the hash
//! containers from `domain::hashing`.
//!
//! Equality is the element type's own `Eq`; no cross-type coercion happens.
//! In particular `true` and `1` are never equal: callers that want
//! boolean/integer equivalence convert explicitly (e.g. with `i64::from(flag)`).
//! `f64` is not `Eq + Hash`; floating-point sequences must be mapped to a
//! hashable key (such as `f64::to_bits`) by the caller.

use crate::domain::hashing::{HashMap, HashSet, map_with_capacity, set_with_capacity};
use std::hash::Hash;

/// Order of the output of `remove_duplicates`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DedupOrder {
    /// Keep the first occurrence of each value, in input order
    #[default]
    Preserve,
    /// No defined order
    Unordered,
}

/// Check if all elements are pairwise distinct
///
/// Stops at the first repeat. An empty slice is all-unique.
pub fn all_unique<T: Eq + Hash>(items: &[T]) -> bool {
    let mut seen: HashSet<&T> = set_with_capacity(items.len());
    items.iter().all(|item| seen.insert(item))
}

/// Return each duplicated value once, in the order its first repeat is found
pub fn duplicates<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut seen: HashSet<&T> = set_with_capacity(items.len());
    let mut reported: HashSet<&T> = HashSet::default();
    let mut result = Vec::new();

    for item in items {
        if !seen.insert(item) && reported.insert(item) {
            result.push(item.clone());
        }
    }

    result
}

/// Count occurrences of every value
pub fn occurrence_counts<T: Eq + Hash + Clone>(items: &[T]) -> HashMap<T, usize> {
    let mut counts: HashMap<T, usize> = map_with_capacity(items.len());
    for item in items {
        *counts.entry(item.clone()).or_insert(0) += 1;
    }
    counts
}

/// Return the values that occur exactly once, in first-appearance order
pub fn singletons<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut counts: HashMap<&T, usize> = map_with_capacity(items.len());
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }

    items
        .iter()
        .filter(|item| counts.get(item) == Some(&1))
        .cloned()
        .collect()
}

/// Remove duplicates
///
/// With `DedupOrder::Preserve` the first occurrence of each value is kept in
/// input order; with `DedupOrder::Unordered` the output order is unspecified.
pub fn remove_duplicates<T: Eq + Hash + Clone>(items: &[T], order: DedupOrder) -> Vec<T> {
    match order {
        DedupOrder::Preserve => {
            let mut seen: HashSet<&T> = set_with_capacity(items.len());
            items
                .iter()
                .filter(|item| seen.insert(*item))
                .cloned()
                .collect()
        }
        DedupOrder::Unordered => {
            let unique: HashSet<T> = items.iter().cloned().collect();
            unique.into_iter().collect()
        }
    }
}

/// Return the first value that repeats, in scan order
///
/// "First" means the repeat that is reached first: for `[1, 2, 2, 1]` this is 2.
pub fn first_duplicate<T: Eq + Hash + Clone>(items: &[T]) -> Option<T> {
    let mut seen: HashSet<&T> = set_with_capacity(items.len());
    items.iter().find(|item| !seen.insert(*item)).cloned()
}
