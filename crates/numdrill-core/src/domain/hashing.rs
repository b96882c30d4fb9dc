//! Hash container aliases
//!
//! With the `fx-hash` feature (default) counting and duplicate detection use
//! rustc-hash's FxHasher; otherwise the std SipHash containers are used.
//! Both are constructed with `Default::default()`.

#[cfg(feature = "fx-hash")]
pub type HashMap<K, V> = rustc_hash::FxHashMap<K, V>;

#[cfg(feature = "fx-hash")]
pub type HashSet<T> = rustc_hash::FxHashSet<T>;

#[cfg(not(feature = "fx-hash"))]
pub type HashMap<K, V> = std::collections::HashMap<K, V>;

#[cfg(not(feature = "fx-hash"))]
pub type HashSet<T> = std::collections::HashSet<T>;

/// Create an empty set with room for `capacity` elements
pub fn set_with_capacity<T>(capacity: usize) -> HashSet<T> {
    HashSet::with_capacity_and_hasher(capacity, Default::default())
}

/// Create an empty map with room for `capacity` entries
pub fn map_with_capacity<K, V>(capacity: usize) -> HashMap<K, V> {
    HashMap::with_capacity_and_hasher(capacity, Default::default())
}
