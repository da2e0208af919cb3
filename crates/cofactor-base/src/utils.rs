//! Utility functions and helpers.

use std::hash::{Hash, Hasher};

/// Computes a fast 64-bit hash of the given value.
#[must_use]
pub fn fast_hash<T: Hash>(value: &T) -> u64 {
    use std::collections::hash_map::DefaultHasher;
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}
