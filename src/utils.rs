//! Sizing helpers and traits shared by `OpenAddressingMap` and `ChainingMap`

use crate::{ChainingMap, OpenAddressingMap, hashing::HashFunction};

/// Extension trait for map implementations that provides additional utility methods
pub trait HashMapExtensions<V> {
    /// Returns the keys of the hash map as a Vec, in iteration order
    fn keys(&self) -> Vec<String>;

    /// Returns the values of the hash map as a Vec, in iteration order
    fn values(&self) -> Vec<V>;
}

impl<V: Clone> HashMapExtensions<V> for OpenAddressingMap<V> {
    fn keys(&self) -> Vec<String> {
        self.iter().map(|(k, _)| k.to_owned()).collect()
    }

    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, v)| v.clone()).collect()
    }
}

impl<V: Clone> HashMapExtensions<V> for ChainingMap<V> {
    fn keys(&self) -> Vec<String> {
        self.iter().map(|(k, _)| k.to_owned()).collect()
    }

    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, v)| v.clone()).collect()
    }
}

/// Returns true if `n` is prime, using trial division by odd factors up to `sqrt(n)`
#[must_use]
#[allow(clippy::arithmetic_side_effects)]
pub fn is_prime(n: usize) -> bool {
    if n == 2 || n == 3 {
        return true;
    }
    if n < 2 || n % 2 == 0 {
        return false;
    }

    let mut factor: usize = 3;
    while factor.checked_mul(factor).is_some_and(|square| square <= n) {
        if n % factor == 0 {
            return false;
        }
        factor += 2;
    }
    true
}

/// Returns the first odd prime at or above `n`.
///
/// An even `n` is bumped to `n + 1` before searching, so `next_prime(2)` is `3`.
#[must_use]
pub fn next_prime(n: usize) -> usize {
    let mut candidate = if n % 2 == 0 { n.saturating_add(1) } else { n };
    while !is_prime(candidate) {
        candidate = candidate.saturating_add(2);
    }
    candidate
}

/// Capacity a table is rebuilt with when `requested` buckets are asked for:
/// `requested` itself when already prime, otherwise `next_prime(requested)`
#[must_use]
pub fn prime_capacity(requested: usize) -> usize {
    if is_prime(requested) { requested } else { next_prime(requested) }
}

/// Maps `key` to a bucket index in a table with `capacity` buckets
#[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
pub(crate) fn bucket_index(hash_function: HashFunction, key: &str, capacity: usize) -> usize {
    debug_assert_ne!(capacity, 0);
    // the remainder is below `capacity`, so it always fits back into `usize`
    (hash_function(key) % capacity as u64) as usize
}

/// Ratio of live entries to buckets
#[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
pub(crate) fn load_factor(size: usize, capacity: usize) -> f64 {
    size as f64 / capacity as f64
}
