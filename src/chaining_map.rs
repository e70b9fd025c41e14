use std::{collections::VecDeque, mem};

use tracing::{debug, trace};

use crate::{
    DEFAULT_CAPACITY,
    hashing::{HashFunction, hash_function_1},
    utils::{bucket_index, load_factor, next_prime, prime_capacity},
};

/// A key-value pair in a bucket chain
#[derive(Debug, Clone)]
struct Entry<V> {
    /// The key in the key-value pair
    key: String,
    /// The value associated with the key
    value: V,
}

/// All entries hashing to one bucket, newest first
type Chain<V> = VecDeque<Entry<V>>;

/// A string-keyed hash map using separate chaining.
///
/// Every bucket owns a chain of the entries that hash to it. New keys are pushed to the
/// front of their chain, so iteration within a bucket runs from the most recently inserted
/// key to the oldest. The bucket count is always prime. The table never grows on its own:
/// callers decide when to `resize_table`.
///
/// Note: This implementation is not thread-safe.
#[derive(Debug, Clone)]
pub struct ChainingMap<V> {
    /// The bucket chains; the length is the capacity
    buckets: Vec<Chain<V>>,
    /// Hash function used to pick the bucket of a key
    hash_function: HashFunction,
    /// Number of stored entries
    size: usize,
}

impl<V> Default for ChainingMap<V> {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl<V> Extend<(String, V)> for ChainingMap<V> {
    fn extend<T: IntoIterator<Item = (String, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<V> FromIterator<(String, V)> for ChainingMap<V> {
    fn from_iter<T: IntoIterator<Item = (String, V)>>(iter: T) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<V> ChainingMap<V> {
    /// Creates an empty map with `next_prime(capacity)` buckets, hashing keys with `hash_function`
    #[must_use]
    pub fn new(capacity: usize, hash_function: HashFunction) -> Self {
        Self { buckets: empty_buckets(next_prime(capacity)), hash_function, size: 0 }
    }

    /// Creates an empty map with `next_prime(capacity)` buckets using [`hash_function_1`]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(capacity, hash_function_1)
    }

    /// Gets the chain `key` belongs to
    fn chain(&self, key: &str) -> Option<&Chain<V>> {
        self.buckets.get(bucket_index(self.hash_function, key, self.buckets.len()))
    }

    /// Gets the chain `key` belongs to, mutably
    fn chain_mut(&mut self, key: &str) -> Option<&mut Chain<V>> {
        let index = bucket_index(self.hash_function, key, self.buckets.len());
        self.buckets.get_mut(index)
    }

    /// Inserts `value` under `key`, returning the previous value if the key was present.
    ///
    /// An existing entry is updated in place; a new one goes to the front of its chain.
    pub fn put(&mut self, key: String, value: V) -> Option<V> {
        let chain = self.chain_mut(&key)?;
        if let Some(entry) = chain.iter_mut().find(|entry| entry.key == key) {
            return Some(mem::replace(&mut entry.value, value));
        }

        chain.push_front(Entry { key, value });
        self.size = self.size.saturating_add(1);
        None
    }

    /// Retrieve a value for a given key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.chain(key)?.iter().find(|entry| entry.key == key).map(|entry| &entry.value)
    }

    /// Get a mutable reference to a value for a given key
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.chain_mut(key)?.iter_mut().find(|entry| entry.key == key).map(|entry| &mut entry.value)
    }

    /// Returns true if the map holds an entry for `key`
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        if self.size == 0 {
            return false;
        }
        self.get(key).is_some()
    }

    /// Unlinks the entry for `key` from its chain, returning its value.
    ///
    /// Absent keys leave the map untouched.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let chain = self.chain_mut(key)?;
        let position = chain.iter().position(|entry| entry.key == key)?;
        let entry = chain.remove(position)?;
        self.size = self.size.saturating_sub(1);
        Some(entry.value)
    }

    /// Rebuilds the table with `new_capacity` buckets (rounded up to a prime) and rehashes
    /// every entry through `put`, bucket by bucket and front to back within a chain.
    ///
    /// A request for fewer than one bucket is ignored.
    pub fn resize_table(&mut self, new_capacity: usize) {
        if new_capacity < 1 {
            debug!(new_capacity, "refusing to resize to an empty table");
            return;
        }

        let capacity = prime_capacity(new_capacity);
        debug!(from = self.capacity(), to = capacity, size = self.size, "resizing chained table");

        let old_buckets = mem::replace(&mut self.buckets, empty_buckets(capacity));
        self.size = 0;

        for Entry { key, value } in old_buckets.into_iter().flatten() {
            self.put(key, value);
        }
    }

    /// Returns the number of entries divided by the number of buckets
    #[must_use]
    pub fn table_load(&self) -> f64 {
        load_factor(self.size, self.capacity())
    }

    /// Returns the number of buckets whose chain is empty
    #[must_use]
    pub fn empty_buckets(&self) -> usize {
        self.buckets.iter().filter(|chain| chain.is_empty()).count()
    }

    /// Clears the map, keeping the current capacity
    pub fn clear(&mut self) {
        trace!(capacity = self.capacity(), size = self.size, "clearing chained table");
        self.buckets = empty_buckets(self.capacity());
        self.size = 0;
    }

    /// Returns the number of entries in the map
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the map holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of buckets in the table
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the hash function the map was built with
    #[must_use]
    pub fn hash_function(&self) -> HashFunction {
        self.hash_function
    }

    /// Returns an iterator over the key-value pairs, bucket by bucket and front to back
    /// within each chain
    #[must_use]
    #[allow(clippy::iter_without_into_iter)]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter { entries: self.buckets.iter().flatten() }
    }
}

impl<V: Clone> ChainingMap<V> {
    /// Returns every key-value pair in iteration order
    #[must_use]
    pub fn get_keys_and_values(&self) -> Vec<(String, V)> {
        self.iter().map(|(k, v)| (k.to_owned(), v.clone())).collect()
    }
}

/// Allocates `capacity` empty chains
fn empty_buckets<V>(capacity: usize) -> Vec<Chain<V>> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, VecDeque::new);
    buckets
}

/// Iterator over the key-value pairs of a `ChainingMap`
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    /// Entries of every chain, in bucket order
    entries: std::iter::Flatten<std::slice::Iter<'a, Chain<V>>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|entry| (entry.key.as_str(), &entry.value))
    }
}
