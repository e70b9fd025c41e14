use std::mem;

use tracing::{debug, trace, warn};

use crate::{
    DEFAULT_CAPACITY,
    hashing::{HashFunction, hash_function_1},
    utils::{bucket_index, load_factor, next_prime, prime_capacity},
};

/// Load factor at which `put` doubles the table before inserting
pub const LOAD_FACTOR_THRESHOLD: f64 = 0.5;

/// A key-value pair held by an occupied slot
#[derive(Debug, Clone)]
struct Entry<V> {
    /// The key in the key-value pair
    key: String,
    /// The value associated with the key
    value: V,
}

/// The state of one slot of the table
#[derive(Debug, Clone)]
enum Slot<V> {
    /// Never written since the table was (re)built
    Empty,
    /// Holds a live entry
    Occupied(Entry<V>),
    /// Held the entry for this key until it was removed; keeps probe chains intact
    Tombstone(String),
}

/// Where a probe sequence for a key stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Probe {
    /// Live entry for the key
    Live(usize),
    /// Tombstone left by a previous entry for the key
    Buried(usize),
    /// First empty slot on the sequence
    Vacant(usize),
    /// Every probe hit another key's slot
    Exhausted,
}

/// A string-keyed hash map using open addressing with quadratic probing.
///
/// Removal leaves a tombstone in the slot so that probe sequences passing through it stay
/// valid. Tombstones are only reclaimed when the table is rebuilt by `resize_table`.
/// The bucket count is always prime and the table doubles before an insert whenever the
/// load factor has reached [`LOAD_FACTOR_THRESHOLD`].
///
/// Note: This implementation is not thread-safe.
#[derive(Debug, Clone)]
pub struct OpenAddressingMap<V> {
    /// The slots of the table; the length is the capacity
    slots: Vec<Slot<V>>,
    /// Hash function used to pick the home slot of a key
    hash_function: HashFunction,
    /// Number of live (non-tombstoned) entries
    size: usize,
}

impl<V> Default for OpenAddressingMap<V> {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl<V> Extend<(String, V)> for OpenAddressingMap<V> {
    fn extend<T: IntoIterator<Item = (String, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<V> FromIterator<(String, V)> for OpenAddressingMap<V> {
    fn from_iter<T: IntoIterator<Item = (String, V)>>(iter: T) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<V> OpenAddressingMap<V> {
    /// Creates an empty map with `next_prime(capacity)` slots, hashing keys with `hash_function`
    #[must_use]
    pub fn new(capacity: usize, hash_function: HashFunction) -> Self {
        Self { slots: empty_slots(next_prime(capacity)), hash_function, size: 0 }
    }

    /// Creates an empty map with `next_prime(capacity)` slots using [`hash_function_1`]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(capacity, hash_function_1)
    }

    /// Walks the quadratic probe sequence `home + j²` for `key` until it finds the key,
    /// an empty slot, or runs `capacity` steps without either
    #[allow(clippy::arithmetic_side_effects)]
    fn probe(&self, key: &str) -> Probe {
        let capacity = self.slots.len();
        let home = bucket_index(self.hash_function, key, capacity);
        // j² mod capacity, advanced incrementally as (j + 1)² = j² + 2j + 1
        let mut offset = 0;

        for j in 0..capacity {
            let index = (home + offset) % capacity;
            match self.slots.get(index) {
                None | Some(Slot::Empty) => return Probe::Vacant(index),
                Some(Slot::Occupied(entry)) if entry.key == key => return Probe::Live(index),
                Some(Slot::Tombstone(buried)) if buried == key => return Probe::Buried(index),
                Some(_) => {}
            }
            offset = (offset + 2 * (j % capacity) + 1) % capacity;
        }

        Probe::Exhausted
    }

    /// Inserts `value` under `key`, returning the previous live value if the key was present.
    ///
    /// Doubles the table first when the load factor has reached [`LOAD_FACTOR_THRESHOLD`],
    /// so the new entry lands in the resized table. A tombstone left by the same key is
    /// reused in place.
    pub fn put(&mut self, key: String, value: V) -> Option<V> {
        if self.table_load() >= LOAD_FACTOR_THRESHOLD {
            self.resize_table(self.capacity().saturating_mul(2));
        }

        let mut rebuilt = false;
        loop {
            match self.probe(&key) {
                Probe::Live(index) => {
                    if let Some(Slot::Occupied(entry)) = self.slots.get_mut(index) {
                        return Some(mem::replace(&mut entry.value, value));
                    }
                    return None;
                }
                Probe::Buried(index) | Probe::Vacant(index) => {
                    if let Some(slot) = self.slots.get_mut(index) {
                        *slot = Slot::Occupied(Entry { key, value });
                        self.size = self.size.saturating_add(1);
                    }
                    return None;
                }
                Probe::Exhausted => {
                    // tombstones have filled every slot this key can reach
                    let target = if rebuilt {
                        self.capacity().saturating_mul(2)
                    } else {
                        self.capacity()
                    };
                    warn!(
                        capacity = self.capacity(),
                        size = self.size,
                        target,
                        "probe sequence exhausted, rebuilding table"
                    );
                    self.resize_table(target);
                    rebuilt = true;
                }
            }
        }
    }

    /// Retrieve a value for a given key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        match self.probe(key) {
            Probe::Live(index) => match self.slots.get(index) {
                Some(Slot::Occupied(entry)) => Some(&entry.value),
                _ => None,
            },
            _ => None,
        }
    }

    /// Get a mutable reference to a value for a given key
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        match self.probe(key) {
            Probe::Live(index) => match self.slots.get_mut(index) {
                Some(Slot::Occupied(entry)) => Some(&mut entry.value),
                _ => None,
            },
            _ => None,
        }
    }

    /// Returns true if a live entry exists for `key`
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        if self.size == 0 {
            return false;
        }
        self.get(key).is_some()
    }

    /// Removes the live entry for `key`, leaving a tombstone in its slot.
    ///
    /// Returns the removed value, or `None` without touching the table if the key is absent.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let Probe::Live(index) = self.probe(key) else {
            return None;
        };
        let slot = self.slots.get_mut(index)?;
        match mem::replace(slot, Slot::Empty) {
            Slot::Occupied(entry) => {
                *slot = Slot::Tombstone(entry.key);
                self.size = self.size.saturating_sub(1);
                Some(entry.value)
            }
            other => {
                *slot = other;
                None
            }
        }
    }

    /// Rebuilds the table with `new_capacity` slots (rounded up to a prime) and rehashes
    /// every live entry through `put`, dropping tombstones.
    ///
    /// Does nothing if `new_capacity` is below the number of live entries. Reinsertion may
    /// cross the load threshold and double the table again, so the final capacity can exceed
    /// the request.
    pub fn resize_table(&mut self, new_capacity: usize) {
        if new_capacity < self.size {
            debug!(new_capacity, size = self.size, "refusing to shrink below live entries");
            return;
        }

        let capacity = prime_capacity(new_capacity);
        debug!(
            from = self.capacity(),
            to = capacity,
            size = self.size,
            "resizing open addressing table"
        );

        let old_slots = mem::replace(&mut self.slots, empty_slots(capacity));
        self.size = 0;

        for slot in old_slots {
            if let Slot::Occupied(Entry { key, value }) = slot {
                self.put(key, value);
            }
        }
    }

    /// Returns the number of live entries divided by the number of slots
    #[must_use]
    pub fn table_load(&self) -> f64 {
        load_factor(self.size, self.capacity())
    }

    /// Returns the number of slots not holding a live entry, tombstones included
    #[must_use]
    pub fn empty_buckets(&self) -> usize {
        self.slots.iter().filter(|slot| !matches!(slot, Slot::Occupied(_))).count()
    }

    /// Clears the map, keeping the current capacity
    pub fn clear(&mut self) {
        trace!(capacity = self.capacity(), size = self.size, "clearing open addressing table");
        self.slots = empty_slots(self.capacity());
        self.size = 0;
    }

    /// Returns the number of live entries in the map
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the map holds no live entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of slots in the table
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the hash function the map was built with
    #[must_use]
    pub fn hash_function(&self) -> HashFunction {
        self.hash_function
    }

    /// Returns an iterator over the live key-value pairs in slot order
    #[must_use]
    #[allow(clippy::iter_without_into_iter)]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter { slots: self.slots.iter() }
    }
}

impl<V: Clone> OpenAddressingMap<V> {
    /// Returns every live key-value pair, in slot order
    #[must_use]
    pub fn get_keys_and_values(&self) -> Vec<(String, V)> {
        self.iter().map(|(k, v)| (k.to_owned(), v.clone())).collect()
    }
}

/// Allocates `capacity` empty slots
fn empty_slots<V>(capacity: usize) -> Vec<Slot<V>> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || Slot::Empty);
    slots
}

/// Iterator over the live key-value pairs of an `OpenAddressingMap`
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    /// Remaining slots to visit
    slots: std::slice::Iter<'a, Slot<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.by_ref().find_map(|slot| match slot {
            Slot::Occupied(entry) => Some((entry.key.as_str(), &entry.value)),
            Slot::Empty | Slot::Tombstone(_) => None,
        })
    }
}
