//! # Bucketry
//!
//! String-keyed hash maps built from scratch on a prime-sized bucket array.
//!
//! This crate provides two hash map implementations with the same interface:
//!
//! - `OpenAddressingMap`: quadratic probing with tombstone deletion, doubling whenever the
//!   load factor reaches 0.5
//! - `ChainingMap`: separate chaining, resized only when the caller asks
//!
//! Both take the hash function to use at construction time, and `find_mode` builds on
//! `ChainingMap` to report the most frequent values of a sequence.
//!
//! ## Basic Usage
//!
//! ```rust
//! use bucketry::{OpenAddressingMap, hash_function_2};
//!
//! // Create a new hash map with at least 11 slots
//! let mut map = OpenAddressingMap::new(11, hash_function_2);
//!
//! // Insert values
//! map.put("apple".to_string(), 1);
//! map.put("banana".to_string(), 2);
//!
//! // Retrieve values
//! assert_eq!(map.get("apple"), Some(&1));
//!
//! // Update values
//! map.put("apple".to_string(), 10);
//! assert_eq!(map.get("apple"), Some(&10));
//!
//! // Remove values
//! map.remove("apple");
//! assert_eq!(map.get("apple"), None);
//! assert_eq!(map.len(), 1);
//! ```
//!
//! ## Resizing
//!
//! ```rust
//! use bucketry::{ChainingMap, HashMapExtensions};
//!
//! let mut map = ChainingMap::with_capacity(53);
//! map.put("key1".to_string(), 10);
//! map.put("key2".to_string(), 20);
//!
//! // capacities are always rounded up to a prime
//! map.resize_table(100);
//! assert_eq!(map.capacity(), 101);
//! assert_eq!(map.len(), 2);
//!
//! let mut keys = map.keys();
//! keys.sort();
//! assert_eq!(keys, vec!["key1".to_string(), "key2".to_string()]);
//! ```

/// Module implementing a separate chaining hash map
mod chaining_map;
/// String hash functions the maps can be built with
mod hashing;
/// Module computing the most frequent values of a sequence
mod mode;
/// Module implementing an open addressing hash map with quadratic probing
mod open_addressing_map;
/// Utility functions and traits for the hash maps
mod utils;

/// Bucket count used by `Default` for both maps
pub const DEFAULT_CAPACITY: usize = 11;

pub use chaining_map::ChainingMap;
pub use hashing::{HashFunction, hash_function_1, hash_function_2};
pub use mode::find_mode;
pub use open_addressing_map::{LOAD_FACTOR_THRESHOLD, OpenAddressingMap};
pub use utils::{HashMapExtensions, is_prime, next_prime, prime_capacity};
