//! # Linear Probing Hash Map
//!
//! A Rust implementation of an open addressing hash table with linear probing.
//!
//! `LinearProbingMap` stores every entry directly in a fixed-length table of
//! slots. A key starts at its home index, `hash(key) % capacity`, and walks
//! forward one slot at a time, wrapping at the end of the table, until it finds
//! itself or an empty slot. Removal leaves a tombstone behind so that entries
//! further along the run stay reachable.
//!
//! The table grows to `2 * capacity + 1` slots before any insert that would push
//! the load factor above [`MAX_LOAD_FACTOR`]. It can also be resized explicitly
//! with [`LinearProbingMap::resize_backing_table`], which skips the load factor
//! check.
//!
//! ## Basic Usage
//!
//! ```rust
//! use linprobe::{LinearProbingMap, MapError};
//!
//! // Create a new hash map with 13 slots
//! let mut map = LinearProbingMap::new();
//!
//! // Insert values
//! map.put("apple".to_string(), 1);
//! map.put("banana".to_string(), 2);
//!
//! // Retrieve values
//! assert_eq!(map.get("apple"), Ok(&1));
//!
//! // Update values
//! assert_eq!(map.put("apple".to_string(), 10), Some(1));
//! assert_eq!(map.get("apple"), Ok(&10));
//!
//! // Remove values
//! assert_eq!(map.remove("apple"), Ok(10));
//! assert_eq!(map.get("apple"), Err(MapError::KeyNotFound));
//! assert!(!map.contains_key("apple"));
//! ```
//!
//! ## Resizing
//!
//! ```rust
//! use linprobe::{LinearProbingMap, MapError};
//!
//! let mut map: LinearProbingMap<u32, u32> = (0..8).map(|i| (i, i * i)).collect();
//! assert_eq!(map.capacity(), 13);
//!
//! // The ninth entry would take the load factor to 9 / 13, above 0.67
//! map.put(8, 64);
//! assert_eq!(map.capacity(), 27);
//!
//! // Explicit resizes may go past the load factor, but never below the size
//! assert!(map.resize_backing_table(9).is_ok());
//! assert!(matches!(map.resize_backing_table(8), Err(MapError::InvalidArgument(_))));
//! assert_eq!(map.get(&7), Ok(&49));
//! ```

/// Error type returned by fallible map operations
mod error;
/// Module implementing the linear probing hash map
mod linear_probing_map;
/// Slot and entry types of the backing table
mod slot;
/// Utility functions and traits for the hash map
pub mod utils;

pub use error::{MapError, Result};
pub use linear_probing_map::{INITIAL_CAPACITY, Iter, LinearProbingMap, MAX_LOAD_FACTOR};
pub use slot::{Entry, Slot};
pub use utils::ProbeStats;
