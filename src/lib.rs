//! # Copse: Scalable In-Memory Ordered and Associative Containers
//!
//! This crate provides four composable containers designed to be friendly
//! to structural-sharing immutable-update frameworks: every mutation
//! touches a bounded number of small nodes rather than rewriting a
//! monolithic array or hash table, and all stored node state is plain
//! owned data with no hidden closures, no interior mutability, and no
//! cycles.
//!
//! ## Containers
//!
//! - **`HashTrieMap<K, V>`** - hash-trie associative container with
//!   constant expected-time operations
//! - **`SortedCollection<T, C>`** - order-statistic B-tree with duplicate
//!   support and in-place re-sort
//! - **`SortedMap<K, V, O, G, C>`** - unique-key associative lookups with
//!   iteration ordered by a value-derived key
//! - **`LruCache<K, V>`** - capacity-bounded cache with batched
//!   least-recently-used eviction
//!
//! ## Quick Start
//!
//! ```rust
//! use copse::{HashTrieMap, LruCache, SortedCollection, SortedMap};
//!
//! // Constant expected-time associative container
//! let mut trie = HashTrieMap::new();
//! trie.set("answer", 42);
//! assert_eq!(trie.get(&"answer"), Some(&42));
//!
//! // Ordered collection with duplicates
//! let mut collection: SortedCollection<i32> = SortedCollection::new();
//! collection.insert(3);
//! collection.insert(1);
//! assert_eq!(collection.first(), Some(&1));
//!
//! // Associative map ordered by a value-derived key
//! let mut map = SortedMap::new(|v: &i64| *v);
//! map.set("b", 2).unwrap();
//! map.set("a", 1).unwrap();
//! let keys: Vec<&&str> = map.keys().collect();
//! assert_eq!(keys, vec![&"a", &"b"]);
//!
//! // LRU cache with batched eviction
//! let mut cache = LruCache::new(2)?;
//! cache.set("x", 1)?;
//! cache.set("y", 2)?;
//! cache.set("z", 3)?;
//! assert!(!cache.has(&"x"));
//! # Ok::<(), copse::CopseError>(())
//! ```
//!
//! ## Concurrency model
//!
//! Single-threaded cooperative: every operation is synchronous and runs
//! to completion. Containers are exclusively owned by their holder;
//! iterators borrow the container and assume the node graph is stable
//! for their lifetime.

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod cache;
pub mod error;
pub mod hash_trie;
pub mod iter;
pub mod sorted_map;
pub mod tree;

// Re-export core types
pub use error::{CopseError, Result};
pub use hash_trie::{hash_f64, hash_i64, hash_str, hash_u64, HashTrieMap, TrieKey};
pub use tree::{
    BTreeConfig, Comparator, FnOrder, NaturalOrder, OrderEntry, SortedCollection,
};

// Re-export composite containers
pub use cache::{CacheEntry, CacheView, LruCache, LruCacheConfig};
pub use sorted_map::{KeySetView, MapView, SortedMap};

// Re-export iterator utilities
pub use iter::{Restartable, Transform};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library (currently no-op, for future use)
pub fn init() {
    log::debug!("Initializing copse v{}", VERSION);
}
