//! Capacity-bounded caching
//!
//! An LRU cache built from the sorted map: entries are ordered by a
//! strictly monotonic recency stamp, so the least recently touched entry
//! is always first in iteration order and eviction is a walk from the
//! front.
//!
//! ## Components
//!
//! - **`LruCache<K, V>`** - the cache
//! - **`LruCacheConfig`** - capacity and eviction-slack tuning
//! - **`CacheEntry<V>`** - payload plus recency stamp

mod config;
mod lru;

pub use config::{LruCacheConfig, DEFAULT_SLACK_PERCENT, DEFAULT_SUGGESTED_SIZE};
pub use lru::{CacheEntry, CacheIter, CacheKeys, CacheValues, CacheView, LruCache};
