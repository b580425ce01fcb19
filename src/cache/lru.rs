//! LRU cache over the sorted map
//!
//! Entries wrap the cached payload with a recency stamp drawn from a
//! strictly monotonic 64-bit counter, and the underlying
//! [`SortedMap`](crate::SortedMap) orders entries by that stamp. The
//! least recently touched entry is therefore always first in iteration
//! order, which is exactly what eviction consumes.
//!
//! Eviction is batched: the cache tolerates a configurable slack over
//! its suggested size and, once crossed, evicts from the front until the
//! size is back at the target.

use super::config::LruCacheConfig;
use crate::error::Result;
use crate::hash_trie::TrieKey;
use crate::iter::Transform;
use crate::sorted_map::{self, KeySetView, SortedMap};
use crate::tree::NaturalOrder;
use std::fmt;

/// A cached payload together with its recency stamp
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CacheEntry<V> {
    /// The cached value
    pub payload: V,
    /// Stamp assigned at the entry's last touch
    pub recency: u64,
}

fn entry_recency<V>(entry: &CacheEntry<V>) -> u64 {
    entry.recency
}

fn project_pair<'a, K, V>((key, entry): (&'a K, &'a CacheEntry<V>)) -> (&'a K, &'a V) {
    (key, &entry.payload)
}

fn project_key<'a, K, V>((key, _): (&'a K, &'a V)) -> &'a K {
    key
}

fn project_value<'a, K, V>((_, value): (&'a K, &'a V)) -> &'a V {
    value
}

type CacheIndex<K, V> =
    SortedMap<K, CacheEntry<V>, u64, fn(&CacheEntry<V>) -> u64, NaturalOrder>;

/// Iterator over `(key, payload)` pairs from least to most recently
/// touched
pub type CacheIter<'a, K, V> = Transform<
    sorted_map::Iter<'a, K, CacheEntry<V>, u64>,
    fn((&'a K, &'a CacheEntry<V>)) -> (&'a K, &'a V),
>;

/// Iterator over cache keys from least to most recently touched
pub type CacheKeys<'a, K, V> = Transform<CacheIter<'a, K, V>, fn((&'a K, &'a V)) -> &'a K>;

/// Iterator over cache payloads from least to most recently touched
pub type CacheValues<'a, K, V> = Transform<CacheIter<'a, K, V>, fn((&'a K, &'a V)) -> &'a V>;

/// Capacity-bounded cache with least-recently-used eviction
///
/// # Examples
///
/// ```rust
/// use copse::LruCache;
///
/// let mut cache = LruCache::new(2)?;
/// cache.set("a", 1)?;
/// cache.set("b", 2)?;
/// cache.set("c", 3)?;
/// // Crossing the slack evicted back down to the suggested size,
/// // dropping the least recently touched key.
/// assert!(!cache.has(&"a"));
/// assert_eq!(cache.peek(&"c"), Some(&3));
/// # Ok::<(), copse::CopseError>(())
/// ```
pub struct LruCache<K: TrieKey + Clone, V> {
    map: CacheIndex<K, V>,
    next_stamp: u64,
    suggested_size: usize,
    slack_percent: u32,
    evicted_total: u64,
}

impl<K: TrieKey + Clone, V> LruCache<K, V> {
    /// Creates a cache targeting `suggested_size` entries with the
    /// default eviction slack
    pub fn new(suggested_size: usize) -> Result<Self> {
        Self::with_config(LruCacheConfig::with_suggested_size(suggested_size))
    }

    /// Creates a cache from an explicit configuration
    pub fn with_config(config: LruCacheConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            map: SortedMap::with_comparator(
                entry_recency::<V> as fn(&CacheEntry<V>) -> u64,
                NaturalOrder,
            ),
            next_stamp: 0,
            suggested_size: config.suggested_size,
            slack_percent: config.slack_percent,
            evicted_total: 0,
        })
    }

    /// Returns the number of cached entries
    ///
    /// May exceed [`suggested_size`](Self::suggested_size) by up to the
    /// configured slack between evictions.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The configured target size
    pub fn suggested_size(&self) -> usize {
        self.suggested_size
    }

    /// Total number of entries evicted over the cache's lifetime
    pub fn evicted_total(&self) -> u64 {
        self.evicted_total
    }

    /// Removes all entries without touching the recency counter
    pub fn clear(&mut self) {
        self.map.clear();
    }

    fn bump(&mut self) -> u64 {
        let stamp = self.next_stamp;
        self.next_stamp += 1;
        stamp
    }

    /// Inserts or replaces the entry for `key` as the most recently
    /// touched, evicting the least recently touched entries if the cache
    /// has outgrown its slack
    pub fn set(&mut self, key: K, value: V) -> Result<()> {
        let recency = self.bump();
        self.map.set(
            key,
            CacheEntry {
                payload: value,
                recency,
            },
        )?;
        if self.len() * 100 > self.suggested_size * (100 + self.slack_percent as usize) {
            self.evict_to_suggested_size();
        }
        Ok(())
    }

    fn evict_to_suggested_size(&mut self) {
        let mut evicted = 0u64;
        while self.map.len() > self.suggested_size {
            let Some((key, _)) = self.map.first() else {
                break;
            };
            let key = key.clone();
            self.map.remove(&key);
            evicted += 1;
        }
        self.evicted_total += evicted;
        log::debug!(
            "evicted {} least-recently-used entries down to suggested size {}",
            evicted,
            self.suggested_size
        );
    }

    /// Returns the payload for `key` and marks it most recently touched
    pub fn get(&mut self, key: &K) -> Result<Option<&V>> {
        if !self.map.has(key) {
            return Ok(None);
        }
        let recency = self.bump();
        let entry = self.map.update(key, |entry| entry.recency = recency)?;
        Ok(entry.map(|entry| &entry.payload))
    }

    /// Returns the payload for `key` without touching recency
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.map.get(key).map(|entry| &entry.payload)
    }

    /// Returns true if the key is cached, without touching recency
    pub fn has(&self, key: &K) -> bool {
        self.map.has(key)
    }

    /// Removes the entry for `key`, returning its payload
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.map.remove(key).map(|entry| entry.payload)
    }

    /// Applies `f` to the payload for `key`, mutating it in place, and
    /// marks the entry most recently touched
    pub fn update<F>(&mut self, key: &K, f: F) -> Result<Option<&V>>
    where
        F: FnOnce(&mut V),
    {
        if !self.map.has(key) {
            return Ok(None);
        }
        let recency = self.bump();
        let entry = self.map.update(key, |entry| {
            f(&mut entry.payload);
            entry.recency = recency;
        })?;
        Ok(entry.map(|entry| &entry.payload))
    }

    /// Replaces the payload for `key` with `f(current)` and marks the
    /// entry most recently touched
    pub fn update_with<F>(&mut self, key: &K, f: F) -> Result<Option<&V>>
    where
        F: FnOnce(V) -> V,
    {
        if !self.map.has(key) {
            return Ok(None);
        }
        let recency = self.bump();
        let entry = self.map.update_with(key, |entry| CacheEntry {
            payload: f(entry.payload),
            recency,
        })?;
        Ok(entry.map(|entry| &entry.payload))
    }

    /// Iterates `(key, payload)` pairs from least to most recently
    /// touched
    pub fn iter(&self) -> CacheIter<'_, K, V> {
        Transform::new(self.map.iter(), project_pair)
    }

    /// Iterates keys from least to most recently touched
    pub fn keys(&self) -> CacheKeys<'_, K, V> {
        Transform::new(self.iter(), project_key)
    }

    /// Iterates payloads from least to most recently touched
    pub fn values(&self) -> CacheValues<'_, K, V> {
        Transform::new(self.iter(), project_value)
    }

    /// Read-only associative view of this cache
    pub fn as_map_view(&self) -> CacheView<'_, K, V> {
        CacheView { cache: self }
    }

    /// Read-only view of this cache's key set
    pub fn as_key_set(
        &self,
    ) -> KeySetView<'_, K, CacheEntry<V>, u64, fn(&CacheEntry<V>) -> u64, NaturalOrder> {
        self.map.as_key_set()
    }
}

impl<K: TrieKey + Clone + fmt::Debug, V: fmt::Debug> fmt::Debug for LruCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Read-only associative view over an [`LruCache`]
///
/// Exposes the same surface as
/// [`MapView`](crate::sorted_map::MapView), projecting the payload out
/// of the recency wrapper. Reads through the view never touch recency.
pub struct CacheView<'a, K: TrieKey + Clone, V> {
    cache: &'a LruCache<K, V>,
}

impl<'a, K: TrieKey + Clone, V> CacheView<'a, K, V> {
    /// Number of cached entries
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// True if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Returns the payload for `key`
    pub fn get(&self, key: &K) -> Option<&'a V> {
        self.cache.peek(key)
    }

    /// Returns true if the key is cached
    pub fn has(&self, key: &K) -> bool {
        self.cache.has(key)
    }

    /// Iterates `(key, payload)` pairs in recency order
    pub fn iter(&self) -> CacheIter<'a, K, V> {
        self.cache.iter()
    }

    /// Alias for [`iter`](Self::iter), matching the associative-view
    /// naming convention
    pub fn entries(&self) -> CacheIter<'a, K, V> {
        self.cache.iter()
    }

    /// Iterates keys in recency order
    pub fn keys(&self) -> CacheKeys<'a, K, V> {
        self.cache.keys()
    }

    /// Iterates payloads in recency order
    pub fn values(&self) -> CacheValues<'a, K, V> {
        self.cache.values()
    }

    /// Invokes `f` with `(payload, key)` for each entry in recency order
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&V, &K),
    {
        for (key, value) in self.cache.iter() {
            f(value, key);
        }
    }
}
