//! Sorted associative map
//!
//! `SortedMap` pairs a hash trie (key to value) with a B-tree of
//! `{key, order}` entries, giving unique-key associative lookups plus
//! iteration ordered by a key derived from each value. The ordering key
//! is extracted by a caller-supplied function and compared by a pluggable
//! comparator, so the same value type can be ordered by any of its
//! facets.
//!
//! The two structures must agree on their key sets at all times. Going
//! through [`update`](SortedMap::update) keeps them aligned when a
//! mutation moves a value's ordering key; mutating values behind the
//! map's back does not, and is surfaced as a corrupted-state error on the
//! next update.

use crate::error::{CopseError, Result};
use crate::hash_trie::{HashTrieMap, TrieKey};
use crate::tree::{
    self, BTreeConfig, Comparator, NaturalOrder, OrderEntry, OrderEntryComparator,
    SortedCollection,
};
use std::cmp::Ordering;
use std::fmt;

/// Associative container with ordered iteration
///
/// # Examples
///
/// ```rust
/// use copse::SortedMap;
///
/// #[derive(Debug)]
/// struct Task {
///     name: &'static str,
///     priority: i64,
/// }
///
/// let mut map = SortedMap::new(|task: &Task| task.priority);
/// map.set("a", Task { name: "deploy", priority: 3 }).unwrap();
/// map.set("b", Task { name: "review", priority: 1 }).unwrap();
/// map.set("c", Task { name: "triage", priority: 2 }).unwrap();
///
/// let in_order: Vec<&'static str> = map.values().map(|t| t.name).collect();
/// assert_eq!(in_order, vec!["review", "triage", "deploy"]);
/// ```
pub struct SortedMap<K, V, O, G, C = NaturalOrder>
where
    K: TrieKey,
    C: Comparator<O>,
{
    entries: HashTrieMap<K, V>,
    order: SortedCollection<OrderEntry<K, O>, OrderEntryComparator<C, K, O>>,
    ordering_key: G,
    order_cmp: C,
}

impl<K, V, O, G> SortedMap<K, V, O, G, NaturalOrder>
where
    K: TrieKey + Clone,
    O: Ord,
    G: Fn(&V) -> O,
{
    /// Creates an empty map ordered naturally by the extracted key
    pub fn new(ordering_key: G) -> Self {
        Self::with_comparator(ordering_key, NaturalOrder)
    }
}

impl<K, V, O, G, C> SortedMap<K, V, O, G, C>
where
    K: TrieKey + Clone,
    G: Fn(&V) -> O,
    C: Comparator<O> + Clone,
{
    /// Creates an empty map with an explicit ordering-key comparator
    pub fn with_comparator(ordering_key: G, cmp: C) -> Self {
        Self {
            entries: HashTrieMap::new(),
            order: SortedCollection::with_comparator(OrderEntryComparator::new(cmp.clone())),
            ordering_key,
            order_cmp: cmp,
        }
    }

    /// Creates an empty map with explicit B-tree tuning parameters
    pub fn with_config(ordering_key: G, cmp: C, config: BTreeConfig) -> Result<Self> {
        Ok(Self {
            entries: HashTrieMap::new(),
            order: SortedCollection::with_config(OrderEntryComparator::new(cmp.clone()), config)?,
            ordering_key,
            order_cmp: cmp,
        })
    }

    /// Returns the number of entries, read from the order index
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the map holds no entries
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Removes all entries
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    /// Returns the value stored under `key`
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Returns true if the key is present
    pub fn has(&self, key: &K) -> bool {
        self.entries.has(key)
    }

    /// Inserts or replaces the entry for `key`, returning the previous
    /// value if one was present
    ///
    /// A replacement goes through the update path so the order index
    /// follows the new value's ordering key.
    pub fn set(&mut self, key: K, value: V) -> Result<Option<V>> {
        if self.entries.has(&key) {
            let mut previous = None;
            self.update(&key, |current| {
                previous = Some(std::mem::replace(current, value));
            })?;
            Ok(previous)
        } else {
            let order = (self.ordering_key)(&value);
            self.order.insert(OrderEntry {
                key: key.clone(),
                order,
            });
            self.entries.set(key, value);
            Ok(None)
        }
    }

    /// Removes the entry for `key`, returning its value
    ///
    /// Removal of an absent key is a no-op.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let existing = self.entries.get(key)?;
        let probe = OrderEntry {
            key: key.clone(),
            order: (self.ordering_key)(existing),
        };
        self.order.remove(&probe);
        self.entries.remove(key)
    }

    /// Applies `f` to the value stored under `key`, mutating it in
    /// place, then re-positions the entry if its ordering key changed
    ///
    /// Returns a reference to the resulting value; `Ok(None)` when the
    /// key is absent. A key present in the hash trie but missing from the
    /// order index means the two structures have diverged, which is fatal.
    pub fn update<F>(&mut self, key: &K, f: F) -> Result<Option<&V>>
    where
        F: FnOnce(&mut V),
    {
        let Some(existing) = self.entries.get(key) else {
            return Ok(None);
        };
        let probe = OrderEntry {
            key: key.clone(),
            order: (self.ordering_key)(existing),
        };
        let Some(path) = self.order.lookup_path(&probe) else {
            return Err(CopseError::corrupted_state(
                "key present in the hash trie but missing from the order index",
            ));
        };
        let Some(value) = self.entries.get_mut(key) else {
            return Err(CopseError::corrupted_state(
                "hash trie entry vanished during update",
            ));
        };
        f(value);
        let new_order = (self.ordering_key)(value);
        self.resort(path, probe.order, new_order);
        Ok(self.entries.get(key))
    }

    /// Replaces the value stored under `key` with `f(current)`, then
    /// re-positions the entry if its ordering key changed
    pub fn update_with<F>(&mut self, key: &K, f: F) -> Result<Option<&V>>
    where
        F: FnOnce(V) -> V,
    {
        let Some(existing) = self.entries.get(key) else {
            return Ok(None);
        };
        let probe = OrderEntry {
            key: key.clone(),
            order: (self.ordering_key)(existing),
        };
        let Some(path) = self.order.lookup_path(&probe) else {
            return Err(CopseError::corrupted_state(
                "key present in the hash trie but missing from the order index",
            ));
        };
        let Some(new_value) = self.entries.update_with(key, f) else {
            return Err(CopseError::corrupted_state(
                "hash trie entry vanished during update",
            ));
        };
        let new_order = (self.ordering_key)(new_value);
        self.resort(path, probe.order, new_order);
        Ok(self.entries.get(key))
    }

    /// Overwrites the order-index entry at `path` when the ordering key
    /// moved, then restores the B-tree ordering invariant
    fn resort(&mut self, path: tree::ValuePath, stored_order: O, new_order: O) {
        if self.order_cmp.cmp(&new_order, &stored_order) == Ordering::Equal {
            return;
        }
        if let Some(entry) = self.order.value_at_path_mut(&path) {
            entry.order = new_order;
        }
        self.order.ensure_sorted_order(path);
    }

    /// Returns the entry with the smallest ordering key
    pub fn first(&self) -> Option<(&K, &V)> {
        let entry = self.order.first()?;
        let value = self.entries.get(&entry.key)?;
        Some((&entry.key, value))
    }

    /// Returns the entry with the largest ordering key
    pub fn last(&self) -> Option<(&K, &V)> {
        let entry = self.order.last()?;
        let value = self.entries.get(&entry.key)?;
        Some((&entry.key, value))
    }

    /// Iterates entries in ascending ordering-key order
    pub fn iter(&self) -> Iter<'_, K, V, O> {
        Iter {
            inner: self.order.iter(),
            entries: &self.entries,
        }
    }

    /// Iterates entries in descending ordering-key order
    pub fn iter_rev(&self) -> IterRev<'_, K, V, O> {
        IterRev {
            inner: self.order.iter_rev(),
            entries: &self.entries,
        }
    }

    /// Iterates keys in ascending ordering-key order
    pub fn keys(&self) -> Keys<'_, K, V, O> {
        Keys { inner: self.iter() }
    }

    /// Iterates values in ascending ordering-key order
    pub fn values(&self) -> Values<'_, K, V, O> {
        Values { inner: self.iter() }
    }

    /// Read-only associative view of this map
    pub fn as_map_view(&self) -> super::views::MapView<'_, K, V, O, G, C> {
        super::views::MapView::new(self)
    }

    /// Read-only view of this map's key set
    pub fn as_key_set(&self) -> super::views::KeySetView<'_, K, V, O, G, C> {
        super::views::KeySetView::new(self)
    }
}

/// Iterator over `(key, value)` pairs in ordering-key order
pub struct Iter<'a, K: TrieKey, V, O> {
    inner: tree::Iter<'a, OrderEntry<K, O>>,
    entries: &'a HashTrieMap<K, V>,
}

impl<'a, K: TrieKey, V, O> Iterator for Iter<'a, K, V, O> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = self.inner.next()?;
            if let Some(value) = self.entries.get(&entry.key) {
                return Some((&entry.key, value));
            }
        }
    }
}

/// Iterator over `(key, value)` pairs in reverse ordering-key order
pub struct IterRev<'a, K: TrieKey, V, O> {
    inner: tree::IterRev<'a, OrderEntry<K, O>>,
    entries: &'a HashTrieMap<K, V>,
}

impl<'a, K: TrieKey, V, O> Iterator for IterRev<'a, K, V, O> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = self.inner.next()?;
            if let Some(value) = self.entries.get(&entry.key) {
                return Some((&entry.key, value));
            }
        }
    }
}

/// Iterator over keys in ordering-key order
pub struct Keys<'a, K: TrieKey, V, O> {
    inner: Iter<'a, K, V, O>,
}

impl<'a, K: TrieKey, V, O> Iterator for Keys<'a, K, V, O> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }
}

/// Iterator over values in ordering-key order
pub struct Values<'a, K: TrieKey, V, O> {
    inner: Iter<'a, K, V, O>,
}

impl<'a, K: TrieKey, V, O> Iterator for Values<'a, K, V, O> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }
}

impl<K, V, O, G, C> fmt::Debug for SortedMap<K, V, O, G, C>
where
    K: TrieKey + Clone + fmt::Debug,
    V: fmt::Debug,
    G: Fn(&V) -> O,
    C: Comparator<O> + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, K, V, O, G, C> IntoIterator for &'a SortedMap<K, V, O, G, C>
where
    K: TrieKey + Clone,
    G: Fn(&V) -> O,
    C: Comparator<O> + Clone,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, O>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
