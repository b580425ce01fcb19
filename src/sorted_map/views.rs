//! Read-only associative views
//!
//! Thin projections over [`SortedMap`] that expose the standard
//! associative-view surface without mutators. A view borrows the map, so
//! it is valid exactly as long as the map is not mutated.

use super::map::{Iter, Keys, SortedMap, Values};
use crate::hash_trie::TrieKey;
use crate::tree::Comparator;

/// Read-only map view over a [`SortedMap`]
///
/// # Examples
///
/// ```rust
/// use copse::SortedMap;
///
/// let mut map = SortedMap::new(|v: &i64| *v);
/// map.set("b", 2).unwrap();
/// map.set("a", 1).unwrap();
/// let view = map.as_map_view();
/// assert_eq!(view.len(), 2);
/// assert_eq!(view.get(&"a"), Some(&1));
/// let entries: Vec<(&&str, &i64)> = view.entries().collect();
/// assert_eq!(entries, vec![(&"a", &1), (&"b", &2)]);
/// ```
pub struct MapView<'a, K, V, O, G, C>
where
    K: TrieKey,
    C: Comparator<O>,
{
    map: &'a SortedMap<K, V, O, G, C>,
}

impl<'a, K, V, O, G, C> MapView<'a, K, V, O, G, C>
where
    K: TrieKey + Clone,
    G: Fn(&V) -> O,
    C: Comparator<O> + Clone,
{
    pub(crate) fn new(map: &'a SortedMap<K, V, O, G, C>) -> Self {
        Self { map }
    }

    /// Number of entries in the underlying map
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True if the underlying map is empty
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the value stored under `key`
    pub fn get(&self, key: &K) -> Option<&'a V> {
        self.map.get(key)
    }

    /// Returns true if the key is present
    pub fn has(&self, key: &K) -> bool {
        self.map.has(key)
    }

    /// Iterates `(key, value)` pairs in the map's iteration order
    pub fn iter(&self) -> Iter<'a, K, V, O> {
        self.map.iter()
    }

    /// Alias for [`iter`](Self::iter), matching the associative-view
    /// naming convention
    pub fn entries(&self) -> Iter<'a, K, V, O> {
        self.map.iter()
    }

    /// Iterates keys in the map's iteration order
    pub fn keys(&self) -> Keys<'a, K, V, O> {
        self.map.keys()
    }

    /// Iterates values in the map's iteration order
    pub fn values(&self) -> Values<'a, K, V, O> {
        self.map.values()
    }

    /// Invokes `f` with `(value, key)` for each entry, in the map's
    /// iteration order
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&V, &K),
    {
        for (key, value) in self.map.iter() {
            f(value, key);
        }
    }
}

impl<'a, 'b, K, V, O, G, C> IntoIterator for &'b MapView<'a, K, V, O, G, C>
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

/// Read-only key-set view over a [`SortedMap`]
pub struct KeySetView<'a, K, V, O, G, C>
where
    K: TrieKey,
    C: Comparator<O>,
{
    map: &'a SortedMap<K, V, O, G, C>,
}

impl<'a, K, V, O, G, C> KeySetView<'a, K, V, O, G, C>
where
    K: TrieKey + Clone,
    G: Fn(&V) -> O,
    C: Comparator<O> + Clone,
{
    pub(crate) fn new(map: &'a SortedMap<K, V, O, G, C>) -> Self {
        Self { map }
    }

    /// Number of keys in the underlying map
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True if the underlying map is empty
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns true if the key is a member of the set
    pub fn has(&self, key: &K) -> bool {
        self.map.has(key)
    }

    /// Iterates keys in the map's iteration order
    pub fn iter(&self) -> Keys<'a, K, V, O> {
        self.map.keys()
    }

    /// Invokes `f` with each key, in the map's iteration order
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&K),
    {
        for key in self.map.keys() {
            f(key);
        }
    }
}

impl<'a, 'b, K, V, O, G, C> IntoIterator for &'b KeySetView<'a, K, V, O, G, C>
where
    K: TrieKey + Clone,
    G: Fn(&V) -> O,
    C: Comparator<O> + Clone,
{
    type Item = &'a K;
    type IntoIter = Keys<'a, K, V, O>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
