//! Stack-based trie traversal
//!
//! Iterators hold an explicit stack of `(node, next slot)` frames plus a
//! cursor into the current multi-value node. Traversal state sits dormant
//! between `next` calls, so iteration is resumable under external control
//! and restartable from the container root.

use super::hash::SLOT_COUNT;
use super::node::{SlotPayload, TrieNode};

/// Iterator over `(key, value)` pairs of a [`HashTrieMap`](crate::HashTrieMap)
pub struct Iter<'a, K, V> {
    stack: Vec<(&'a TrieNode<K, V>, usize)>,
    multi: Option<std::slice::Iter<'a, (K, V)>>,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(root: &'a TrieNode<K, V>) -> Self {
        Self {
            stack: vec![(root, 0)],
            multi: None,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entries) = self.multi.as_mut() {
                match entries.next() {
                    Some((k, v)) => return Some((k, v)),
                    None => self.multi = None,
                }
                continue;
            }
            let frame = self.stack.last_mut()?;
            let node = frame.0;
            if frame.1 == SLOT_COUNT {
                self.stack.pop();
                continue;
            }
            let idx = frame.1;
            frame.1 += 1;
            match &node.slots[idx] {
                None => {}
                Some(SlotPayload::Single(k, v)) => return Some((k, v)),
                Some(SlotPayload::Multi(entries)) => self.multi = Some(entries.iter()),
                Some(SlotPayload::Branch(child)) => self.stack.push((child.as_ref(), 0)),
            }
        }
    }
}

/// Iterator over the keys of a [`HashTrieMap`](crate::HashTrieMap)
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Keys<'a, K, V> {
    pub(crate) fn new(root: &'a TrieNode<K, V>) -> Self {
        Self {
            inner: Iter::new(root),
        }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }
}

/// Iterator over the values of a [`HashTrieMap`](crate::HashTrieMap)
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Values<'a, K, V> {
    pub(crate) fn new(root: &'a TrieNode<K, V>) -> Self {
        Self {
            inner: Iter::new(root),
        }
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }
}
