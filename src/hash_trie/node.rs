//! Trie node storage
//!
//! A node is an indexed sparse container of sixteen slots. Each occupied
//! slot holds one of three payload kinds, encoded as a tagged sum so no
//! runtime type inspection is ever needed. All node state is plain owned
//! data: no back pointers, no interior mutability, no cycles.

use super::hash::SLOT_COUNT;

/// Payload stored in an occupied trie slot
///
/// `Single` carries one entry and appears at depths below the maximum.
/// `Multi` appears only at the maximum depth, where the full 32-bit hash
/// is exhausted, and holds every entry whose hash collides there.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub(crate) enum SlotPayload<K, V> {
    /// A deeper trie level
    Branch(Box<TrieNode<K, V>>),
    /// Exactly one entry
    Single(K, V),
    /// Entries whose full hashes collide; never empty
    Multi(Vec<(K, V)>),
}

/// One level of the hash trie: sixteen optional slots
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub(crate) struct TrieNode<K, V> {
    pub(crate) slots: [Option<SlotPayload<K, V>>; SLOT_COUNT],
}

impl<K, V> TrieNode<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            slots: [const { None }; SLOT_COUNT],
        }
    }

    /// Number of occupied slots in this node alone
    #[cfg(test)]
    pub(crate) fn occupied(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

impl<K, V> Default for TrieNode<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
