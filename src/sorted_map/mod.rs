//! Sorted associative map and its read-only views
//!
//! Combines the hash trie (unique-key associative access) with the
//! order-statistic B-tree (iteration ordered by a value-derived key).
//!
//! ## Components
//!
//! - **`SortedMap<K, V, O, G, C>`** - the composite container
//! - **`MapView` / `KeySetView`** - read-only associative views

mod map;
mod views;

pub use map::{Iter, IterRev, Keys, SortedMap, Values};
pub use views::{KeySetView, MapView};
