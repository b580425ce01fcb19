//! Hash-trie associative container
//!
//! A 16-way trie keyed by successive 4-bit slices of a deterministic
//! 32-bit hash. Provides constant expected-time `get`/`set`/`remove` with
//! the structural-sharing-friendly property that every mutation touches a
//! bounded number of small nodes.
//!
//! ## Components
//!
//! - **`HashTrieMap<K, V>`** - the associative container
//! - **`TrieKey`** - key trait binding integers and strings to the trie
//! - **hash functions** - the deterministic 32-bit hashing contract

pub mod hash;
mod iter;
mod map;
mod node;

pub use hash::{hash_f64, hash_i64, hash_str, hash_u64, TrieKey};
pub use iter::{Iter, Keys, Values};
pub use map::HashTrieMap;
