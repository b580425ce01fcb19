//! Order-statistic B-tree collection
//!
//! A B-tree of values ordered by a pluggable comparator strategy, with
//! duplicate support and a path-guided re-sort operation for elements
//! whose ordering key changed in place.
//!
//! ## Components
//!
//! - **`SortedCollection<T, C>`** - the ordered container
//! - **`Comparator<T>`** - ordering/identity strategy trait, with
//!   `NaturalOrder` and `FnOrder` implementations
//! - **`OrderEntry<K, O>`** - the `{key, order}` element used by
//!   [`SortedMap`](crate::SortedMap)
//! - **`BTreeConfig`** - node-size tuning with validation

mod collection;
mod comparator;
mod iter;
mod node;

pub(crate) use collection::ValuePath;
pub use collection::{BTreeConfig, SortedCollection, DEFAULT_MAX_ITEMS_PER_LEVEL};
pub use comparator::{Comparator, FnOrder, NaturalOrder, OrderEntry, OrderEntryComparator};
pub use iter::{Iter, IterRev};
