//! Property-based testing for the container implementations
//!
//! Uses proptest to validate correctness properties against standard
//! library oracles across generated operation sequences.

use copse::{HashTrieMap, SortedCollection, SortedMap};
use proptest::prelude::*;
use std::collections::{BTreeMap, HashMap};

// =============================================================================
// PROPERTY TEST GENERATORS
// =============================================================================

/// Operations applicable to any associative container
#[derive(Debug, Clone)]
enum MapOp {
    Set(u64, u64),
    Remove(u64),
    Update(u64, u64),
}

fn map_ops_strategy(key_space: u64, len: usize) -> impl Strategy<Value = Vec<MapOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => (0..key_space, any::<u64>()).prop_map(|(k, v)| MapOp::Set(k, v)),
            1 => (0..key_space).prop_map(MapOp::Remove),
            1 => (0..key_space, any::<u64>()).prop_map(|(k, v)| MapOp::Update(k, v)),
        ],
        0..len,
    )
}

// =============================================================================
// HASH TRIE MAP vs HASHMAP ORACLE
// =============================================================================

proptest! {
    #[test]
    fn prop_hash_trie_matches_hashmap_oracle(ops in map_ops_strategy(512, 2000)) {
        let mut map = HashTrieMap::new();
        let mut oracle: HashMap<u64, u64> = HashMap::new();

        for op in ops {
            match op {
                MapOp::Set(k, v) => {
                    prop_assert_eq!(map.set(k, v), oracle.insert(k, v));
                }
                MapOp::Remove(k) => {
                    prop_assert_eq!(map.remove(&k), oracle.remove(&k));
                }
                MapOp::Update(k, v) => {
                    let expected = oracle.get_mut(&k).map(|slot| {
                        *slot = slot.wrapping_add(v);
                        *slot
                    });
                    let actual = map.update(&k, |slot| *slot = slot.wrapping_add(v));
                    prop_assert_eq!(actual.copied(), expected);
                }
            }
            prop_assert_eq!(map.len(), oracle.len());
        }

        for (k, v) in &oracle {
            prop_assert_eq!(map.get(k), Some(v));
        }
        let mut iterated: Vec<(u64, u64)> = map.iter().map(|(k, v)| (*k, *v)).collect();
        iterated.sort_unstable();
        let mut expected: Vec<(u64, u64)> = oracle.into_iter().collect();
        expected.sort_unstable();
        prop_assert_eq!(iterated, expected);
    }

    #[test]
    fn prop_hash_trie_iteration_is_stable(keys in prop::collection::vec(any::<u64>(), 0..500)) {
        let mut map = HashTrieMap::new();
        for &k in &keys {
            map.set(k, k);
        }
        let first: Vec<u64> = map.keys().copied().collect();
        let second: Vec<u64> = map.keys().copied().collect();
        prop_assert_eq!(first, second);
    }
}

// =============================================================================
// SORTED COLLECTION ORDER & COUNT PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn prop_sorted_collection_iterates_sorted(values in prop::collection::vec(any::<i64>(), 0..1500)) {
        let mut collection: SortedCollection<i64> = SortedCollection::new();
        for &v in &values {
            collection.insert(v);
        }
        prop_assert_eq!(collection.len(), values.len());
        let contents: Vec<i64> = collection.iter().copied().collect();
        let mut expected = values.clone();
        expected.sort_unstable();
        prop_assert_eq!(contents, expected);
    }

    #[test]
    fn prop_backward_iteration_is_reverse(values in prop::collection::vec(any::<i32>(), 0..800)) {
        let mut collection: SortedCollection<i32> = SortedCollection::new();
        collection.extend(values.iter().copied());
        let forward: Vec<i32> = collection.iter().copied().collect();
        let mut backward: Vec<i32> = collection.iter_rev().copied().collect();
        backward.reverse();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn prop_insert_remove_count(
        values in prop::collection::vec(0i64..200, 1..600),
        removals in prop::collection::vec(0i64..200, 0..300),
    ) {
        let mut collection: SortedCollection<i64> = SortedCollection::new();
        let mut multiset: BTreeMap<i64, usize> = BTreeMap::new();
        for &v in &values {
            collection.insert(v);
            *multiset.entry(v).or_insert(0) += 1;
        }
        let mut removed = 0usize;
        for &v in &removals {
            let present = multiset.get(&v).copied().unwrap_or(0) > 0;
            let result = collection.remove(&v);
            prop_assert_eq!(result.is_some(), present);
            if present {
                removed += 1;
                if let Some(slot) = multiset.get_mut(&v) {
                    *slot -= 1;
                }
            }
        }
        prop_assert_eq!(collection.len(), values.len() - removed);
        let contents: Vec<i64> = collection.iter().copied().collect();
        let expected: Vec<i64> = multiset
            .iter()
            .flat_map(|(&v, &count)| std::iter::repeat(v).take(count))
            .collect();
        prop_assert_eq!(contents, expected);
    }

    #[test]
    fn prop_duplicates_keep_distinct_positions(value in any::<i32>(), count in 1usize..200) {
        let mut collection: SortedCollection<i32> = SortedCollection::new();
        for _ in 0..count {
            collection.insert(value);
        }
        prop_assert_eq!(collection.len(), count);
        prop_assert_eq!(collection.iter().count(), count);
        collection.remove(&value);
        prop_assert_eq!(collection.len(), count - 1);
    }

    #[test]
    fn prop_first_last_match_iteration(values in prop::collection::vec(any::<i64>(), 1..400)) {
        let collection: SortedCollection<i64> = values.iter().copied().collect();
        let contents: Vec<i64> = collection.iter().copied().collect();
        prop_assert_eq!(collection.first(), contents.first());
        prop_assert_eq!(collection.last(), contents.last());
    }
}

// =============================================================================
// SORTED MAP CONSISTENCY PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn prop_sorted_map_matches_oracle(ops in map_ops_strategy(256, 1200)) {
        let mut map = SortedMap::new((|v: &u64| *v) as fn(&u64) -> u64);
        let mut oracle: HashMap<u64, u64> = HashMap::new();

        for op in ops {
            match op {
                MapOp::Set(k, v) => {
                    // Fold the key into the low bits so ordering keys stay
                    // unique per key and iteration order is deterministic.
                    let value = v.wrapping_shl(8) | k;
                    map.set(k, value).unwrap();
                    oracle.insert(k, value);
                }
                MapOp::Remove(k) => {
                    prop_assert_eq!(map.remove(&k), oracle.remove(&k));
                }
                MapOp::Update(k, v) => {
                    let value = v.wrapping_shl(8) | k;
                    let expected = oracle.get_mut(&k).map(|slot| {
                        *slot = value;
                        *slot
                    });
                    let actual = map.update(&k, |slot| *slot = value).unwrap();
                    prop_assert_eq!(actual.copied(), expected);
                }
            }
            // Hash side and order side agree after every operation.
            prop_assert_eq!(map.len(), oracle.len());
            prop_assert_eq!(map.keys().count(), oracle.len());
        }

        // Ordered iteration equals the oracle sorted by ordering key.
        let ordered: BTreeMap<u64, u64> = oracle.iter().map(|(k, v)| (*v, *k)).collect();
        let expected: Vec<(u64, u64)> = ordered.into_iter().map(|(v, k)| (k, v)).collect();
        let actual: Vec<(u64, u64)> = map.iter().map(|(k, v)| (*k, *v)).collect();
        prop_assert_eq!(actual, expected);
    }
}

// =============================================================================
// RE-SORT IDEMPOTENCE
// =============================================================================

proptest! {
    #[test]
    fn prop_order_preserving_update_keeps_sequence(
        keys in prop::collection::hash_set(0u64..128, 2..64),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut map = SortedMap::new((|v: &(u64, u64)| v.0) as fn(&(u64, u64)) -> u64);
        let keys: Vec<u64> = keys.into_iter().collect();
        for &k in &keys {
            map.set(k, (k, 0)).unwrap();
        }
        let target = keys[pick.index(keys.len())];
        let before: Vec<u64> = map.keys().copied().collect();
        // Mutates a non-ordering facet only.
        map.update(&target, |v| v.1 += 1).unwrap();
        let after: Vec<u64> = map.keys().copied().collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn prop_order_changing_update_equals_remove_reinsert(
        keys in prop::collection::hash_set(0u64..128, 2..64),
        pick in any::<prop::sample::Index>(),
        new_order in 1000u64..2000,
    ) {
        let keys: Vec<u64> = keys.into_iter().collect();
        let target = keys[pick.index(keys.len())];

        let mut updated = SortedMap::new((|v: &(u64, u64)| v.0) as fn(&(u64, u64)) -> u64);
        let mut rebuilt = SortedMap::new((|v: &(u64, u64)| v.0) as fn(&(u64, u64)) -> u64);
        for &k in &keys {
            updated.set(k, (k, k)).unwrap();
            rebuilt.set(k, (k, k)).unwrap();
        }

        updated.update(&target, |v| v.0 = new_order).unwrap();
        rebuilt.remove(&target);
        rebuilt.set(target, (new_order, target)).unwrap();

        let a: Vec<(u64, u64, u64)> = updated.iter().map(|(k, v)| (*k, v.0, v.1)).collect();
        let b: Vec<(u64, u64, u64)> = rebuilt.iter().map(|(k, v)| (*k, v.0, v.1)).collect();
        prop_assert_eq!(a, b);
    }
}
