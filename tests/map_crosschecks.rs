use avl_collections::AvlMap;
use proptest::prelude::*;
use std::collections::BTreeMap as StdMap;

mod common;
use common::*;

// Compare the map against the std reference through the public surface:
// length, membership, and the eager key extraction, plus the AVL height
// bound.
fn chk_maps(map: &AvlMap<u16, u16>, std_map: &StdMap<u16, u16>) {
    assert_eq!(map.len(), std_map.len());
    assert_eq!(map.is_empty(), std_map.is_empty());

    let keys = map.keys();
    assert_eq!(keys.len(), map.len());
    assert!(keys.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(keys, std_map.keys().copied().collect::<Vec<_>>());

    assert!(map.height() <= height_bound(map.len()));
}

fn check_inserts(pairs: SmallIntPairs) {
    let mut map = AvlMap::new();
    let mut std_map = StdMap::new();

    for (k, v) in pairs {
        assert_eq!(map.insert(k, v), std_map.insert(k, v).is_some());
    }

    chk_maps(&map, &std_map);

    for k in 0..1024 {
        assert_eq!(map.get(&k), std_map.get(&k));
        assert_eq!(map.contains(&k), std_map.contains_key(&k));
    }
}

fn check_mixed_ops(ops: Vec<i32>) {
    let mut map = AvlMap::new();
    let mut std_map = StdMap::new();

    for op in ops {
        if op >= 0 {
            let k = op as u16;
            assert_eq!(map.insert(k, k), std_map.insert(k, k).is_some());
        } else {
            let k = (-op) as u16;
            assert_eq!(map.remove(&k), std_map.remove(&k).is_some());
        }
        chk_maps(&map, &std_map);
    }
}

fn check_build_and_dismantle(pairs: SmallIntPairs) {
    let mut map = AvlMap::new();
    let mut std_map = StdMap::new();

    for &(k, v) in pairs.iter() {
        map.insert(k, v);
        std_map.insert(k, v);
    }
    chk_maps(&map, &std_map);

    for &(k, _) in pairs.iter() {
        assert_eq!(map.remove(&k), std_map.remove(&k).is_some());
        chk_maps(&map, &std_map);
    }

    assert!(map.is_empty());
    assert_eq!(map.height(), 0);
}

proptest! {
    #[test]
    fn test_inserts(pairs in small_int_pairs()) {
        check_inserts(pairs);
    }

    #[test]
    fn test_mixed_ops(ops in signed_ops()) {
        check_mixed_ops(ops);
    }

    #[test]
    fn test_build_and_dismantle(pairs in small_int_pairs()) {
        check_build_and_dismantle(pairs);
    }
}

#[test]
fn empty_map_behaviors() {
    let mut map: AvlMap<u16, u16> = AvlMap::new();

    assert!(!map.contains(&0));
    assert_eq!(map.get(&0), None);
    assert!(!map.remove(&0));
    assert_eq!(map.len(), 0);
    assert!(map.keys().is_empty());
    assert_eq!(map.height(), 0);
}

#[test]
fn single_entry_roundtrip() {
    let mut map = AvlMap::new();
    assert!(!map.insert(7, "seven"));
    assert_eq!(map.len(), 1);
    assert_eq!(map.height(), 1);

    assert!(map.remove(&7));
    assert!(map.is_empty());
    assert_eq!(map.get(&7), None);
}

#[test]
fn update_existing_key() {
    let mut map = AvlMap::new();
    assert!(!map.insert("a", 1));
    assert!(map.insert("a", 2));
    assert_eq!(map.len(), 1);
    assert_eq!(map.get(&"a"), Some(&2));
}

#[test]
fn double_remove() {
    let mut map: AvlMap<_, _> = (0..10).map(|k| (k, ())).collect();
    assert!(map.remove(&3));
    assert!(!map.remove(&3));
    assert_eq!(map.len(), 9);
}

#[test]
fn tree_rendering_is_indented_right_first() {
    let map = AvlMap::from([(2, ()), (1, ()), (3, ())]);
    let mut out = String::new();
    map.write_tree(&mut out).unwrap();
    assert_eq!(out, "    3\n2\n    1\n");
}

// Build a large map from shuffled distinct keys, then dismantle it in a
// different shuffled order, watching the invariants and the rotation
// telemetry along the way.
#[test]
fn shuffled_10k_build_and_teardown() {
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let mut keys: Vec<u32> = (0..10_000).collect();
    keys.shuffle(&mut rng);

    let mut map = AvlMap::new();
    let mut reference = StdMap::new();
    for (i, &k) in keys.iter().enumerate() {
        assert!(!map.insert(k, i));
        reference.insert(k, i);
        if i % 499 == 0 {
            assert!(map.height() <= height_bound(map.len()));
        }
    }

    assert_eq!(map.len(), 10_000);
    assert_eq!(map.keys(), reference.keys().copied().collect::<Vec<_>>());

    let built = map.rotation_stats();
    let ins_total =
        built.inserts.ll + built.inserts.lr + built.inserts.rl + built.inserts.rr;
    assert!(ins_total > 0);

    keys.shuffle(&mut rng);
    for (i, &k) in keys.iter().enumerate() {
        assert!(map.remove(&k));
        if i % 499 == 0 {
            assert!(map.height() <= height_bound(map.len()));
            assert_eq!(map.len(), 10_000 - i - 1);
        }
    }

    assert!(map.is_empty());
    let stats = map.rotation_stats();
    let rm_total =
        stats.removes.ll + stats.removes.lr + stats.removes.rl + stats.removes.rr;
    assert!(rm_total > 0);
    // insertion-path counters are untouched by removals
    assert_eq!(stats.inserts, built.inserts);
}
