//! Behaviour specific to the self-balancing tree.

use ordtree::{AvlTree, Options};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

#[test]
fn rotations_keep_the_tree_balanced() {
    let mut t: AvlTree<i32, &str> = AvlTree::new();
    for (k, v) in [(10, "a"), (5, "b"), (3, "c"), (8, "d"), (15, "e")] {
        t.insert(k, v).unwrap();
        t.check_is_avlt().unwrap();
    }
    assert_eq!(t.min_key(), Some(&3));
    assert_eq!(t.max_key(), Some(&15));
    assert_eq!(t.height(), 3);
    assert_eq!(t.search(&8), &["d"]);
}

#[test]
fn round_trip_insert_then_delete() {
    let mut t: AvlTree<u32, u32> = AvlTree::new();
    t.insert(1, 1).unwrap();
    t.insert(2, 2).unwrap();
    let before = format!("{t:?}");

    t.insert(7, 70).unwrap();
    t.delete(&7);

    assert_eq!(format!("{t:?}"), before);
    assert!(t.search(&7).is_empty());
    t.check_is_avlt().unwrap();
}

#[test]
fn unique_constraint() {
    let mut t: AvlTree<&str, u32> = AvlTree::with_options(Options::default().unique(true));
    t.insert("a", 1).unwrap();
    t.insert("a", 1).unwrap();
    let err = t.insert("a", 2).unwrap_err();
    assert_eq!(err.key, "a");
    assert_eq!(
        err.to_string(),
        "can't insert key \"a\", it violates the unique constraint"
    );
    assert_eq!(t.search(&"a"), &[1]);
}

#[test]
fn vk_unique_constraint() {
    let mut t: AvlTree<&str, u32> = AvlTree::with_options(Options::default().vk_unique(true));
    t.insert("a", 1).unwrap();
    t.insert("a", 1).unwrap();
    t.insert("a", 2).unwrap();
    assert_eq!(t.search(&"a"), &[1, 2]);
}

#[test]
fn randomized_inserts_and_deletes_hold_invariants() {
    let mut rng = StdRng::seed_from_u64(0x0a17);
    let mut keys: Vec<u32> = (0..2_000).collect();
    keys.shuffle(&mut rng);

    let mut t: AvlTree<u32, u32> = AvlTree::new();
    for &k in &keys {
        t.insert(k, k).unwrap();
    }
    t.check_is_avlt().unwrap();
    assert!(t.height() <= 16);

    keys.shuffle(&mut rng);
    for (i, &k) in keys.iter().enumerate() {
        if rng.gen_bool(0.7) {
            t.delete(&k);
            assert!(t.search(&k).is_empty());
        } else {
            t.delete_value(&k, &k);
        }
        if i % 97 == 0 {
            t.check_is_avlt().unwrap();
        }
    }
    assert!(t.is_empty());
    t.check_is_avlt().unwrap();
}
