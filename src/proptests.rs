use crate::{AvlTree, BinarySearchTree, Bounds, InvariantViolation, NumericOrder, Options, Tree};

use proptest::prelude::*;
use std::collections::BTreeMap;
use std::ops::Bound;

type Model = BTreeMap<i16, Vec<u8>>;

#[derive(Clone, Debug)]
enum Op {
    Insert(i16, u8),
    Delete(i16),
    DeleteValue(i16, u8),
    Search(i16),
    Neighbours(i16),
    Range(Option<(i16, bool)>, Option<(i16, bool)>),
}

fn key_strategy() -> impl Strategy<Value = i16> + Clone {
    // A narrow key range so deletes and duplicate inserts hit existing keys.
    -64i16..64
}

fn bound_strategy() -> impl Strategy<Value = Option<(i16, bool)>> {
    prop::option::of((key_strategy(), any::<bool>()))
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let key = key_strategy();
    let value = 0u8..4;
    let op = prop_oneof![
        40 => (key.clone(), value.clone()).prop_map(|(k, v)| Op::Insert(k, v)),
        20 => key.clone().prop_map(Op::Delete),
        10 => (key.clone(), value).prop_map(|(k, v)| Op::DeleteValue(k, v)),
        15 => key.clone().prop_map(Op::Search),
        10 => key.prop_map(Op::Neighbours),
        5 => (bound_strategy(), bound_strategy()).prop_map(|(lo, hi)| Op::Range(lo, hi)),
    ];
    prop::collection::vec(op, 0..=400)
}

fn model_delete_value(m: &mut Model, key: i16, value: u8) {
    let Some(values) = m.get_mut(&key) else {
        return;
    };
    if values.len() > 1 {
        values.retain(|v| *v != value);
        if !values.is_empty() {
            return;
        }
    }
    m.remove(&key);
}

fn model_range(m: &Model, lo: Option<(i16, bool)>, hi: Option<(i16, bool)>) -> Vec<u8> {
    let lo = match lo {
        None => Bound::Unbounded,
        Some((k, true)) => Bound::Included(k),
        Some((k, false)) => Bound::Excluded(k),
    };
    let hi = match hi {
        None => Bound::Unbounded,
        Some((k, true)) => Bound::Included(k),
        Some((k, false)) => Bound::Excluded(k),
    };
    // BTreeMap::range panics on inverted or doubly-excluded equal bounds.
    let empty = match (lo, hi) {
        (Bound::Included(a) | Bound::Excluded(a), Bound::Included(b) | Bound::Excluded(b)) => {
            let both_included =
                matches!(lo, Bound::Included(_)) && matches!(hi, Bound::Included(_));
            a > b || (a == b && !both_included)
        }
        _ => false,
    };
    if empty {
        return Vec::new();
    }
    m.range((lo, hi)).flat_map(|(_, vs)| vs.iter().copied()).collect()
}

fn to_bounds(lo: Option<(i16, bool)>, hi: Option<(i16, bool)>) -> Bounds<i16> {
    let mut bounds = Bounds::new();
    match lo {
        Some((k, true)) => bounds = bounds.gte(k),
        Some((k, false)) => bounds = bounds.gt(k),
        None => {}
    }
    match hi {
        Some((k, true)) => bounds = bounds.lte(k),
        Some((k, false)) => bounds = bounds.lt(k),
        None => {}
    }
    bounds
}

/// Apply `ops` to both the tree and the model, checking answers and
/// invariants after every step.
fn run_against_model<S: crate::Strategy>(
    t: &mut Tree<i16, u8, S, NumericOrder>,
    ops: Vec<Op>,
    validate: impl Fn(&Tree<i16, u8, S, NumericOrder>) -> Result<(), InvariantViolation>,
) -> Result<(), TestCaseError> {
    let mut m: Model = BTreeMap::new();

    for op in ops {
        match op {
            Op::Insert(key, value) => {
                prop_assert!(t.insert(key, value).is_ok());
                m.entry(key).or_default().push(value);
            }
            Op::Delete(key) => {
                t.delete(&key);
                m.remove(&key);
            }
            Op::DeleteValue(key, value) => {
                t.delete_value(&key, &value);
                model_delete_value(&mut m, key, value);
            }
            Op::Search(key) => {
                let expected = m.get(&key).map(Vec::as_slice).unwrap_or(&[]);
                prop_assert_eq!(t.search(&key), expected);
            }
            Op::Neighbours(key) => {
                let after = m
                    .range((Bound::Excluded(key), Bound::Unbounded))
                    .next()
                    .map(|(k, _)| *k);
                let before = m.range(..key).next_back().map(|(k, _)| *k);
                prop_assert_eq!(t.search_after(&key).map(|n| *n.key()), after);
                prop_assert_eq!(t.search_before(&key).map(|n| *n.key()), before);

                let lte = m.range(..=key).next_back().map(|(k, _)| *k);
                let gte = m.range(key..).next().map(|(k, _)| *k);
                prop_assert_eq!(t.search_nearest_lte(&key).map(|n| *n.key()), lte);
                prop_assert_eq!(t.search_nearest_gte(&key).map(|n| *n.key()), gte);

                let nearest = t.search_nearest(&key).map(|n| (*n.key() - key).abs());
                let best = [lte, gte].into_iter().flatten().map(|k| (k - key).abs()).min();
                prop_assert_eq!(nearest, best);
            }
            Op::Range(lo, hi) => {
                let got: Vec<u8> =
                    t.between_bounds(&to_bounds(lo, hi)).into_iter().copied().collect();
                prop_assert_eq!(got, model_range(&m, lo, hi));
            }
        }

        prop_assert_eq!(t.len(), m.len());
        if let Err(err) = validate(t) {
            return Err(TestCaseError::fail(err.to_string()));
        }
    }

    let got: Vec<(i16, Vec<u8>)> = t.iter().map(|n| (*n.key(), n.values().to_vec())).collect();
    let expected: Vec<(i16, Vec<u8>)> = m.into_iter().collect();
    prop_assert_eq!(got, expected);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        max_shrink_iters: 10_000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence_bst(ops in ops_strategy(), seed in any::<u64>()) {
        let options = Options::default().compare_keys(NumericOrder).seed(seed);
        let mut t: BinarySearchTree<i16, u8, NumericOrder> =
            BinarySearchTree::with_options(options);
        run_against_model(&mut t, ops, |t| t.check_is_bst())?;
    }

    #[test]
    fn prop_equivalence_avl(ops in ops_strategy()) {
        let mut t: AvlTree<i16, u8, NumericOrder> =
            AvlTree::with_options(Options::default().compare_keys(NumericOrder));
        run_against_model(&mut t, ops, |t| t.check_is_avlt())?;
    }

    #[test]
    fn prop_avl_height_is_logarithmic(keys in prop::collection::vec(any::<i16>(), 1..=2000)) {
        let mut t: AvlTree<i16, ()> = AvlTree::new();
        for k in keys {
            t.insert(k, ()).unwrap();
        }
        // 1.44 * log2(n + 2) bounds the height of any AVL tree.
        let bound = (1.45 * ((t.len() + 2) as f64).log2()).ceil() as u32;
        prop_assert!(t.height() <= bound, "height {} > {}", t.height(), bound);
    }
}

fn for_each_permutation<T: Clone>(items: &[T], mut f: impl FnMut(Vec<T>)) {
    fn rec<T: Clone>(items: &[T], used: &mut [bool], out: &mut Vec<T>, f: &mut impl FnMut(Vec<T>)) {
        if out.len() == items.len() {
            f(out.clone());
            return;
        }
        for i in 0..items.len() {
            if used[i] {
                continue;
            }
            used[i] = true;
            out.push(items[i].clone());
            rec(items, used, out, f);
            out.pop();
            used[i] = false;
        }
    }

    let mut used = vec![false; items.len()];
    let mut out = Vec::with_capacity(items.len());
    rec(items, &mut used, &mut out, &mut f);
}

#[test]
fn exhaustive_insert_order_small_set() {
    let keys = [1, 2, 3, 4, 5, 6];

    for_each_permutation(&keys, |perm| {
        let mut avl: AvlTree<i32, usize> = AvlTree::new();
        let mut bst: BinarySearchTree<i32, usize> = BinarySearchTree::new();
        for (i, k) in perm.into_iter().enumerate() {
            avl.insert(k, i).unwrap();
            bst.insert(k, i).unwrap();
        }

        avl.check_is_avlt().unwrap();
        bst.check_is_bst().unwrap();
        assert!(avl.height() <= 3);
        assert_eq!(avl.keys().copied().collect::<Vec<_>>(), keys);
        assert_eq!(bst.keys().copied().collect::<Vec<_>>(), keys);
    });
}

#[test]
fn exhaustive_delete_order_small_set() {
    let keys = [4, 2, 6, 1, 3, 5, 7];

    let mut base: AvlTree<i32, i32> = AvlTree::new();
    for &k in &keys {
        base.insert(k, k * 10).unwrap();
    }

    for_each_permutation(&keys, |perm| {
        let mut t = base.clone();
        let mut remaining = t.len();
        for k in perm {
            t.delete(&k);
            remaining -= 1;
            assert_eq!(t.len(), remaining);
            assert!(t.search(&k).is_empty());
            t.check_is_avlt().unwrap();
        }
        assert!(t.is_empty());
        assert_eq!(t.root_key(), None);
    });
}
