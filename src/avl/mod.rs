//! Height-balanced (AVL) binary search tree.
//!
//! Inserts and deletes record the root-to-mutation path on the way down.
//! After the structural edit, [`rotate::rebalance_along_path`] walks it back
//! up, refreshing cached heights and rotating wherever a balance factor
//! leaves `-1..=1`. A two-children removal always uses the in-order
//! predecessor; the rebalancing pass makes up for whichever side shrank.

mod rotate;

use std::fmt::Debug;

use tracing::debug;

use crate::arena::NodeId;
use crate::compare::{Comparator, DefaultEquality, NaturalOrder};
use crate::error::InvariantViolation;
use crate::iter::preorder;
use crate::node::Side;
use crate::store::NodeStore;
use crate::strategy::{Sealed, Strategy};
use crate::tree::Tree;

/// Self-balancing binary search tree.
pub type AvlTree<K, V, C = NaturalOrder, E = DefaultEquality> = Tree<K, V, Avl, C, E>;

/// Strategy of [`AvlTree`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Avl;

impl Sealed for Avl {}

impl Strategy for Avl {
    const REBALANCES: bool = true;

    fn new(_seed: Option<u64>) -> Self {
        Avl
    }

    #[inline]
    fn replacement_side(&mut self) -> Side {
        Side::Left
    }

    fn rebalance<K, V>(&mut self, store: &mut NodeStore<K, V>, path: &[NodeId]) -> Option<NodeId> {
        let new_root = rotate::rebalance_along_path(store, path);
        if let Some(root) = new_root {
            debug!(root = root.slot(), "rebalancing moved the root");
        }
        new_root
    }
}

impl<K, V, C, E> Tree<K, V, Avl, C, E> {
    /// Height of the tree, 0 when empty.
    pub fn height(&self) -> u32 {
        self.store.height(self.store.root())
    }
}

impl<K: Debug, V, C, E> Tree<K, V, Avl, C, E> {
    /// Check that every cached height is 1 + the larger child height.
    pub fn check_height_correct(&self) -> Result<(), InvariantViolation> {
        for id in preorder(&self.store) {
            let node = &self.store[id];
            let expected = 1 + self.store.height(node.left).max(self.store.height(node.right));
            if node.height != expected {
                return Err(InvariantViolation::Height {
                    key: format!("{:?}", node.key),
                    cached: node.height,
                    expected,
                });
            }
        }
        Ok(())
    }

    /// Check that every balance factor lies in `-1..=1`.
    pub fn check_balance_factors(&self) -> Result<(), InvariantViolation> {
        for id in preorder(&self.store) {
            let balance = self.store.balance_factor(id);
            if balance.abs() > 1 {
                return Err(InvariantViolation::Balance {
                    key: format!("{:?}", self.store.key(id)),
                    balance,
                });
            }
        }
        Ok(())
    }
}

impl<K: Debug, V, C: Comparator<K>, E> Tree<K, V, Avl, C, E> {
    /// Full AVL check: BST ordering and pointers, heights, balance.
    pub fn check_is_avlt(&self) -> Result<(), InvariantViolation> {
        self.check_is_bst()?;
        self.check_height_correct()?;
        self.check_balance_factors()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Options;

    fn tree_of(keys: &[i32]) -> AvlTree<i32, i32> {
        let mut t = AvlTree::new();
        for &k in keys {
            t.insert(k, k * 10).unwrap();
            t.check_is_avlt().unwrap();
        }
        t
    }

    #[test]
    fn test_single_rotation_on_insert() {
        let t = tree_of(&[10, 5, 3]);
        assert_eq!(t.root_key(), Some(&5));
        assert_eq!(t.height(), 2);
    }

    #[test]
    fn test_double_rotation_on_insert() {
        let t = tree_of(&[10, 5, 8]);
        assert_eq!(t.root_key(), Some(&8));
        let t = tree_of(&[10, 15, 12]);
        assert_eq!(t.root_key(), Some(&12));
    }

    #[test]
    fn test_insert_sequence_min_max() {
        let t = tree_of(&[10, 5, 3, 8, 15]);
        assert_eq!(t.root_key(), Some(&5));
        assert_eq!(t.min_key(), Some(&3));
        assert_eq!(t.max_key(), Some(&15));
        assert_eq!(t.height(), 3);
    }

    #[test]
    fn test_delete_two_children_uses_predecessor() {
        let mut t = tree_of(&[10, 5, 3, 8, 15]);
        t.delete(&10);
        t.check_is_avlt().unwrap();
        assert!(t.search(&10).is_empty());
        assert_eq!(t.keys().copied().collect::<Vec<_>>(), vec![3, 5, 8, 15]);
        assert_eq!(t.search(&8), &[80]);
    }

    #[test]
    fn test_delete_rebalances_up_to_root() {
        let mut t = tree_of(&[20, 10, 30, 5, 15, 25, 40, 3, 8, 13, 35, 1]);
        for k in [25, 35, 30, 40] {
            t.delete(&k);
            t.check_is_avlt().unwrap();
        }
        assert_eq!(t.len(), 8);
        assert_eq!(t.root_key(), Some(&10));
    }

    #[test]
    fn test_delete_root_with_single_child() {
        let mut t = tree_of(&[1, 2]);
        t.delete(&1);
        t.check_is_avlt().unwrap();
        assert_eq!(t.root_key(), Some(&2));
        assert_eq!(t.height(), 1);
    }

    #[test]
    fn test_delete_last_key_empties_tree() {
        let mut t = tree_of(&[1]);
        t.delete(&1);
        assert!(t.is_empty());
        assert_eq!(t.height(), 0);
        t.check_is_avlt().unwrap();
        t.insert(4, 40).unwrap();
        assert_eq!(t.height(), 1);
    }

    #[test]
    fn test_ascending_inserts_stay_logarithmic() {
        let mut t: AvlTree<u32, ()> = AvlTree::with_options(Options::default());
        for k in 0..1024 {
            t.insert(k, ()).unwrap();
        }
        t.check_is_avlt().unwrap();
        assert!(t.height() <= 14, "height = {}", t.height());
    }

    #[test]
    fn test_corrupted_height_is_reported() {
        let mut t = tree_of(&[2, 1, 3]);
        let root = t.store.root().unwrap();
        t.store[root].height = 7;
        assert!(matches!(
            t.check_height_correct(),
            Err(InvariantViolation::Height { cached: 7, expected: 2, .. })
        ));
    }

    #[test]
    fn test_unbalanced_shape_is_reported() {
        let mut t = tree_of(&[1]);
        let root = t.store.root().unwrap();
        let two = t.store.create_right_child(root, 2, vec![20]);
        let three = t.store.create_right_child(two, 3, vec![30]);
        for id in [three, two, root] {
            t.store.update_height(id);
        }
        t.check_height_correct().unwrap();
        t.check_is_bst().unwrap();
        assert!(matches!(
            t.check_balance_factors(),
            Err(InvariantViolation::Balance { balance: -2, .. })
        ));
    }
}
