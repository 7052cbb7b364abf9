//! Structural self-checks for test suites. They walk the whole tree and are
//! never called by the operations themselves.

use std::cmp::Ordering;
use std::fmt::Debug;

use super::Tree;
use crate::arena::NodeId;
use crate::compare::Comparator;
use crate::error::InvariantViolation;
use crate::iter::preorder;

impl<K: Debug, V, S, C: Comparator<K>, E> Tree<K, V, S, C, E> {
    /// Check that every key lies strictly between the keys of the ancestors
    /// it descends from on the left and on the right.
    pub fn check_node_ordering(&self) -> Result<(), InvariantViolation> {
        let Some(root) = self.store.root() else {
            return Ok(());
        };

        // (node, tightest lower ancestor, tightest upper ancestor)
        let mut stack: Vec<(NodeId, Option<NodeId>, Option<NodeId>)> = vec![(root, None, None)];
        while let Some((id, lower, upper)) = stack.pop() {
            let key = self.store.key(id);
            let above_lower = lower.map_or(true, |l| {
                self.compare_keys.compare(key, self.store.key(l)) == Ordering::Greater
            });
            let below_upper = upper.map_or(true, |u| {
                self.compare_keys.compare(key, self.store.key(u)) == Ordering::Less
            });
            if !(above_lower && below_upper) {
                return Err(InvariantViolation::Ordering {
                    root: format!("{:?}", self.store.key(root)),
                    key: format!("{key:?}"),
                });
            }

            if let Some(left) = self.store.left(id) {
                stack.push((left, lower, Some(id)));
            }
            if let Some(right) = self.store.right(id) {
                stack.push((right, Some(id), upper));
            }
        }
        Ok(())
    }

    /// Ordering and pointer checks together.
    pub fn check_is_bst(&self) -> Result<(), InvariantViolation> {
        self.check_node_ordering()?;
        self.check_internal_pointers()
    }
}

impl<K: Debug, V, S, C, E> Tree<K, V, S, C, E> {
    /// Check that every child points back at its parent, that the root has no
    /// parent, and that every allocated node is reachable from the root.
    pub fn check_internal_pointers(&self) -> Result<(), InvariantViolation> {
        if let Some(root) = self.store.root() {
            if self.store.parent(root).is_some() {
                return Err(InvariantViolation::RootHasParent);
            }
        }

        let mut reachable = 0;
        for id in preorder(&self.store) {
            reachable += 1;
            let node = &self.store[id];
            for child in [node.left, node.right].into_iter().flatten() {
                if !self.store.contains(child) || self.store.parent(child) != Some(id) {
                    return Err(InvariantViolation::ParentPointer {
                        key: format!("{:?}", node.key),
                    });
                }
            }
        }

        let allocated = self.store.allocated().count();
        if allocated != reachable {
            return Err(InvariantViolation::Unreachable { allocated, reachable });
        }
        Ok(())
    }
}
