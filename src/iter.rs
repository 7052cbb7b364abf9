//! Explicit-stack traversals.
//!
//! None of the walks recurse, so a degenerate unbalanced tree (one long
//! chain) cannot overflow the call stack.

use std::iter::FusedIterator;

use crate::arena::NodeId;
use crate::node::NodeView;
use crate::store::NodeStore;

/// In-order iterator over the nodes of a tree, ascending by key.
///
/// Created by [`Tree::iter`](crate::Tree::iter). Each call starts a fresh
/// walk. The iterator borrows the tree, so the tree cannot be mutated while
/// it is alive.
pub struct Iter<'a, K, V> {
    store: &'a NodeStore<K, V>,
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(store: &'a NodeStore<K, V>) -> Self {
        let mut iter = Self {
            store,
            stack: Vec::new(),
            remaining: store.len(),
        };
        iter.push_left_spine(store.root());
        iter
    }

    fn push_left_spine(&mut self, mut next: Option<NodeId>) {
        while let Some(id) = next {
            self.stack.push(id);
            next = self.store.left(id);
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = NodeView<'a, K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.push_left_spine(self.store.right(id));
        self.remaining -= 1;
        Some(NodeView::of(&self.store[id]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            store: self.store,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

/// Pre-order walk over node handles (parent before children).
pub(crate) fn preorder<K, V>(store: &NodeStore<K, V>) -> impl Iterator<Item = NodeId> + '_ {
    let mut stack: Vec<NodeId> = store.root().into_iter().collect();
    std::iter::from_fn(move || {
        let id = stack.pop()?;
        let node = &store[id];
        stack.extend(node.right);
        stack.extend(node.left);
        Some(id)
    })
}
