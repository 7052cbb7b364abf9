//! Tree nodes and the borrowed view handed out to callers.

use std::fmt;

use crate::arena::NodeId;

/// Which child of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A key together with every value stored under it.
#[derive(Clone)]
pub struct Node<K, V> {
    pub(crate) key: K,
    /// Values in insertion order.
    pub(crate) values: Vec<V>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    /// `None` iff this node is the root.
    pub(crate) parent: Option<NodeId>,
    /// Subtree height, leaves are 1. Only maintained by height-balancing
    /// strategies.
    pub(crate) height: u32,
}

impl<K, V> Node<K, V> {
    pub(crate) fn new(key: K, values: Vec<V>, parent: Option<NodeId>) -> Self {
        Self {
            key,
            values,
            left: None,
            right: None,
            parent,
            height: 1,
        }
    }

    #[inline]
    pub(crate) fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The child of a node that has exactly one.
    pub(crate) fn only_child(&self) -> Option<NodeId> {
        match (self.left, self.right) {
            (Some(child), None) | (None, Some(child)) => Some(child),
            _ => None,
        }
    }
}

/// Borrowed view of a stored key and its values.
///
/// Views borrow the tree, so they cannot outlive the next mutating call.
pub struct NodeView<'a, K, V> {
    pub(crate) key: &'a K,
    pub(crate) values: &'a [V],
}

impl<'a, K, V> NodeView<'a, K, V> {
    pub(crate) fn of(node: &'a Node<K, V>) -> Self {
        Self {
            key: &node.key,
            values: &node.values,
        }
    }

    #[inline]
    pub fn key(&self) -> &'a K {
        self.key
    }

    /// Values stored under the key, in insertion order.
    #[inline]
    pub fn values(&self) -> &'a [V] {
        self.values
    }
}

impl<K, V> Clone for NodeView<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for NodeView<'_, K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for NodeView<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeView")
            .field("key", self.key)
            .field("values", &self.values)
            .finish()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for NodeView<'_, K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.values == other.values
    }
}
