//! Node storage plus the structural primitives shared by both tree variants.
//!
//! Every pointer rewrite in the crate goes through this module, which keeps
//! the parent back-references in step with the child links.

use std::ops::{Index, IndexMut};

use tracing::trace;

use crate::arena::{Arena, NodeId};
use crate::node::{Node, Side};

/// The nodes of one tree and the handle of its current root.
pub struct NodeStore<K, V> {
    nodes: Arena<Node<K, V>>,
    /// `None` represents the empty tree.
    root: Option<NodeId>,
}

impl<K, V> NodeStore<K, V> {
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    #[inline]
    pub(crate) fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Reassign the root handle. The new root's parent link is cleared.
    pub(crate) fn set_root(&mut self, root: Option<NodeId>) {
        if let Some(id) = root {
            self.nodes[id].parent = None;
        }
        if self.root != root {
            trace!(from = ?self.root, to = ?root, "root handle reassigned");
        }
        self.root = root;
    }

    /// Number of stored keys.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    pub(crate) fn allocated(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().map(|(id, _)| id)
    }

    pub(crate) fn contains(&self, id: NodeId) -> bool {
        self.nodes.get(id).is_some()
    }

    #[inline]
    pub(crate) fn key(&self, id: NodeId) -> &K {
        &self.nodes[id].key
    }

    #[inline]
    pub(crate) fn left(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].left
    }

    #[inline]
    pub(crate) fn right(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].right
    }

    #[inline]
    pub(crate) fn child(&self, id: NodeId, side: Side) -> Option<NodeId> {
        self.nodes[id].child(side)
    }

    #[inline]
    pub(crate) fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent
    }

    /// Cached height, 0 for an absent node.
    #[inline]
    pub(crate) fn height(&self, id: Option<NodeId>) -> u32 {
        id.map_or(0, |id| self.nodes[id].height)
    }

    /// Which side of its parent `id` hangs from, `None` for the root.
    pub(crate) fn side_in_parent(&self, id: NodeId) -> Option<(NodeId, Side)> {
        let parent = self.nodes[id].parent?;
        if self.nodes[parent].left == Some(id) {
            Some((parent, Side::Left))
        } else {
            Some((parent, Side::Right))
        }
    }

    /// Make an empty tree hold a single entry.
    pub(crate) fn plant_root(&mut self, key: K, values: Vec<V>) -> NodeId {
        debug_assert!(self.root.is_none());
        let id = self.nodes.insert(Node::new(key, values, None));
        self.root = Some(id);
        id
    }

    /// Allocate a leaf on the given (vacant) side of `parent`.
    pub(crate) fn create_child(
        &mut self,
        parent: NodeId,
        side: Side,
        key: K,
        values: Vec<V>,
    ) -> NodeId {
        debug_assert!(self.nodes[parent].child(side).is_none());
        let child = self.nodes.insert(Node::new(key, values, Some(parent)));
        *self.nodes[parent].child_mut(side) = Some(child);
        child
    }

    pub(crate) fn create_left_child(&mut self, parent: NodeId, key: K, values: Vec<V>) -> NodeId {
        self.create_child(parent, Side::Left, key, values)
    }

    pub(crate) fn create_right_child(&mut self, parent: NodeId, key: K, values: Vec<V>) -> NodeId {
        self.create_child(parent, Side::Right, key, values)
    }

    /// Point `parent`'s `side` link at `child` and `child`'s parent link back.
    pub(crate) fn set_child(&mut self, parent: NodeId, side: Side, child: Option<NodeId>) {
        *self.nodes[parent].child_mut(side) = child;
        if let Some(child) = child {
            self.nodes[child].parent = Some(parent);
        }
    }

    /// Put `new` where `old` hangs under `parent`. With no parent only the
    /// back-reference of `new` is cleared; the root handle is left to the
    /// caller.
    pub(crate) fn relink_parent(&mut self, parent: Option<NodeId>, old: NodeId, new: NodeId) {
        match parent {
            Some(parent) => {
                let side = if self.nodes[parent].left == Some(old) {
                    Side::Left
                } else {
                    Side::Right
                };
                self.set_child(parent, side, Some(new));
            }
            None => self.nodes[new].parent = None,
        }
    }

    /// Detach a childless node and free it. Splicing the root empties the
    /// tree.
    pub(crate) fn splice_as_leaf(&mut self, id: NodeId) -> Node<K, V> {
        debug_assert!(self.nodes[id].is_leaf());
        match self.side_in_parent(id) {
            Some((parent, side)) => *self.nodes[parent].child_mut(side) = None,
            None => self.root = None,
        }
        trace!(node = id.slot(), "spliced leaf");
        self.nodes.remove(id)
    }

    /// Promote the only child of `id` into its position and free `id`. When
    /// `id` is the root the child becomes the new root.
    pub(crate) fn splice_single_child(&mut self, id: NodeId) -> Node<K, V> {
        let Some(child) = self.nodes[id].only_child() else {
            return self.splice_as_leaf(id);
        };
        match self.side_in_parent(id) {
            Some((parent, side)) => self.set_child(parent, side, Some(child)),
            None => self.set_root(Some(child)),
        }
        trace!(node = id.slot(), child = child.slot(), "promoted single child");
        self.nodes.remove(id)
    }

    /// Splice out a node with at most one child.
    pub(crate) fn splice(&mut self, id: NodeId) -> Node<K, V> {
        if self.nodes[id].is_leaf() {
            self.splice_as_leaf(id)
        } else {
            self.splice_single_child(id)
        }
    }

    /// Give `id` the key and values of a node that has already been spliced
    /// out, leaving the subtree links untouched.
    pub(crate) fn copy_identity_from(&mut self, id: NodeId, donor: Node<K, V>) {
        let node = &mut self.nodes[id];
        node.key = donor.key;
        node.values = donor.values;
    }

    /// Leftmost node of the subtree rooted at `id`.
    pub(crate) fn min_descendant(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.nodes[id].left {
            id = left;
        }
        id
    }

    /// Rightmost node of the subtree rooted at `id`.
    pub(crate) fn max_descendant(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.nodes[id].right {
            id = right;
        }
        id
    }

    /// Recompute the cached height of `id` from its children.
    pub(crate) fn update_height(&mut self, id: NodeId) {
        let node = &self.nodes[id];
        let height = 1 + self.height(node.left).max(self.height(node.right));
        self.nodes[id].height = height;
    }

    /// Left height minus right height.
    pub(crate) fn balance_factor(&self, id: NodeId) -> i64 {
        let node = &self.nodes[id];
        i64::from(self.height(node.left)) - i64::from(self.height(node.right))
    }
}

impl<K: Clone, V: Clone> Clone for NodeStore<K, V> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            root: self.root,
        }
    }
}

impl<K, V> Index<NodeId> for NodeStore<K, V> {
    type Output = Node<K, V>;

    #[inline]
    fn index(&self, id: NodeId) -> &Node<K, V> {
        &self.nodes[id]
    }
}

impl<K, V> IndexMut<NodeId> for NodeStore<K, V> {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        &mut self.nodes[id]
    }
}
