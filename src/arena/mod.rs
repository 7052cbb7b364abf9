//! Slab storage for tree nodes.
//!
//! Nodes live in a single `Vec` and refer to each other through 32-bit
//! [`NodeId`] handles instead of pointers. Child links own their target
//! logically (a node is freed exactly when it is spliced out of the tree),
//! while parent links are plain handles, so the parent/child cycle never
//! shows up in the ownership graph.

use std::num::NonZeroU32;
use std::ops::{Index, IndexMut};

/// A 32-bit handle to a node in the arena.
///
/// The handle stores `slot + 1` so that `Option<NodeId>` is the same size as
/// `NodeId`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NodeId(NonZeroU32);

impl NodeId {
    #[inline]
    fn new(slot: usize) -> Self {
        debug_assert!(slot < u32::MAX as usize);
        match NonZeroU32::new(slot as u32 + 1) {
            Some(raw) => NodeId(raw),
            None => unreachable!("slot + 1 is never zero"),
        }
    }

    /// Position of the node in the arena.
    #[inline]
    pub fn slot(self) -> usize {
        self.0.get() as usize - 1
    }
}

/// Vector-backed slab with free-slot reuse.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    /// Vacant slots, reused LIFO.
    free: Vec<NodeId>,
    len: usize,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Number of live nodes.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Number of slots, live or vacant.
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Store `value`, returning its handle.
    ///
    /// # Panics
    ///
    /// Panics if the arena would grow beyond `u32::MAX - 1` slots.
    pub(crate) fn insert(&mut self, value: T) -> NodeId {
        self.len += 1;
        if let Some(id) = self.free.pop() {
            debug_assert!(self.slots[id.slot()].is_none());
            self.slots[id.slot()] = Some(value);
            return id;
        }
        assert!(
            self.slots.len() < u32::MAX as usize - 1,
            "node arena exhausted"
        );
        let id = NodeId::new(self.slots.len());
        self.slots.push(Some(value));
        id
    }

    /// Take the value out of its slot and mark the slot vacant.
    ///
    /// # Panics
    ///
    /// Panics if `id` is vacant.
    pub(crate) fn remove(&mut self, id: NodeId) -> T {
        match self.slots[id.slot()].take() {
            Some(value) => {
                self.len -= 1;
                self.free.push(id);
                value
            }
            None => panic!("removing vacant arena slot {}", id.slot()),
        }
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&T> {
        self.slots.get(id.slot()).and_then(Option::as_ref)
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.len = 0;
    }

    /// Iterate over all live values, in slot order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (NodeId, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, value)| value.as_ref().map(|v| (NodeId::new(slot), v)))
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = T;

    #[inline]
    fn index(&self, id: NodeId) -> &T {
        match &self.slots[id.slot()] {
            Some(value) => value,
            None => panic!("dangling node handle {}", id.slot()),
        }
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        match &mut self.slots[id.slot()] {
            Some(value) => value,
            None => panic!("dangling node handle {}", id.slot()),
        }
    }
}
