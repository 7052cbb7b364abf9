//! The per-variant part of the tree engine.
//!
//! Search, range scans and traversal are identical for both variants. What
//! differs is how a two-children removal picks its replacement and what
//! happens to the ancestors of a structural edit afterwards, which is what a
//! [`Strategy`] supplies.

use crate::arena::NodeId;
use crate::node::Side;
use crate::store::NodeStore;

mod private {
    pub trait Sealed {}
}

pub(crate) use private::Sealed;

/// Balancing policy of a [`Tree`](crate::Tree): [`Unbalanced`](crate::Unbalanced)
/// or [`Avl`](crate::Avl).
pub trait Strategy: Sealed {
    /// Whether the engine must record the descent path of mutations.
    const REBALANCES: bool;

    fn new(seed: Option<u64>) -> Self;

    /// Subtree supplying the replacement of a node with two children: its
    /// in-order predecessor (`Left`) or successor (`Right`).
    fn replacement_side(&mut self) -> Side;

    /// Restore the variant's invariants along `path`, the root-first chain of
    /// surviving ancestors of a structural edit. Returns the new root when the
    /// topmost entry of the path was rotated away.
    fn rebalance<K, V>(&mut self, store: &mut NodeStore<K, V>, path: &[NodeId]) -> Option<NodeId>;
}
