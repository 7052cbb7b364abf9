//! Rotations and bottom-up path rebalancing.

use tracing::trace;

use crate::arena::NodeId;
use crate::node::Side;
use crate::store::NodeStore;

/// Rotate right around `n`, returning the new local subtree root.
///
/// ```text
///       n            p
///      / \          / \
///     p   c   =>   a   n
///    / \              / \
///   a   b            b   c
/// ```
///
/// `p` takes over `n`'s parent link. When `n` was the root only `p`'s
/// back-reference is cleared; the caller owns the root handle.
pub(crate) fn rotate_right<K, V>(store: &mut NodeStore<K, V>, n: NodeId) -> NodeId {
    let Some(p) = store.left(n) else {
        return n;
    };
    let b = store.right(p);

    store.relink_parent(store.parent(n), n, p);
    store.set_child(p, Side::Right, Some(n));
    store.set_child(n, Side::Left, b);

    store.update_height(n);
    store.update_height(p);

    trace!(pivot = p.slot(), node = n.slot(), "rotated right");
    p
}

/// Mirror image of [`rotate_right`].
pub(crate) fn rotate_left<K, V>(store: &mut NodeStore<K, V>, n: NodeId) -> NodeId {
    let Some(q) = store.right(n) else {
        return n;
    };
    let b = store.left(q);

    store.relink_parent(store.parent(n), n, q);
    store.set_child(q, Side::Left, Some(n));
    store.set_child(n, Side::Right, b);

    store.update_height(n);
    store.update_height(q);

    trace!(pivot = q.slot(), node = n.slot(), "rotated left");
    q
}

/// Recompute heights and rotate along `path` (root first), nearest to the
/// mutation first. Returns the new root if the rotation of `path[0]` moved
/// it.
pub(crate) fn rebalance_along_path<K, V>(
    store: &mut NodeStore<K, V>,
    path: &[NodeId],
) -> Option<NodeId> {
    let mut new_root = None;

    for (depth, &node) in path.iter().enumerate().rev() {
        store.update_height(node);

        let balance = store.balance_factor(node);
        let rotated = if balance > 1 {
            if let Some(left) = store.left(node) {
                if store.balance_factor(left) < 0 {
                    rotate_left(store, left);
                }
            }
            rotate_right(store, node)
        } else if balance < -1 {
            if let Some(right) = store.right(node) {
                if store.balance_factor(right) > 0 {
                    rotate_right(store, right);
                }
            }
            rotate_left(store, node)
        } else {
            continue;
        };

        if depth == 0 {
            new_root = Some(rotated);
        }
    }

    new_root
}
