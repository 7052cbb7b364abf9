//! Point, neighbour and nearest-key search shared by both tree variants.
//!
//! Every function takes the root to start from and the comparator, and only
//! reads the store.

use std::cmp::Ordering;

use crate::arena::NodeId;
use crate::compare::Comparator;
use crate::store::NodeStore;

/// Node holding exactly `key`.
pub(crate) fn find<K, V, C: Comparator<K>>(
    store: &NodeStore<K, V>,
    compare: &C,
    root: NodeId,
    key: &K,
) -> Option<NodeId> {
    let mut node = Some(root);
    while let Some(id) = node {
        node = match compare.compare(key, store.key(id)) {
            Ordering::Equal => return Some(id),
            Ordering::Less => store.left(id),
            Ordering::Greater => store.right(id),
        };
    }
    None
}

/// First strict ancestor of `from` whose key satisfies `accept`.
fn climb<K, V>(
    store: &NodeStore<K, V>,
    from: NodeId,
    mut accept: impl FnMut(&K) -> bool,
) -> Option<NodeId> {
    let mut current = store.parent(from);
    while let Some(id) = current {
        if accept(store.key(id)) {
            return Some(id);
        }
        current = store.parent(id);
    }
    None
}

/// Node with the smallest key strictly greater than `key`. `key` itself
/// need not be stored.
pub(crate) fn successor<K, V, C: Comparator<K>>(
    store: &NodeStore<K, V>,
    compare: &C,
    root: NodeId,
    key: &K,
) -> Option<NodeId> {
    let greater = |k: &K| compare.compare(key, k) == Ordering::Less;
    let mut node = root;
    loop {
        match compare.compare(key, store.key(node)) {
            Ordering::Equal => {
                return match store.right(node) {
                    Some(right) => Some(store.min_descendant(right)),
                    None => climb(store, node, greater),
                };
            }
            Ordering::Less => match store.left(node) {
                Some(left) => node = left,
                None => return Some(node),
            },
            Ordering::Greater => match store.right(node) {
                Some(right) => node = right,
                None => return climb(store, node, greater),
            },
        }
    }
}

/// Node with the largest key strictly less than `key`. Mirror of
/// [`successor`].
pub(crate) fn predecessor<K, V, C: Comparator<K>>(
    store: &NodeStore<K, V>,
    compare: &C,
    root: NodeId,
    key: &K,
) -> Option<NodeId> {
    let less = |k: &K| compare.compare(key, k) == Ordering::Greater;
    let mut node = root;
    loop {
        match compare.compare(key, store.key(node)) {
            Ordering::Equal => {
                return match store.left(node) {
                    Some(left) => Some(store.max_descendant(left)),
                    None => climb(store, node, less),
                };
            }
            Ordering::Less => match store.left(node) {
                Some(left) => node = left,
                None => return climb(store, node, less),
            },
            Ordering::Greater => match store.right(node) {
                Some(right) => node = right,
                None => return Some(node),
            },
        }
    }
}

/// Which stored keys may answer a nearest-key search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Nearest {
    Any,
    /// At most the target.
    Lte,
    /// At least the target.
    Gte,
}

impl Nearest {
    /// `ordering` is the target compared against the candidate's key.
    #[inline]
    fn admits(self, ordering: Ordering) -> bool {
        match self {
            Nearest::Any => true,
            Nearest::Lte => ordering != Ordering::Less,
            Nearest::Gte => ordering != Ordering::Greater,
        }
    }
}

/// Closest qualifying key to `key` by [`Comparator::distance`].
///
/// An exact match wins outright. Otherwise every node on the descent path is
/// a candidate, and replaces the best one seen so far only when strictly
/// closer.
pub(crate) fn nearest<K, V, C: Comparator<K>>(
    store: &NodeStore<K, V>,
    compare: &C,
    root: NodeId,
    key: &K,
    bound: Nearest,
) -> Option<NodeId> {
    let mut best: Option<(NodeId, f64)> = None;
    let mut node = Some(root);

    while let Some(id) = node {
        let candidate = store.key(id);
        let ordering = compare.compare(key, candidate);
        if ordering == Ordering::Equal {
            return Some(id);
        }

        if bound.admits(ordering) {
            let distance = compare.distance(candidate, key);
            if best.map_or(true, |(_, best_distance)| distance < best_distance) {
                best = Some((id, distance));
            }
        }

        node = match ordering {
            Ordering::Less => store.left(id),
            _ => store.right(id),
        };
    }

    best.map(|(id, _)| id)
}
