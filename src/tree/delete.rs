use std::cmp::Ordering;

use smallvec::SmallVec;
use tracing::trace;

use super::Tree;
use crate::arena::NodeId;
use crate::compare::{Comparator, ValueEquality};
use crate::node::Side;
use crate::strategy::Strategy;

impl<K, V, S, C, E> Tree<K, V, S, C, E>
where
    S: Strategy,
    C: Comparator<K>,
    E: ValueEquality<V>,
{
    /// Remove `key` and all of its values. Absent keys are ignored.
    pub fn delete(&mut self, key: &K) {
        self.delete_entry(key, None);
    }

    /// Remove the values equal to `value` from `key`.
    ///
    /// The key itself goes away when it holds a single value, whichever value
    /// that is, or when no value survives the filter.
    pub fn delete_value(&mut self, key: &K, value: &V) {
        self.delete_entry(key, Some(value));
    }

    fn delete_entry(&mut self, key: &K, value: Option<&V>) {
        let mut path: SmallVec<[NodeId; 32]> = SmallVec::new();
        let mut node = self.store.root();
        let target = loop {
            let Some(id) = node else {
                trace!("delete of absent key");
                return;
            };
            let ordering = self.compare_keys.compare(key, self.store.key(id));
            if ordering == Ordering::Equal {
                break id;
            }
            if S::REBALANCES {
                path.push(id);
            }
            node = match ordering {
                Ordering::Less => self.store.left(id),
                _ => self.store.right(id),
            };
        };

        if let Some(value) = value {
            let equality = &self.check_value_equality;
            let values = &mut self.store[target].values;
            if values.len() > 1 {
                values.retain(|v| !equality.equal(v, value));
                if !values.is_empty() {
                    return;
                }
            }
        }

        match (self.store.left(target), self.store.right(target)) {
            (Some(left), Some(right)) => {
                if S::REBALANCES {
                    path.push(target);
                }
                // The replacement is the extreme node of one subtree on the
                // side facing `target`; it has at most one child.
                let side = self.strategy.replacement_side();
                let mut donor = match side {
                    Side::Left => left,
                    Side::Right => right,
                };
                while let Some(next) = self.store.child(donor, side.opposite()) {
                    if S::REBALANCES {
                        path.push(donor);
                    }
                    donor = next;
                }
                let removed = self.store.splice(donor);
                self.store.copy_identity_from(target, removed);
            }
            _ => {
                self.store.splice(target);
            }
        }

        self.rebalance(&path);
    }
}
