use std::cmp::Ordering;

use smallvec::SmallVec;
use tracing::debug;

use super::Tree;
use crate::arena::NodeId;
use crate::compare::{Comparator, ValueEquality};
use crate::error::UniqueViolation;
use crate::strategy::Strategy;

impl<K, V, S, C, E> Tree<K, V, S, C, E>
where
    S: Strategy,
    C: Comparator<K>,
    E: ValueEquality<V>,
{
    /// Store `value` under `key`.
    ///
    /// An existing key gets the value appended, unless `vk_unique` is set and
    /// an equal value is already there. With `unique` set, a value not
    /// already stored under an existing key is rejected and the key handed
    /// back.
    pub fn insert(&mut self, key: K, value: V) -> Result<(), UniqueViolation<K>> {
        self.insert_entry(key, Some(value))
    }

    /// Register `key` with no value. Under `unique` an already present key is
    /// a violation.
    pub fn insert_key(&mut self, key: K) -> Result<(), UniqueViolation<K>> {
        self.insert_entry(key, None)
    }

    fn insert_entry(&mut self, key: K, value: Option<V>) -> Result<(), UniqueViolation<K>> {
        let Some(mut current) = self.store.root() else {
            self.store.plant_root(key, value.into_iter().collect());
            return Ok(());
        };

        let mut path: SmallVec<[NodeId; 32]> = SmallVec::new();
        let leaf = loop {
            if S::REBALANCES {
                path.push(current);
            }
            match self.compare_keys.compare(&key, self.store.key(current)) {
                Ordering::Equal => return self.merge_value(current, key, value),
                Ordering::Less => match self.store.left(current) {
                    Some(left) => current = left,
                    None => {
                        let values = value.into_iter().collect();
                        break self.store.create_left_child(current, key, values);
                    }
                },
                Ordering::Greater => match self.store.right(current) {
                    Some(right) => current = right,
                    None => {
                        let values = value.into_iter().collect();
                        break self.store.create_right_child(current, key, values);
                    }
                },
            }
        };

        if S::REBALANCES {
            path.push(leaf);
            self.rebalance(&path);
        }
        Ok(())
    }

    /// Apply the value policy to a key that is already stored.
    fn merge_value(
        &mut self,
        id: NodeId,
        key: K,
        value: Option<V>,
    ) -> Result<(), UniqueViolation<K>> {
        let equality = &self.check_value_equality;
        let values = &mut self.store[id].values;
        let present = value
            .as_ref()
            .is_some_and(|value| values.iter().any(|v| equality.equal(v, value)));

        if self.unique {
            if present {
                return Ok(());
            }
            debug!(node = id.slot(), "insert rejected by unique constraint");
            return Err(UniqueViolation { key });
        }

        if let Some(value) = value {
            if !(self.vk_unique && present) {
                values.push(value);
            }
        }
        Ok(())
    }
}
