//! Error types.

use thiserror::Error;

/// An insert rejected by the `unique` constraint. The key is handed back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("can't insert key {key:?}, it violates the unique constraint")]
pub struct UniqueViolation<K> {
    pub key: K,
}

impl<K> UniqueViolation<K> {
    pub fn into_key(self) -> K {
        self.key
    }
}

/// A broken structural invariant, reported by the `check_*` diagnostics.
///
/// Keys are rendered with their `Debug` implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("tree with root {root} is not a binary search tree: key {key} is out of order")]
    Ordering { root: String, key: String },

    #[error("parent pointer broken for key {key}")]
    ParentPointer { key: String },

    #[error("the root shouldn't have a parent")]
    RootHasParent,

    #[error("{allocated} nodes allocated but {reachable} reachable from the root")]
    Unreachable { allocated: usize, reachable: usize },

    #[error("height constraint failed for node {key}: cached {cached}, expected {expected}")]
    Height {
        key: String,
        cached: u32,
        expected: u32,
    },

    #[error("tree is unbalanced at node {key} (balance factor {balance})")]
    Balance { key: String, balance: i64 },
}

/// A range operator other than `$gt`, `$gte`, `$lt` or `$lte`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown range operator {0:?}")]
pub struct UnknownOperator(pub String);
