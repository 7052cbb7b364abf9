//! Range queries: the `$gt` / `$gte` / `$lt` / `$lte` descriptor and the
//! pruned in-order scan answering it.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::arena::NodeId;
use crate::compare::Comparator;
use crate::error::UnknownOperator;
use crate::store::NodeStore;

/// A range operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoundOp {
    /// `$gt`, exclusive lower bound.
    Gt,
    /// `$gte`, inclusive lower bound.
    Gte,
    /// `$lt`, exclusive upper bound.
    Lt,
    /// `$lte`, inclusive upper bound.
    Lte,
}

impl BoundOp {
    pub const fn as_str(self) -> &'static str {
        match self {
            BoundOp::Gt => "$gt",
            BoundOp::Gte => "$gte",
            BoundOp::Lt => "$lt",
            BoundOp::Lte => "$lte",
        }
    }
}

impl FromStr for BoundOp {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "$gt" => Ok(BoundOp::Gt),
            "$gte" => Ok(BoundOp::Gte),
            "$lt" => Ok(BoundOp::Lt),
            "$lte" => Ok(BoundOp::Lte),
            other => Err(UnknownOperator(other.to_string())),
        }
    }
}

impl fmt::Display for BoundOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Range query descriptor. Every bound is optional; an empty descriptor
/// matches every key.
///
/// ```rust
/// use ordtree::{AvlTree, Bounds};
///
/// let mut tree: AvlTree<i32, &str> = AvlTree::new();
/// for (k, v) in [(3, "c"), (5, "e"), (8, "h"), (10, "j"), (15, "o")] {
///     tree.insert(k, v).unwrap();
/// }
/// let hits = tree.between_bounds(&Bounds::new().gt(5).lte(10));
/// assert_eq!(hits, vec![&"h", &"j"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bounds<K> {
    pub gt: Option<K>,
    pub gte: Option<K>,
    pub lt: Option<K>,
    pub lte: Option<K>,
}

impl<K> Default for Bounds<K> {
    fn default() -> Self {
        Self {
            gt: None,
            gte: None,
            lt: None,
            lte: None,
        }
    }
}

impl<K> Bounds<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gt(mut self, key: K) -> Self {
        self.gt = Some(key);
        self
    }

    pub fn gte(mut self, key: K) -> Self {
        self.gte = Some(key);
        self
    }

    pub fn lt(mut self, key: K) -> Self {
        self.lt = Some(key);
        self
    }

    pub fn lte(mut self, key: K) -> Self {
        self.lte = Some(key);
        self
    }

    /// Set the bound for `op`, replacing any previous one.
    pub fn with(self, op: BoundOp, key: K) -> Self {
        match op {
            BoundOp::Gt => self.gt(key),
            BoundOp::Gte => self.gte(key),
            BoundOp::Lt => self.lt(key),
            BoundOp::Lte => self.lte(key),
        }
    }

    /// Build a descriptor from operator names such as `"$gt"`. Unrecognised
    /// operators are ignored.
    ///
    /// ```rust
    /// use ordtree::Bounds;
    ///
    /// let bounds = Bounds::from_operators([("$gte", 1), ("$ne", 2), ("$lt", 9)]);
    /// assert_eq!(bounds, Bounds::new().gte(1).lt(9));
    /// ```
    pub fn from_operators<'a, I>(operators: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, K)>,
    {
        operators
            .into_iter()
            .fold(Self::new(), |bounds, (op, key)| match op.parse() {
                Ok(op) => bounds.with(op, key),
                Err(_) => bounds,
            })
    }

    pub fn is_unbounded(&self) -> bool {
        self.gt.is_none() && self.gte.is_none() && self.lt.is_none() && self.lte.is_none()
    }

    pub(crate) fn lower<C: Comparator<K>>(&self, compare: &C) -> LowerBound<'_, K> {
        match (&self.gt, &self.gte) {
            (None, None) => LowerBound::Unbounded,
            (Some(gt), None) => LowerBound::Exclusive(gt),
            (None, Some(gte)) => LowerBound::Inclusive(gte),
            // The tighter bound wins; on a tie the exclusive one is tighter.
            (Some(gt), Some(gte)) => match compare.compare(gte, gt) {
                Ordering::Greater => LowerBound::Inclusive(gte),
                _ => LowerBound::Exclusive(gt),
            },
        }
    }

    pub(crate) fn upper<C: Comparator<K>>(&self, compare: &C) -> UpperBound<'_, K> {
        match (&self.lt, &self.lte) {
            (None, None) => UpperBound::Unbounded,
            (Some(lt), None) => UpperBound::Exclusive(lt),
            (None, Some(lte)) => UpperBound::Inclusive(lte),
            (Some(lt), Some(lte)) => match compare.compare(lte, lt) {
                Ordering::Less => UpperBound::Inclusive(lte),
                _ => UpperBound::Exclusive(lt),
            },
        }
    }
}

/// Resolved lower-bound matcher.
#[derive(Clone, Copy, Debug)]
pub(crate) enum LowerBound<'a, K> {
    Unbounded,
    Exclusive(&'a K),
    Inclusive(&'a K),
}

impl<K> LowerBound<'_, K> {
    #[inline]
    pub(crate) fn matches<C: Comparator<K>>(&self, compare: &C, key: &K) -> bool {
        match self {
            LowerBound::Unbounded => true,
            LowerBound::Exclusive(bound) => compare.compare(key, bound) == Ordering::Greater,
            LowerBound::Inclusive(bound) => compare.compare(key, bound) != Ordering::Less,
        }
    }
}

/// Resolved upper-bound matcher.
#[derive(Clone, Copy, Debug)]
pub(crate) enum UpperBound<'a, K> {
    Unbounded,
    Exclusive(&'a K),
    Inclusive(&'a K),
}

impl<K> UpperBound<'_, K> {
    #[inline]
    pub(crate) fn matches<C: Comparator<K>>(&self, compare: &C, key: &K) -> bool {
        match self {
            UpperBound::Unbounded => true,
            UpperBound::Exclusive(bound) => compare.compare(key, bound) == Ordering::Less,
            UpperBound::Inclusive(bound) => compare.compare(key, bound) != Ordering::Greater,
        }
    }
}

/// Append the values of every key inside the bounds to `out`, ascending.
///
/// The left subtree of a node below the lower bound is skipped, and the scan
/// stops at the first key above the upper bound.
pub(crate) fn between_bounds<'a, K, V, C: Comparator<K>>(
    store: &'a NodeStore<K, V>,
    compare: &C,
    root: NodeId,
    lower: LowerBound<'_, K>,
    upper: UpperBound<'_, K>,
    out: &mut Vec<&'a V>,
) {
    // Pending nodes all satisfy the lower bound.
    let mut stack: Vec<NodeId> = Vec::new();
    let mut next = Some(root);

    loop {
        while let Some(id) = next {
            if lower.matches(compare, store.key(id)) {
                stack.push(id);
                next = store.left(id);
            } else {
                next = store.right(id);
            }
        }

        let Some(id) = stack.pop() else {
            return;
        };
        if !upper.matches(compare, store.key(id)) {
            return;
        }
        out.extend(store[id].values.iter());
        next = store.right(id);
    }
}
