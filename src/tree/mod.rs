//! The tree engine shared by [`BinarySearchTree`](crate::BinarySearchTree)
//! and [`AvlTree`](crate::AvlTree).

mod delete;
mod insert;
mod invariants;

use crate::arena::NodeId;
use crate::bounds::{self, Bounds};
use crate::compare::{Comparator, DefaultEquality, NaturalOrder};
use crate::iter::Iter;
use crate::node::NodeView;
use crate::options::Options;
use crate::search::{self, Nearest};
use crate::store::NodeStore;
use crate::strategy::Strategy;

/// An ordered index mapping each key to the sequence of values stored under
/// it.
///
/// `S` selects the balancing policy; use the [`BinarySearchTree`] and
/// [`AvlTree`] aliases rather than naming it. `C` orders keys and `E` decides
/// value equality, see [`Options`].
///
/// [`BinarySearchTree`]: crate::BinarySearchTree
/// [`AvlTree`]: crate::AvlTree
#[derive(Clone)]
pub struct Tree<K, V, S, C = NaturalOrder, E = DefaultEquality> {
    pub(crate) store: NodeStore<K, V>,
    strategy: S,
    compare_keys: C,
    check_value_equality: E,
    unique: bool,
    vk_unique: bool,
}

impl<K, V, S: Strategy> Tree<K, V, S> {
    /// Empty tree with natural key order and `PartialEq` value equality.
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }
}

impl<K, V, S: Strategy> Default for Tree<K, V, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S: Strategy, C, E> Tree<K, V, S, C, E> {
    pub fn with_options(options: Options<C, E>) -> Self {
        Self {
            store: NodeStore::new(),
            strategy: S::new(options.seed),
            compare_keys: options.compare_keys,
            check_value_equality: options.check_value_equality,
            unique: options.unique,
            vk_unique: options.vk_unique,
        }
    }

    /// Tree whose root already holds `key` with `values`, stored as given.
    pub fn from_entry(options: Options<C, E>, key: K, values: Vec<V>) -> Self {
        let mut tree = Self::with_options(options);
        tree.store.plant_root(key, values);
        tree
    }

    /// Run the strategy over the surviving ancestors of a structural edit and
    /// adopt the root it reports.
    pub(crate) fn rebalance(&mut self, path: &[NodeId]) {
        if let Some(root) = self.strategy.rebalance(&mut self.store, path) {
            self.store.set_root(Some(root));
        }
    }
}

impl<K, V, S, C, E> Tree<K, V, S, C, E> {
    /// Number of distinct keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Alias of [`len`](Self::len).
    pub fn number_of_keys(&self) -> usize {
        self.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.root().is_none()
    }

    /// Number of nodes the tree can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Remove every key.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    pub fn is_unique(&self) -> bool {
        self.unique
    }

    pub fn is_vk_unique(&self) -> bool {
        self.vk_unique
    }

    /// Key held by the root node. Which key that is depends on the insertion
    /// history and, for the AVL tree, on rotations.
    pub fn root_key(&self) -> Option<&K> {
        self.store.root().map(|root| self.store.key(root))
    }

    pub fn min_key(&self) -> Option<&K> {
        self.min_key_descendant().map(|node| node.key())
    }

    pub fn max_key(&self) -> Option<&K> {
        self.max_key_descendant().map(|node| node.key())
    }

    /// Node holding the smallest key.
    pub fn min_key_descendant(&self) -> Option<NodeView<'_, K, V>> {
        let root = self.store.root()?;
        Some(self.view(self.store.min_descendant(root)))
    }

    /// Node holding the largest key.
    pub fn max_key_descendant(&self) -> Option<NodeView<'_, K, V>> {
        let root = self.store.root()?;
        Some(self.view(self.store.max_descendant(root)))
    }

    /// Lazy in-order walk over the nodes, ascending by key.
    ///
    /// Every call starts from the smallest key. The iterator borrows the
    /// tree, so the tree cannot change under it:
    ///
    /// ```compile_fail
    /// use ordtree::AvlTree;
    ///
    /// let mut tree: AvlTree<u32, ()> = AvlTree::new();
    /// tree.insert(1, ()).unwrap();
    /// for node in tree.iter() {
    ///     tree.delete(node.key());
    /// }
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.store)
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|node| node.key())
    }

    /// Every value, ordered by key and then by insertion.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().flat_map(|node| node.values().iter())
    }

    /// Call `visit` on every node in key order.
    pub fn for_each_node<F>(&self, visit: F)
    where
        F: FnMut(NodeView<'_, K, V>),
    {
        self.iter().for_each(visit);
    }

    /// Call `visit` on every node in key order, stopping at the first error,
    /// which is returned.
    pub fn try_for_each_node<F, Err>(&self, visit: F) -> Result<(), Err>
    where
        F: FnMut(NodeView<'_, K, V>) -> Result<(), Err>,
    {
        self.iter().try_for_each(visit)
    }

    #[inline]
    fn view(&self, id: NodeId) -> NodeView<'_, K, V> {
        NodeView::of(&self.store[id])
    }
}

impl<K, V, S, C: Comparator<K>, E> Tree<K, V, S, C, E> {
    /// Values stored under `key`, in insertion order. Empty when the key is
    /// absent.
    pub fn search(&self, key: &K) -> &[V] {
        self.get(key).map(|node| node.values()).unwrap_or(&[])
    }

    /// Node holding exactly `key`.
    pub fn get(&self, key: &K) -> Option<NodeView<'_, K, V>> {
        let root = self.store.root()?;
        search::find(&self.store, &self.compare_keys, root, key).map(|id| self.view(id))
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Node with the smallest key strictly greater than `key`, which need not
    /// be stored itself.
    pub fn search_after(&self, key: &K) -> Option<NodeView<'_, K, V>> {
        let root = self.store.root()?;
        search::successor(&self.store, &self.compare_keys, root, key).map(|id| self.view(id))
    }

    /// Node with the largest key strictly less than `key`, which need not be
    /// stored itself.
    pub fn search_before(&self, key: &K) -> Option<NodeView<'_, K, V>> {
        let root = self.store.root()?;
        search::predecessor(&self.store, &self.compare_keys, root, key).map(|id| self.view(id))
    }

    /// Node whose key is closest to `key`.
    ///
    /// Closeness is measured with [`Comparator::distance`], so the answer is
    /// only exact for comparators whose distance follows the real gap between
    /// keys, such as [`NumericOrder`](crate::NumericOrder) or
    /// [`Signed`](crate::Signed).
    ///
    /// When two keys are equally close, the one met first on the descent
    /// from the root wins.
    pub fn search_nearest(&self, key: &K) -> Option<NodeView<'_, K, V>> {
        self.nearest(key, Nearest::Any)
    }

    /// Closest node whose key is at most `key`.
    pub fn search_nearest_lte(&self, key: &K) -> Option<NodeView<'_, K, V>> {
        self.nearest(key, Nearest::Lte)
    }

    /// Closest node whose key is at least `key`.
    pub fn search_nearest_gte(&self, key: &K) -> Option<NodeView<'_, K, V>> {
        self.nearest(key, Nearest::Gte)
    }

    fn nearest(&self, key: &K, bound: Nearest) -> Option<NodeView<'_, K, V>> {
        let root = self.store.root()?;
        search::nearest(&self.store, &self.compare_keys, root, key, bound).map(|id| self.view(id))
    }

    /// Values of every key within `bounds`, ascending by key and then by
    /// insertion.
    pub fn between_bounds(&self, bounds: &Bounds<K>) -> Vec<&V> {
        let mut out = Vec::new();
        if let Some(root) = self.store.root() {
            bounds::between_bounds(
                &self.store,
                &self.compare_keys,
                root,
                bounds.lower(&self.compare_keys),
                bounds.upper(&self.compare_keys),
                &mut out,
            );
        }
        out
    }
}

impl<'a, K, V, S, C, E> IntoIterator for &'a Tree<K, V, S, C, E> {
    type Item = NodeView<'a, K, V>;
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
