//! Tree configuration.

use crate::compare::{DefaultEquality, NaturalOrder};

/// Configuration for a [`Tree`](crate::Tree).
///
/// ```rust
/// use ordtree::{AvlTree, Options};
///
/// let mut tree: AvlTree<u32, &str> = AvlTree::with_options(Options::default().unique(true));
/// tree.insert(1, "a").unwrap();
/// assert!(tree.insert(1, "b").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Options<C = NaturalOrder, E = DefaultEquality> {
    /// Reject a value under a key that already holds a different value.
    pub unique: bool,
    /// Silently drop a value already stored under its key instead of
    /// appending a duplicate.
    pub vk_unique: bool,
    /// Key ordering.
    pub compare_keys: C,
    /// Value equality, used by unique checks and value deletion.
    pub check_value_equality: E,
    /// Seed for the random choices of the unbalanced tree's deletion. Seeded
    /// from the OS when absent.
    pub seed: Option<u64>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            unique: false,
            vk_unique: false,
            compare_keys: NaturalOrder,
            check_value_equality: DefaultEquality,
            seed: None,
        }
    }
}

impl<C, E> Options<C, E> {
    pub fn unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    pub fn vk_unique(mut self, vk_unique: bool) -> Self {
        self.vk_unique = vk_unique;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the key ordering.
    pub fn compare_keys<C2>(self, compare_keys: C2) -> Options<C2, E> {
        Options {
            unique: self.unique,
            vk_unique: self.vk_unique,
            compare_keys,
            check_value_equality: self.check_value_equality,
            seed: self.seed,
        }
    }

    /// Replace the value equality.
    pub fn check_value_equality<E2>(self, check_value_equality: E2) -> Options<C, E2> {
        Options {
            unique: self.unique,
            vk_unique: self.vk_unique,
            compare_keys: self.compare_keys,
            check_value_equality,
            seed: self.seed,
        }
    }
}
