//! Plain binary search tree.
//!
//! The tree never restructures itself. To keep long delete-heavy workloads
//! from skewing it to one side, a node with two children is replaced by its
//! in-order predecessor or successor with equal probability.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::arena::NodeId;
use crate::compare::{DefaultEquality, NaturalOrder};
use crate::node::Side;
use crate::store::NodeStore;
use crate::strategy::{Sealed, Strategy};
use crate::tree::Tree;

/// Binary search tree without rebalancing.
pub type BinarySearchTree<K, V, C = NaturalOrder, E = DefaultEquality> =
    Tree<K, V, Unbalanced, C, E>;

/// Strategy of [`BinarySearchTree`].
#[derive(Clone, Debug)]
pub struct Unbalanced {
    rng: StdRng,
}

impl Sealed for Unbalanced {}

impl Strategy for Unbalanced {
    const REBALANCES: bool = false;

    fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    fn replacement_side(&mut self) -> Side {
        if self.rng.gen_bool(0.5) {
            Side::Left
        } else {
            Side::Right
        }
    }

    #[inline]
    fn rebalance<K, V>(
        &mut self,
        _store: &mut NodeStore<K, V>,
        _path: &[NodeId],
    ) -> Option<NodeId> {
        None
    }
}
