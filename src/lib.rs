//! # ordtree
//!
//! In-memory ordered indexes for embedded document stores: a plain binary
//! search tree and a height-balanced AVL tree, both mapping each key to the
//! sequence of values stored under it.
//!
//! Both variants answer exact lookups, neighbour and nearest-key searches,
//! `$gt`/`$gte`/`$lt`/`$lte` range queries and ordered traversal. Nodes live
//! in an arena and refer to each other by index, so neither the trees nor
//! their traversals recurse.
//!
//! ## Example
//!
//! ```rust
//! use ordtree::{AvlTree, Bounds};
//!
//! let mut tree: AvlTree<u32, &str> = AvlTree::new();
//! tree.insert(10, "ten").unwrap();
//! tree.insert(5, "five").unwrap();
//! tree.insert(5, "cinq").unwrap();
//! tree.insert(15, "fifteen").unwrap();
//!
//! assert_eq!(tree.search(&5), &["five", "cinq"]);
//! assert_eq!(tree.search_after(&5).map(|n| *n.key()), Some(10));
//! assert_eq!(
//!     tree.between_bounds(&Bounds::new().gte(10)),
//!     vec![&"ten", &"fifteen"],
//! );
//!
//! tree.delete(&10);
//! assert_eq!(tree.keys().copied().collect::<Vec<_>>(), vec![5, 15]);
//! tree.check_is_avlt().unwrap();
//! ```

#![deny(unsafe_code)]

mod arena;
mod avl;
mod bounds;
mod bst;
mod compare;
mod debug;
mod error;
mod iter;
mod node;
mod options;
mod search;
mod store;
mod strategy;
mod tree;

pub use avl::{Avl, AvlTree};
pub use bounds::{BoundOp, Bounds};
pub use bst::{BinarySearchTree, Unbalanced};
pub use compare::{
    Comparator, DefaultEquality, NaturalOrder, NumericKey, NumericOrder, Signed, ValueEquality,
};
pub use error::{InvariantViolation, UniqueViolation, UnknownOperator};
pub use iter::Iter;
pub use node::{NodeView, Side};
pub use options::Options;
pub use strategy::Strategy;
pub use tree::Tree;

#[cfg(test)]
mod proptests;
