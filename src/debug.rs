//! Human-readable dumps of a tree.

use std::fmt::{self, Debug, Write};

use crate::arena::NodeId;
use crate::tree::Tree;

impl<K: Debug, V: Debug, S, C, E> Tree<K, V, S, C, E> {
    /// Render the tree shape, one `* key` line per node with children indented
    /// by two spaces. A lone `*` marks the missing child of a node that has
    /// exactly one. With `print_data` each node is followed by a line listing
    /// its values.
    ///
    /// ```rust
    /// use ordtree::BinarySearchTree;
    ///
    /// let mut tree: BinarySearchTree<u32, char> = BinarySearchTree::new();
    /// for (k, v) in [(2, 'b'), (3, 'c')] {
    ///     tree.insert(k, v).unwrap();
    /// }
    /// assert_eq!(tree.pretty(false), "* 2\n  *\n  * 3\n");
    /// ```
    pub fn pretty(&self, print_data: bool) -> String {
        let mut out = String::new();
        let mut stack: Vec<(Option<NodeId>, usize)> =
            self.store.root().map(|root| (Some(root), 0)).into_iter().collect();

        while let Some((id, depth)) = stack.pop() {
            let indent = "  ".repeat(depth);
            let Some(id) = id else {
                let _ = writeln!(out, "{indent}*");
                continue;
            };

            let node = &self.store[id];
            let _ = writeln!(out, "{indent}* {:?}", node.key);
            if print_data {
                let _ = writeln!(out, "{indent}* {:?}", node.values);
            }
            if !node.is_leaf() {
                stack.push((node.right, depth + 1));
                stack.push((node.left, depth + 1));
            }
        }
        out
    }
}

impl<K: Debug, V: Debug, S, C, E> Debug for Tree<K, V, S, C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|node| (node.key(), node.values())))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{AvlTree, BinarySearchTree};

    #[test]
    fn test_pretty_balanced() {
        let mut t: AvlTree<u32, &str> = AvlTree::new();
        for (k, v) in [(2, "b"), (1, "a"), (3, "c")] {
            t.insert(k, v).unwrap();
        }
        assert_eq!(t.pretty(false), "* 2\n  * 1\n  * 3\n");
        assert_eq!(
            t.pretty(true),
            "* 2\n* [\"b\"]\n  * 1\n  * [\"a\"]\n  * 3\n  * [\"c\"]\n"
        );
    }

    #[test]
    fn test_pretty_missing_right_child() {
        let mut t: BinarySearchTree<u32, ()> = BinarySearchTree::new();
        for k in [5, 3, 1] {
            t.insert(k, ()).unwrap();
        }
        assert_eq!(t.pretty(false), "* 5\n  * 3\n    * 1\n    *\n  *\n");
    }

    #[test]
    fn test_pretty_empty() {
        let t: BinarySearchTree<u32, ()> = BinarySearchTree::new();
        assert_eq!(t.pretty(true), "");
    }

    #[test]
    fn test_debug_map() {
        let mut t: BinarySearchTree<u32, u32> = BinarySearchTree::new();
        t.insert(2, 20).unwrap();
        t.insert(1, 10).unwrap();
        t.insert(1, 11).unwrap();
        assert_eq!(format!("{t:?}"), "{1: [10, 11], 2: [20]}");
    }
}
