//! Binary tree data model
//!
//! This module defines the `Tree` type that the notation serializer and
//! parser operate on, together with the tree operations that don't touch
//! the notation: search-tree insertion and leaf queries.
//!
//! A tree is either `Empty` or a `Node` owning a value and two subtrees.
//! `Empty` is a first-class variant rather than an `Option` wrapper so
//! that "no subtree" survives serialization: `a(b,)` and `a(,b)` denote
//! different trees, and the parser needs a value to hand back for the
//! blank side of the comma.
//!
//! Trees are immutable after construction. `insert` consumes the tree and
//! returns a new root, rebuilding only the path it descended and moving
//! every untouched subtree into the result unchanged.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A binary tree with values of type `T` at every node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tree<T> {
    /// The absence of a subtree.
    Empty,
    /// A value with two (possibly empty) children.
    Node {
        value: T,
        left: Box<Tree<T>>,
        right: Box<Tree<T>>,
    },
}

impl<T> Tree<T> {
    /// Build a node from a value and two subtrees.
    pub fn node(value: T, left: Tree<T>, right: Tree<T>) -> Self {
        Tree::Node {
            value,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Build a node with no children.
    pub fn leaf(value: T) -> Self {
        Tree::node(value, Tree::Empty, Tree::Empty)
    }

    /// Check whether this tree is `Empty`.
    pub fn is_empty(&self) -> bool {
        matches!(self, Tree::Empty)
    }

    /// Check whether this tree is a node with two empty children.
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            Tree::Node { left, right, .. } if left.is_empty() && right.is_empty()
        )
    }

    /// Count the leaves of the tree. `Empty` has none.
    pub fn count_leaves(&self) -> usize {
        match self {
            Tree::Empty => 0,
            Tree::Node { left, right, .. } => {
                if left.is_empty() && right.is_empty() {
                    1
                } else {
                    left.count_leaves() + right.count_leaves()
                }
            }
        }
    }

    /// Collect references to the leaf values in left-to-right order.
    pub fn leaf_values(&self) -> Vec<&T> {
        match self {
            Tree::Empty => Vec::new(),
            Tree::Node { value, left, right } => {
                if left.is_empty() && right.is_empty() {
                    vec![value]
                } else {
                    let mut values = left.leaf_values();
                    values.extend(right.leaf_values());
                    values
                }
            }
        }
    }
}

impl<T: Ord> Tree<T> {
    /// Insert a value, treating the tree as a binary search tree.
    ///
    /// Consumes the tree and returns the new root. Only the nodes on the
    /// descent path are rebuilt; subtrees off the path are moved into the
    /// result as-is. A value already present leaves the tree unchanged.
    pub fn insert(self, new_value: T) -> Self {
        match self {
            Tree::Empty => Tree::leaf(new_value),
            Tree::Node { value, left, right } => match new_value.cmp(&value) {
                Ordering::Less => Tree::Node {
                    value,
                    left: Box::new(left.insert(new_value)),
                    right,
                },
                Ordering::Greater => Tree::Node {
                    value,
                    left,
                    right: Box::new(right.insert(new_value)),
                },
                Ordering::Equal => Tree::Node { value, left, right },
            },
        }
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Tree::Empty
    }
}
