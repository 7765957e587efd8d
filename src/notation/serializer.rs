//! Serializer for the tree notation
//!
//! The inverse of the parser: a pure recursive walk producing the
//! canonical string form. A leaf is written without parentheses, so the
//! notation for `Node("a", Empty, Empty)` is just `a`; a node with at
//! least one child always gets the parenthesized pair, with an empty
//! child leaving its side of the comma blank.
//!
//! Serialization is total: it never fails on any well-formed tree.

use std::fmt;

use crate::tree::Tree;

/// Serialize a tree into its canonical notation string.
pub fn serialize<T: fmt::Display>(tree: &Tree<T>) -> String {
    match tree {
        Tree::Empty => String::new(),
        Tree::Node { value, left, right } => {
            if left.is_empty() && right.is_empty() {
                value.to_string()
            } else {
                format!("{}({},{})", value, serialize(left), serialize(right))
            }
        }
    }
}

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize(self))
    }
}
