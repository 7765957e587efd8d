//! # arbor
//!
//! A parser for a compact binary tree notation.
//!
//! A tree is written as its root value followed, when any child is
//! present, by the parenthesized pair of its children:
//!
//! ```text
//! a(b(d,e),c(,f(g,)))
//! ```
//!
//! Leaves are written bare and an absent subtree is written as nothing,
//! so `a(b,)` has no right child and the empty string is the empty tree.
//! [`parse`] and [`serialize`] are inverse over trees whose values avoid
//! the three delimiter characters.
//!
//! The crate also carries the tree operations the notation is usually
//! demonstrated with (search-tree insertion, leaf queries) plus small
//! sequence and number-theory helpers, and a [`formats`] registry for
//! JSON/YAML views of a tree.

pub mod formats;
pub mod notation;
pub mod num;
pub mod seq;
pub mod tree;

pub use notation::{parse, serialize, ParseError};
pub use tree::Tree;
