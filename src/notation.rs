//! The compact tree notation: serializer and parser
//!
//! The notation writes a tree as its root value followed, when at least
//! one child is present, by the parenthesized pair of its serialized
//! children:
//!
//! ```text
//! tree  ::= node | ""
//! node  ::= value ("(" tree "," tree ")")?
//! value ::= any run of characters excluding '(', ')', ','
//! ```
//!
//! A leaf is written as its bare value with no parentheses; an empty
//! subtree is written as nothing at all, so `a(b,)` is a node whose right
//! child is absent. The empty string denotes the empty tree.
//!
//! Parsing and serialization are inverse over the trees whose values
//! contain none of the three delimiter characters and carry no leading or
//! trailing whitespace (the parser trims values, matching how the
//! notation is written by hand).

pub mod lexer;
pub mod parser;
pub mod serializer;

pub use lexer::{tokenize_with_spans, Token};
pub use parser::{parse, ParseError};
pub use serializer::serialize;
