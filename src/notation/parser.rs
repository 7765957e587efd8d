//! Parser for the tree notation
//!
//! Recursive descent over the spanned token stream. Each parsing function
//! takes the cursor (a token index) and returns the parsed subtree
//! together with the advanced cursor; no parser state lives outside the
//! call stack, so repeated parses of the same input always agree.
//!
//! Malformed input fails fast: a missing `,` or `)` and leftover input
//! after a complete tree are reported as errors carrying the byte offset
//! of the offending position. Blank input is not malformed; it denotes
//! the empty tree.

use std::fmt;

use super::lexer::{tokenize_with_spans, Token};
use crate::tree::Tree;

type SpannedToken = (Token, logos::Span);

/// Errors that can occur while parsing the tree notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A specific delimiter was required but something else was found.
    ExpectedToken { expected: char, offset: usize },
    /// The input ended inside an unterminated `(...)` group.
    UnexpectedEnd { expected: char },
    /// Input remained after a complete tree had been parsed.
    TrailingInput { offset: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::ExpectedToken { expected, offset } => {
                write!(f, "expected '{expected}' at byte {offset}")
            }
            ParseError::UnexpectedEnd { expected } => {
                write!(f, "expected '{expected}' but the input ended")
            }
            ParseError::TrailingInput { offset } => {
                write!(f, "unexpected trailing input at byte {offset}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a notation string into a tree.
///
/// Blank input yields `Tree::Empty`. Anything else must be a complete
/// tree with nothing left over.
pub fn parse(source: &str) -> Result<Tree<String>, ParseError> {
    if source.trim().is_empty() {
        return Ok(Tree::Empty);
    }

    let tokens = tokenize_with_spans(source);
    let (tree, pos) = parse_node(source, &tokens, 0)?;

    if let Some((_, span)) = tokens.get(pos) {
        return Err(ParseError::TrailingInput { offset: span.start });
    }

    Ok(tree)
}

/// Parse one `tree` production starting at the given token index.
///
/// Returns the subtree and the index of the first token it did not
/// consume. A position holding a delimiter (or the end of the input)
/// denotes an absent subtree and consumes nothing, which is what lets
/// `a(,b)` leave its left side blank.
fn parse_node(
    source: &str,
    tokens: &[SpannedToken],
    pos: usize,
) -> Result<(Tree<String>, usize), ParseError> {
    let value = match tokens.get(pos) {
        Some((Token::Value, span)) => source[span.clone()].trim().to_string(),
        _ => return Ok((Tree::Empty, pos)),
    };
    if value.is_empty() {
        // Whitespace-only run: consume it, but it still denotes absence
        return Ok((Tree::Empty, pos + 1));
    }
    let mut pos = pos + 1;

    let mut left = Tree::Empty;
    let mut right = Tree::Empty;
    if matches!(tokens.get(pos), Some((Token::OpenParen, _))) {
        pos += 1;
        let (subtree, next) = parse_node(source, tokens, pos)?;
        left = subtree;
        pos = expect(tokens, next, Token::Comma, ',')?;
        let (subtree, next) = parse_node(source, tokens, pos)?;
        right = subtree;
        pos = expect(tokens, next, Token::CloseParen, ')')?;
    }

    Ok((Tree::node(value, left, right), pos))
}

/// Require a specific delimiter token at `pos` and step past it.
fn expect(
    tokens: &[SpannedToken],
    pos: usize,
    token: Token,
    expected: char,
) -> Result<usize, ParseError> {
    match tokens.get(pos) {
        Some((found, _)) if *found == token => Ok(pos + 1),
        Some((_, span)) => Err(ParseError::ExpectedToken {
            expected,
            offset: span.start,
        }),
        None => Err(ParseError::UnexpectedEnd { expected }),
    }
}
