//! Token definitions and lexer for the tree notation
//!
//! The notation has exactly four lexical classes: the three delimiter
//! characters and runs of everything else. The tokens are defined with
//! the logos derive macro; the four classes cover every input byte, so
//! tokenization never loses text.
//!
//! Tokens carry no text of their own. Value text is recovered by slicing
//! the source with the token's span, which keeps the parser's error
//! offsets and the value extraction working from the same positions.

use logos::Logos;

/// All possible tokens in the tree notation.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token(",")]
    Comma,

    // Catch-all for value runs between delimiters, whitespace included
    #[regex(r"[^(),]+")]
    Value,
}

impl Token {
    /// Check if this token is a value run.
    pub fn is_value(&self) -> bool {
        matches!(self, Token::Value)
    }
}

/// Tokenize a string and collect tokens with their byte spans.
pub fn tokenize_with_spans(source: &str) -> Vec<(Token, logos::Span)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}
