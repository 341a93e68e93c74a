//! Token types for the scrawl tokenizer.
//!
//! Tokens are a closed sum. Besides the tokens that mirror source text
//! (symbols, numbers, strings, comments, operators, meta brackets) the
//! tokenizer synthesises three structural tokens from whitespace:
//! [`TokenKind::StartScope`], [`TokenKind::EndScope`] and
//! [`TokenKind::LineDelimiter`].

use std::fmt;

use crate::Position;

/// What a token is, without its location.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// Letters, digits and `-`, starting with a letter.
    Symbol(String),
    /// Optionally negative decimal integer.
    Number(i64),
    /// Quoted text with the delimiters removed.
    String(String),
    /// Comment text after `#`, trimmed.
    Comment(String),
    /// Single-character operator. Only `.` exists today.
    Operator(char),
    /// Indentation increased by one level.
    StartScope,
    /// Indentation decreased by one level.
    EndScope,
    /// End of a logical line.
    LineDelimiter,
    /// `[`
    StartMetaData,
    /// `]`
    EndMetaData,
}

impl TokenKind {
    /// Short, human-readable name of the token category.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Symbol(_) => "symbol",
            TokenKind::Number(_) => "number",
            TokenKind::String(_) => "string",
            TokenKind::Comment(_) => "comment",
            TokenKind::Operator(_) => "operator",
            TokenKind::StartScope => "start of scope",
            TokenKind::EndScope => "end of scope",
            TokenKind::LineDelimiter => "end of line",
            TokenKind::StartMetaData => "start of meta data",
            TokenKind::EndMetaData => "end of meta data",
        }
    }

    #[inline]
    pub fn is_comment(&self) -> bool {
        matches!(self, TokenKind::Comment(_))
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Symbol(text) => write!(f, "symbol '{text}'"),
            TokenKind::Number(value) => write!(f, "number {value}"),
            TokenKind::String(text) => write!(f, "string '{text}'"),
            TokenKind::Comment(text) => write!(f, "comment '{text}'"),
            TokenKind::Operator(op) => write!(f, "operator '{op}'"),
            other => f.write_str(other.display_name()),
        }
    }
}

/// A token with the position of its first character.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub position: Position,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, position: Position) -> Self {
        Token { kind, position }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.position)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.position)
    }
}
