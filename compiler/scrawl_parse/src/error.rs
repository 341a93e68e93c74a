//! Parse error types.
//!
//! [`ParseError`] covers grammar and consistency problems found by the
//! parser; tokenizer errors keep their own type and position. [`Error`]
//! is the union returned by [`parse`](crate::parse).
//!
//! Every message ends with the position it refers to, rendered
//! `[line:column]`.

use std::fmt;

use scrawl_ir::{DefinitionError, ErrorCategory, LodError, Position, TokenKind};
use scrawl_lexer::LexError;
use thiserror::Error;

/// The token found where something else was expected.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Found(pub Option<TokenKind>);

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(kind) => fmt::Display::fmt(kind, f),
            None => f.write_str("end of input"),
        }
    }
}

/// What went wrong while parsing.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseErrorKind {
    // === Syntactic ===
    #[error("missing start scope, found {found}")]
    MissingStartScope { found: Found },
    /// Inside a body: the next entry or the end of the body.
    #[error("expected {entry} or end of scope, found {found}")]
    ExpectedEntryOrEndOfScope { entry: &'static str, found: Found },
    #[error("unexpected token: {found}")]
    UnexpectedToken { found: Found },
    #[error("must end line, found {found}")]
    MissingLineDelimiter { found: Found },
    #[error("unknown keyword {keyword}")]
    UnknownKeyword { keyword: String },
    #[error("expected {what}, found {found}")]
    ExpectedSymbol { what: &'static str, found: Found },
    #[error("expected {what}, found {found}")]
    ExpectedString { what: &'static str, found: Found },
    #[error("expected {what}, found {found}")]
    ExpectedNumber { what: &'static str, found: Found },
    #[error("expected 'lod' or end of scope, found {found}")]
    ExpectedLod { found: Found },
    #[error("expected meta key or end of meta data, found {found}")]
    ExpectedMetaKey { found: Found },

    // === Semantic ===
    #[error("unknown component type:{name}")]
    UnknownComponentType { name: String },
    #[error("unknown field type:{field_type} in component {component}")]
    UnknownFieldType { field_type: String, component: String },
    #[error(transparent)]
    Lod(#[from] LodError),
    #[error(transparent)]
    Definition(#[from] DefinitionError),
}

impl ParseErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ParseErrorKind::UnknownComponentType { .. }
            | ParseErrorKind::UnknownFieldType { .. }
            | ParseErrorKind::Lod(_)
            | ParseErrorKind::Definition(_) => ErrorCategory::Semantic,
            _ => ErrorCategory::Syntactic,
        }
    }
}

/// A parse error at a source position.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{kind} at {position}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub position: Position,
}

impl ParseError {
    #[cold]
    pub fn new(kind: impl Into<ParseErrorKind>, position: Position) -> Self {
        ParseError {
            kind: kind.into(),
            position,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }
}

/// Any error produced by [`parse`](crate::parse).
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Lex(err) => err.category(),
            Error::Parse(err) => err.category(),
        }
    }

    pub fn position(&self) -> Position {
        match self {
            Error::Lex(err) => err.position,
            Error::Parse(err) => err.position,
        }
    }
}
