//! Tokenizer errors.
//!
//! Every error carries the position where the offending construct starts.
//! The first error ends tokenization; there is no recovery.

use scrawl_ir::{ErrorCategory, Position};
use thiserror::Error;

/// A tokenizer error at a source position.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind} at {position}")]
pub struct LexError {
    pub position: Position,
    pub kind: LexErrorKind,
}

/// What went wrong.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    /// Indentation may only use spaces.
    #[error("illegal indentation character {found:?}, only spaces are allowed")]
    IllegalIndentation { found: char },
    #[error("must have double spaces as indentation, found {spaces} spaces")]
    OddIndentation { spaces: usize },
    /// Indentation may grow by one level per line.
    #[error("too much indentation, expected at most {allowed} levels but found {found}")]
    TooMuchIndentation { allowed: usize, found: usize },
    #[error("unterminated string")]
    UnterminatedString,
    #[error("unknown rune {found:?}")]
    UnknownRune { found: char },
    /// A `-` not followed by a digit.
    #[error("missing digits after '-'")]
    MissingDigits,
    #[error("number out of range: {text}")]
    NumberOutOfRange { text: String },
}

impl LexError {
    #[cold]
    pub fn new(position: Position, kind: LexErrorKind) -> Self {
        LexError { position, kind }
    }

    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Lexical
    }

    #[cold]
    pub fn illegal_indentation(position: Position, found: char) -> Self {
        Self::new(position, LexErrorKind::IllegalIndentation { found })
    }

    #[cold]
    pub fn odd_indentation(position: Position, spaces: usize) -> Self {
        Self::new(position, LexErrorKind::OddIndentation { spaces })
    }

    #[cold]
    pub fn too_much_indentation(position: Position, allowed: usize, found: usize) -> Self {
        Self::new(position, LexErrorKind::TooMuchIndentation { allowed, found })
    }

    #[cold]
    pub fn unterminated_string(position: Position) -> Self {
        Self::new(position, LexErrorKind::UnterminatedString)
    }

    #[cold]
    pub fn unknown_rune(position: Position, found: char) -> Self {
        Self::new(position, LexErrorKind::UnknownRune { found })
    }

    #[cold]
    pub fn missing_digits(position: Position) -> Self {
        Self::new(position, LexErrorKind::MissingDigits)
    }

    #[cold]
    pub fn number_out_of_range(position: Position, text: impl Into<String>) -> Self {
        Self::new(position, LexErrorKind::NumberOutOfRange { text: text.into() })
    }
}
