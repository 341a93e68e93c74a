//! Tokenizer for scrawl schema sources.
//!
//! Turns source text into a [`Token`] stream. Indentation is significant:
//! the tokenizer synthesises [`TokenKind::StartScope`],
//! [`TokenKind::EndScope`] and [`TokenKind::LineDelimiter`] tokens from
//! leading spaces and newlines, so the parser never sees whitespace.
//!
//! ```text
//! component Health          Symbol Symbol
//!   value int               StartScope Symbol Symbol LineDelimiter
//! event Died                EndScope Symbol Symbol
//! ```
//!
//! [`TokenKind::StartScope`]: scrawl_ir::TokenKind::StartScope
//! [`TokenKind::EndScope`]: scrawl_ir::TokenKind::EndScope
//! [`TokenKind::LineDelimiter`]: scrawl_ir::TokenKind::LineDelimiter

mod lex_error;
mod tokenizer;

pub use lex_error::{LexError, LexErrorKind};
use scrawl_ir::Token;
pub use tokenizer::Tokenizer;

/// Tokenize a complete source text.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Tokenizer::new(source).read_all()
}
