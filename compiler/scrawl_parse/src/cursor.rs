//! Token cursor over the tokenizer.
//!
//! Pulls tokens on demand, hides comments from the grammar, and keeps every
//! token it read (comments included) so the content hash can be computed
//! from the exact stream that was parsed.

use scrawl_ir::{Position, Token, TokenKind};
use scrawl_lexer::Tokenizer;
use tracing::trace;

use crate::error::{Error, Found, ParseError, ParseErrorKind};

pub struct Cursor<'a> {
    tokenizer: Tokenizer<'a>,
    history: Vec<Token>,
    /// Position of the last non-comment token read.
    last_position: Position,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Cursor {
            tokenizer: Tokenizer::new(source),
            history: Vec::new(),
            last_position: Position::START,
        }
    }

    /// Position of the last token handed to the grammar, or `[1:1]`.
    #[inline]
    pub fn last_position(&self) -> Position {
        self.last_position
    }

    /// Every token read so far, comments included.
    pub fn history(&self) -> &[Token] {
        &self.history
    }

    /// Next non-comment token, or `None` at end of input.
    pub fn advance(&mut self) -> Result<Option<TokenKind>, Error> {
        loop {
            let Some(token) = self.tokenizer.read_next()? else {
                return Ok(None);
            };
            let kind = token.kind.clone();
            let position = token.position;
            self.history.push(token);
            if kind.is_comment() {
                continue;
            }
            trace!(
                pos = self.history.len() - 1,
                kind = %kind.display_name(),
                line = position.line,
                column = position.column,
                "advance"
            );
            self.last_position = position;
            return Ok(Some(kind));
        }
    }

    /// Build an error at the last token position.
    #[cold]
    pub fn error(&self, kind: impl Into<ParseErrorKind>) -> Error {
        ParseError::new(kind, self.last_position).into()
    }

    pub fn expect_symbol(&mut self, what: &'static str) -> Result<String, Error> {
        match self.advance()? {
            Some(TokenKind::Symbol(text)) => Ok(text),
            found => Err(self.error(ParseErrorKind::ExpectedSymbol {
                what,
                found: Found(found),
            })),
        }
    }

    pub fn expect_string(&mut self, what: &'static str) -> Result<String, Error> {
        match self.advance()? {
            Some(TokenKind::String(text)) => Ok(text),
            found => Err(self.error(ParseErrorKind::ExpectedString {
                what,
                found: Found(found),
            })),
        }
    }

    pub fn expect_number(&mut self, what: &'static str) -> Result<i64, Error> {
        match self.advance()? {
            Some(TokenKind::Number(value)) => Ok(value),
            found => Err(self.error(ParseErrorKind::ExpectedNumber {
                what,
                found: Found(found),
            })),
        }
    }

    pub fn expect_start_scope(&mut self) -> Result<(), Error> {
        match self.advance()? {
            Some(TokenKind::StartScope) => Ok(()),
            found => Err(self.error(ParseErrorKind::MissingStartScope { found: Found(found) })),
        }
    }

    /// A line delimiter, or end of input.
    pub fn expect_line_end(&mut self) -> Result<(), Error> {
        match self.advance()? {
            Some(TokenKind::LineDelimiter) | None => Ok(()),
            found => Err(self.error(ParseErrorKind::MissingLineDelimiter { found: Found(found) })),
        }
    }
}
