//! The indentation-sensitive tokenizer.
//!
//! # Scopes and delimiters
//!
//! Each indentation level is two spaces. When a newline is followed by a
//! deeper line (exactly one level deeper), the tokenizer emits a
//! `StartScope`; when it is followed by a shallower line it emits one
//! `EndScope` per level dropped. Scope tokens are emitted one per call, from
//! the difference between `indentation` (levels already announced) and
//! `target_indentation` (levels of the current line).
//!
//! A `LineDelimiter` ends a logical line. It is only emitted when the line
//! did not already end with a delimiter-like token (`StartScope` or a
//! previous `LineDelimiter`), which is what `last_token_was_delimiter`
//! tracks. Comments leave that flag untouched.
//!
//! A line holding only a comment has no say in the structure: its
//! indentation is not measured, and the delimiter or scope change it would
//! have caused is decided by the next line with code instead.

use scrawl_ir::{Position, Token, TokenKind};
use scrawl_lexer_core::RuneReader;
use tracing::trace;

use crate::LexError;

/// What a newline turned out to start.
enum LineStart {
    /// Only spaces before the next newline.
    Blank,
    /// Only a comment, at any indentation.
    Comment,
    /// A line with content at this many levels. End of input counts as 0.
    Indented(usize),
}

/// Streaming tokenizer over a source text.
pub struct Tokenizer<'a> {
    reader: RuneReader<'a>,
    /// Scope levels already announced with `StartScope`/`EndScope`.
    indentation: usize,
    /// Scope level of the line being read.
    target_indentation: usize,
    last_token_was_delimiter: bool,
}

#[inline]
fn is_symbol_start(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

#[inline]
fn is_symbol_continuation(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '-'
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a str) -> Self {
        Tokenizer {
            reader: RuneReader::new(source),
            indentation: 0,
            target_indentation: 0,
            last_token_was_delimiter: true,
        }
    }

    /// Position of the next unread character.
    pub fn position(&self) -> Position {
        self.reader.position()
    }

    /// Read the next token. `Ok(None)` means end of input.
    pub fn read_next(&mut self) -> Result<Option<Token>, LexError> {
        let token = self.scan()?;
        if let Some(token) = &token {
            trace!(
                line = token.position.line,
                column = token.position.column,
                kind = %token.kind,
                "token"
            );
        }
        Ok(token)
    }

    /// Read tokens until end of input.
    pub fn read_all(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.read_next()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn scan(&mut self) -> Result<Option<Token>, LexError> {
        loop {
            if let Some(token) = self.pending_scope_change() {
                return Ok(Some(token));
            }

            let position = self.reader.position();
            let ch = self.reader.read();
            let kind = match ch {
                '\n' => {
                    if let Some(token) = self.newline(position)? {
                        return Ok(Some(token));
                    }
                    continue;
                }
                ' ' | '\t' | ',' => continue,
                '\0' if self.reader.is_eof() => {
                    if self.indentation == 0 {
                        return Ok(None);
                    }
                    self.target_indentation = 0;
                    if !self.last_token_was_delimiter {
                        return Ok(Some(self.line_delimiter(position)));
                    }
                    continue;
                }
                '#' => {
                    // The newline is left for the next call.
                    let text = self.reader.take_line();
                    return Ok(Some(Token::new(
                        TokenKind::Comment(text.trim().to_owned()),
                        position,
                    )));
                }
                c if is_symbol_start(c) => self.symbol(c),
                c if c.is_ascii_digit() || c == '-' => self.number(c, position)?,
                '\'' => self.string(b'\'', position)?,
                '"' => self.string(b'"', position)?,
                '[' => TokenKind::StartMetaData,
                ']' => TokenKind::EndMetaData,
                '.' => TokenKind::Operator('.'),
                other => return Err(LexError::unknown_rune(position, other)),
            };
            self.last_token_was_delimiter = false;
            return Ok(Some(Token::new(kind, position)));
        }
    }

    /// One `StartScope`/`EndScope` if the announced level lags behind.
    fn pending_scope_change(&mut self) -> Option<Token> {
        let position = self.reader.position();
        if self.indentation < self.target_indentation {
            self.indentation += 1;
            self.last_token_was_delimiter = true;
            Some(Token::new(TokenKind::StartScope, position))
        } else if self.indentation > self.target_indentation {
            self.indentation -= 1;
            Some(Token::new(TokenKind::EndScope, position))
        } else {
            None
        }
    }

    /// Handle a newline read at `position`. Returns a `LineDelimiter` if the
    /// next line does not open a deeper scope.
    fn newline(&mut self, position: Position) -> Result<Option<Token>, LexError> {
        let level = match self.line_start()? {
            LineStart::Blank | LineStart::Comment => return Ok(None),
            LineStart::Indented(level) => level,
        };
        if level > self.indentation + 1 {
            return Err(LexError::too_much_indentation(
                self.reader.position(),
                self.indentation + 1,
                level,
            ));
        }
        self.target_indentation = level;
        if self.indentation >= level && !self.last_token_was_delimiter {
            return Ok(Some(self.line_delimiter(position)));
        }
        Ok(None)
    }

    /// Count the leading spaces of the line after a newline.
    fn line_start(&mut self) -> Result<LineStart, LexError> {
        let line_position = self.reader.position();
        let mut spaces = 0;
        loop {
            let position = self.reader.position();
            match self.reader.read() {
                ' ' => spaces += 1,
                '\t' => return Err(LexError::illegal_indentation(position, '\t')),
                '\n' => {
                    self.reader.unread();
                    return Ok(LineStart::Blank);
                }
                '\0' if self.reader.is_eof() => return Ok(LineStart::Indented(0)),
                '#' => {
                    self.reader.unread();
                    return Ok(LineStart::Comment);
                }
                _ => {
                    self.reader.unread();
                    break;
                }
            }
        }
        if spaces % 2 != 0 {
            return Err(LexError::odd_indentation(line_position, spaces));
        }
        Ok(LineStart::Indented(spaces / 2))
    }

    fn line_delimiter(&mut self, position: Position) -> Token {
        self.last_token_was_delimiter = true;
        Token::new(TokenKind::LineDelimiter, position)
    }

    fn symbol(&mut self, first: char) -> TokenKind {
        let mut text = String::from(first);
        loop {
            let ch = self.reader.read();
            if !is_symbol_continuation(ch) {
                self.reader.unread();
                break;
            }
            text.push(ch);
        }
        TokenKind::Symbol(text)
    }

    fn number(&mut self, first: char, position: Position) -> Result<TokenKind, LexError> {
        let mut text = String::from(first);
        loop {
            let ch = self.reader.read();
            if !ch.is_ascii_digit() {
                self.reader.unread();
                break;
            }
            text.push(ch);
        }
        if text == "-" {
            return Err(LexError::missing_digits(position));
        }
        text.parse::<i64>()
            .map(TokenKind::Number)
            .map_err(|_| LexError::number_out_of_range(position, text))
    }

    fn string(&mut self, delimiter: u8, position: Position) -> Result<TokenKind, LexError> {
        match self.reader.take_until(delimiter) {
            Some(text) => Ok(TokenKind::String(text.into_owned())),
            None => Err(LexError::unterminated_string(position)),
        }
    }
}

#[cfg(test)]
mod tests;
