//! Single-character look-ahead reader.
//!
//! The reader hands out one `char` at a time and can put back the last one.
//! Carriage returns are skipped on every path, so CRLF sources read exactly
//! like LF sources and positions never count a `\r`.
//!
//! End of input is reported as `'\0'`. A NUL character in the text also
//! reads as `'\0'`; use [`RuneReader::is_eof`] right after the read to tell
//! the two apart.

use std::borrow::Cow;

use crate::Position;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Reader state before the most recently returned character.
#[derive(Copy, Clone, Debug)]
struct Checkpoint {
    offset: usize,
    position: Position,
}

/// Single-character look-ahead stream over UTF-8 text.
///
/// # Pushback
///
/// Only one level of [`unread`](RuneReader::unread) is supported. Unreading
/// after end of input, or twice in a row, does nothing.
#[derive(Clone, Debug)]
pub struct RuneReader<'a> {
    source: &'a str,
    /// Byte offset of the next character.
    offset: usize,
    /// Position of the next character.
    position: Position,
    pushback: Option<Checkpoint>,
    /// The last `read` ran out of input.
    at_end: bool,
}

impl<'a> RuneReader<'a> {
    /// Create a reader at the start of `source`, skipping a leading byte-order mark.
    pub fn new(source: &'a str) -> Self {
        let offset = if source.starts_with(BYTE_ORDER_MARK) {
            BYTE_ORDER_MARK.len_utf8()
        } else {
            0
        };
        RuneReader {
            source,
            offset,
            position: Position::START,
            pushback: None,
            at_end: false,
        }
    }

    /// Read the next character, or `'\0'` at end of input.
    pub fn read(&mut self) -> char {
        loop {
            let Some(ch) = self.source[self.offset..].chars().next() else {
                self.pushback = None;
                self.at_end = true;
                return '\0';
            };
            if ch == '\r' {
                self.offset += 1;
                continue;
            }
            self.pushback = Some(Checkpoint {
                offset: self.offset,
                position: self.position,
            });
            self.offset += ch.len_utf8();
            self.position = self.position.advanced_by(ch);
            self.at_end = false;
            return ch;
        }
    }

    /// Put back the character returned by the last [`read`](Self::read).
    pub fn unread(&mut self) {
        if let Some(checkpoint) = self.pushback.take() {
            self.offset = checkpoint.offset;
            self.position = checkpoint.position;
        }
    }

    /// Position of the next character to be read.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns `true` when the last [`read`](Self::read) found no input
    /// left, as opposed to reading a NUL character.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.at_end
    }

    /// Consume the rest of the current line, leaving the newline unread.
    ///
    /// Carriage returns are removed from the returned text.
    pub fn take_line(&mut self) -> Cow<'a, str> {
        let remaining = &self.source[self.offset..];
        let len = memchr::memchr(b'\n', remaining.as_bytes()).unwrap_or(remaining.len());
        let text = &remaining[..len];
        self.consume(text);
        strip_carriage_returns(text)
    }

    /// Consume characters up to and including the ASCII `delimiter`.
    ///
    /// Returns the text between the current position and the delimiter, or
    /// `None` if input ends first. On `None` the whole remainder is consumed.
    pub fn take_until(&mut self, delimiter: u8) -> Option<Cow<'a, str>> {
        debug_assert!(delimiter.is_ascii(), "delimiter must be ASCII");
        let remaining = &self.source[self.offset..];
        match memchr::memchr(delimiter, remaining.as_bytes()) {
            Some(len) => {
                let text = &remaining[..len];
                self.consume(text);
                // The delimiter itself.
                self.offset += 1;
                self.position = self.position.next_column();
                Some(strip_carriage_returns(text))
            }
            None => {
                self.consume(remaining);
                None
            }
        }
    }

    /// Advance past `text`, which must start at the current offset.
    fn consume(&mut self, text: &str) {
        self.offset += text.len();
        self.position = text
            .chars()
            .filter(|&ch| ch != '\r')
            .fold(self.position, Position::advanced_by);
        self.pushback = None;
    }
}

fn strip_carriage_returns(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace('\r', ""))
    } else {
        Cow::Borrowed(text)
    }
}
