//! Formatting Context
//!
//! Tracks line, column and indentation while writing to an [`Emitter`].

use crate::emitter::{Emitter, StringEmitter};

/// Spaces per indentation level. Fixed by the language.
pub const INDENT_WIDTH: usize = 2;

/// Formatting state wrapped around an emitter.
///
/// Columns are 0-based and count characters, so column 0 means the cursor
/// is at the start of a line.
pub struct FormatContext<E: Emitter = StringEmitter> {
    emitter: E,
    line: usize,
    column: usize,
    indent_level: usize,
}

impl FormatContext<StringEmitter> {
    pub fn new() -> Self {
        Self::with_emitter(StringEmitter::new())
    }
}

impl Default for FormatContext<StringEmitter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Emitter> FormatContext<E> {
    pub fn with_emitter(emitter: E) -> Self {
        FormatContext {
            emitter,
            line: 0,
            column: 0,
            indent_level: 0,
        }
    }

    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    #[inline]
    pub fn at_line_start(&self) -> bool {
        self.column == 0
    }

    /// Emit a word: indented at line start, space-separated otherwise.
    pub fn emit_word(&mut self, text: &str) {
        if self.at_line_start() {
            let spaces = self.indent_level * INDENT_WIDTH;
            self.emitter.emit_indent(spaces);
            self.column += spaces;
        } else {
            self.emitter.emit_space();
            self.column += 1;
        }
        self.emit(text);
    }

    /// Emit text verbatim.
    pub fn emit(&mut self, text: &str) {
        self.emitter.emit(text);
        self.column += text.chars().count();
    }

    /// Emit a newline unconditionally.
    pub fn newline(&mut self) {
        self.emitter.emit_newline();
        self.line += 1;
        self.column = 0;
    }

    /// Emit a newline unless the cursor is already at the start of a line.
    pub fn end_line(&mut self) {
        if !self.at_line_start() {
            self.newline();
        }
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indentation. Unbalanced dedents stop at zero.
    pub fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    /// Consume the context and return the emitter.
    pub fn finish(self) -> E {
        self.emitter
    }
}
