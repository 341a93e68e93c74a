//! Source positions.

use std::fmt;

/// Location of a character in the source text.
///
/// Both fields are 1-based. Carriage returns are invisible to positions:
/// they never advance the column.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// The first character of a source.
    pub const START: Position = Position { line: 1, column: 1 };

    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    /// First column of the following line.
    #[inline]
    #[must_use]
    pub const fn next_line(self) -> Self {
        Position {
            line: self.line + 1,
            column: 1,
        }
    }

    /// Next column on the same line.
    #[inline]
    #[must_use]
    pub const fn next_column(self) -> Self {
        Position {
            line: self.line,
            column: self.column + 1,
        }
    }

    /// Position after reading `ch` at `self`.
    #[inline]
    #[must_use]
    pub const fn advanced_by(self, ch: char) -> Self {
        if ch == '\n' {
            self.next_line()
        } else {
            self.next_column()
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]", self.line, self.column)
    }
}

#[cfg(test)]
mod tests;
