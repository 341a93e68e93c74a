use std::fmt;

/// Coarse classification shared by every scrawl error type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCategory {
    /// The text could not be split into tokens.
    Lexical,
    /// The tokens do not follow the grammar.
    Syntactic,
    /// The declarations are well-formed but inconsistent.
    Semantic,
}

impl ErrorCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCategory::Lexical => "lexical",
            ErrorCategory::Syntactic => "syntactic",
            ErrorCategory::Semantic => "semantic",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
