//! Low-level character reading for scrawl schema sources.
//!
//! This crate has no `scrawl_*` dependencies. It provides:
//!
//! - [`Position`]: 1-based line/column location of a character
//! - [`RuneReader`]: a single-character look-ahead stream over UTF-8 text
//!   that hides carriage returns and tracks positions
//!
//! The tokenizer (`scrawl_lexer`) is built on top of [`RuneReader`].

mod position;
mod reader;

pub use position::Position;
pub use reader::RuneReader;
