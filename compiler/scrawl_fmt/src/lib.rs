//! Scrawl canonical formatter.
//!
//! Re-emits a token stream in canonical layout: two spaces per scope level,
//! one space between tokens on a line, one line per `LineDelimiter`. Because
//! the layout is a pure function of the tokens, formatting is idempotent:
//! tokenizing the output yields the same tokens, and formatting those yields
//! the same bytes.
//!
//! The protocol content hash is the FNV-1a hash of the canonical form with
//! comments discarded, so reformatting or re-commenting a file never
//! changes it.
//!
//! # Modules
//!
//! - [`emitter`]: output abstraction
//! - [`context`]: line, column and indentation tracking
//! - [`canonical`]: token rendering

pub mod canonical;
pub mod context;
pub mod emitter;
mod flags;

pub use canonical::{canonicalise, content_hash, write_tokens};
pub use context::{FormatContext, INDENT_WIDTH};
pub use emitter::{Emitter, StringEmitter};
pub use flags::BeautifyFlags;
