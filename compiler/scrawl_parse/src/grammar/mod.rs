//! Grammar productions.
//!
//! Each module extends [`Parser`](crate::Parser) with the methods for one
//! group of productions:
//!
//! - `declaration`: keyword dispatch and the top-level declarations
//! - `archetype`: archetypes, their LODs and item resolution
//! - `field`: indented field lists
//! - `meta`: `[key 'value', ...]` blocks and line endings
//! - `header`: `namespace` and `name`
//!
//! Productions consume exactly the tokens they describe, including the
//! `EndScope` that closes their body.

mod archetype;
mod declaration;
mod field;
mod header;
mod meta;
