//! Recursive descent parser for scrawl protocol files.
//!
//! Pulls tokens from the tokenizer one at a time and builds a [`Root`]
//! definition tree. Parsing stops at the first error; there is no recovery.
//!
//! Name resolution is strictly backwards: an archetype item can only name a
//! component declared above it (or a host type from the [`Allowlist`]).
//! Component field types are the exception. They are checked once the whole
//! file has been read, so a component may use a `type` declared further down.

mod allowlist;
mod cursor;
mod error;
mod grammar;
mod keyword;

pub use allowlist::Allowlist;
pub use error::{Error, Found, ParseError, ParseErrorKind};
pub use keyword::Keyword;

use cursor::Cursor;
use scrawl_fmt::content_hash;
use scrawl_ir::{DeclarationKind, Position, Root, RootBuilder, TokenKind};
use tracing::debug;

/// Parse a protocol source into its definition tree.
pub fn parse(source: &str, allowlist: &Allowlist) -> Result<Root, Error> {
    Parser::new(source, allowlist).parse()
}

/// A component field type whose validity depends on the whole file.
struct FieldTypeUse {
    component: String,
    field_type: String,
    position: Position,
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    builder: RootBuilder,
    allowlist: &'a Allowlist,
    field_type_uses: Vec<FieldTypeUse>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str, allowlist: &'a Allowlist) -> Self {
        Parser {
            cursor: Cursor::new(source),
            builder: RootBuilder::new(),
            allowlist,
            field_type_uses: Vec::new(),
        }
    }

    /// Parse the whole source.
    pub fn parse(mut self) -> Result<Root, Error> {
        loop {
            match self.cursor.advance()? {
                None => break,
                Some(TokenKind::LineDelimiter) => {}
                Some(TokenKind::Symbol(symbol)) => self.declaration(&symbol)?,
                found => {
                    return Err(self.cursor.error(ParseErrorKind::UnexpectedToken {
                        found: Found(found),
                    }))
                }
            }
        }
        self.check_component_field_types()?;

        let hash = content_hash(self.cursor.history());
        debug!(
            namespace = self.builder.root().namespace(),
            hash = format_args!("{hash:#010x}"),
            tokens = self.cursor.history().len(),
            "parsed protocol"
        );
        Ok(self.builder.finish(hash))
    }

    /// Every field type used by a component must be host-provided or
    /// declared somewhere in the file. Skipped when the host allows no
    /// component fields at all.
    fn check_component_field_types(&self) -> Result<(), Error> {
        if !self.allowlist.restricts_component_fields() {
            return Ok(());
        }
        let root = self.builder.root();
        for usage in &self.field_type_uses {
            let field_type = usage.field_type.as_str();
            let known = self.allowlist.allows_component_field(field_type)
                || [
                    DeclarationKind::UserType,
                    DeclarationKind::Enum,
                    DeclarationKind::Buffer,
                    DeclarationKind::Component,
                ]
                .into_iter()
                .any(|kind| root.contains(kind, field_type));
            if !known {
                let kind = ParseErrorKind::UnknownFieldType {
                    field_type: usage.field_type.clone(),
                    component: usage.component.clone(),
                };
                return Err(ParseError::new(kind, usage.position).into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
