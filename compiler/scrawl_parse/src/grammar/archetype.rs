//! Entity archetypes.
//!
//! ```text
//! archetype Avatar
//!   lod 0
//!     Health
//!     WorldPosition [range '0-122']
//!   lod 1
//!     WorldPosition
//! ```

use scrawl_ir::{DeclarationKind, EntityArchetype, EntityArchetypeItem, TokenKind};
use tracing::debug;

use crate::{Error, Found, ParseErrorKind, Parser};

impl Parser<'_> {
    /// `archetype Name [meta]?` with a body of `lod` blocks.
    pub(crate) fn archetype(&mut self) -> Result<(), Error> {
        let name = self.declaration_name(DeclarationKind::Archetype, "archetype name")?;
        let index = self
            .builder
            .next_entity_index()
            .map_err(|err| self.cursor.error(err))?;
        let meta = self.meta_then_start_scope()?;
        let mut archetype = EntityArchetype::new(index, name, meta);

        loop {
            match self.cursor.advance()? {
                Some(TokenKind::Symbol(symbol)) if symbol == "lod" => {
                    let level = self.cursor.expect_number("lod level")?;
                    archetype
                        .check_next_level(level)
                        .map_err(|err| self.cursor.error(err))?;
                    self.cursor.expect_start_scope()?;
                    let items = self.archetype_items()?;
                    archetype
                        .push_lod(level, items)
                        .map_err(|err| self.cursor.error(err))?;
                }
                Some(TokenKind::EndScope) => break,
                found => {
                    return Err(
                        self.cursor.error(ParseErrorKind::ExpectedLod { found: Found(found) })
                    )
                }
            }
        }

        debug!(
            name = %archetype.name,
            index = index.value(),
            id = archetype.id().value(),
            lods = archetype.lods().len(),
            "archetype"
        );
        self.builder
            .add_archetype(archetype)
            .map_err(|err| self.cursor.error(err))?;
        Ok(())
    }

    /// Item lines of one LOD, up to its closing `EndScope`.
    fn archetype_items(&mut self) -> Result<Vec<EntityArchetypeItem>, Error> {
        let mut items = Vec::new();
        loop {
            match self.cursor.advance()? {
                Some(TokenKind::Symbol(type_name)) => items.push(self.archetype_item(type_name)?),
                Some(TokenKind::EndScope) => return Ok(items),
                found => {
                    return Err(self.cursor.error(ParseErrorKind::ExpectedEntryOrEndOfScope {
                        entry: "archetype item",
                        found: Found(found),
                    }))
                }
            }
        }
    }

    /// Resolve `type_name` against the components declared so far, then
    /// against the host's component types.
    fn archetype_item(&mut self, type_name: String) -> Result<EntityArchetypeItem, Error> {
        let component = self
            .builder
            .root()
            .find_component_data_type(&type_name)
            .map(|component| component.index);
        if component.is_none() && !self.allowlist.allows_component_type(&type_name) {
            return Err(self.cursor.error(ParseErrorKind::UnknownComponentType {
                name: type_name,
            }));
        }
        let meta = self.meta_then_line_end()?;
        Ok(match component {
            Some(component) => EntityArchetypeItem::Component { component, meta },
            None => EntityArchetypeItem::FieldType { type_name, meta },
        })
    }
}
