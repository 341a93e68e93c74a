use scrawl_ir::{Field, Position, TokenKind};

use crate::{Error, Found, ParseErrorKind, Parser};

/// A field together with where its type was written.
pub(crate) struct ParsedField {
    pub field: Field,
    pub type_position: Position,
}

impl Parser<'_> {
    /// `name type [meta]?` lines up to the closing `EndScope`.
    pub(crate) fn field_list(&mut self) -> Result<Vec<ParsedField>, Error> {
        let mut fields = Vec::new();
        loop {
            match self.cursor.advance()? {
                Some(TokenKind::Symbol(name)) => {
                    let field_type = self.cursor.expect_symbol("field type")?;
                    let type_position = self.cursor.last_position();
                    let meta = self.meta_then_line_end()?;
                    fields.push(ParsedField {
                        field: Field::new(fields.len(), name, field_type, meta),
                        type_position,
                    });
                }
                Some(TokenKind::EndScope) => return Ok(fields),
                found => {
                    return Err(self.cursor.error(ParseErrorKind::ExpectedEntryOrEndOfScope {
                        entry: "field name",
                        found: Found(found),
                    }))
                }
            }
        }
    }

    /// A field list whose type positions are not needed.
    pub(crate) fn plain_field_list(&mut self) -> Result<Vec<Field>, Error> {
        Ok(self
            .field_list()?
            .into_iter()
            .map(|parsed| parsed.field)
            .collect())
    }
}
