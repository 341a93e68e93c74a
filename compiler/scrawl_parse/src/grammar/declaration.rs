//! Keyword dispatch and the declarations with field bodies.
//!
//! Each declaration checks its name for uniqueness and claims its index
//! straight after reading the name, so those errors point at the name.

use scrawl_ir::{
    Buffer, Command, CommandBody, ComponentDataType, DeclarationKind, Enum, Event, TokenKind,
    UserType,
};
use tracing::{debug, trace};

use crate::{Error, FieldTypeUse, Found, Keyword, ParseErrorKind, Parser};

impl Parser<'_> {
    /// Dispatch on the keyword that opens a top-level declaration.
    pub(crate) fn declaration(&mut self, symbol: &str) -> Result<(), Error> {
        let Some(keyword) = Keyword::from_symbol(symbol) else {
            return Err(self.cursor.error(ParseErrorKind::UnknownKeyword {
                keyword: symbol.to_owned(),
            }));
        };
        trace!(%keyword, "declaration");
        match keyword {
            Keyword::Namespace => self.namespace(),
            Keyword::Name => self.protocol_name(),
            Keyword::Component => self.component(),
            Keyword::Type => self.user_type(),
            Keyword::Archetype => self.archetype(),
            Keyword::Event => self.event(),
            Keyword::Command => self.command(),
            Keyword::Enum => self.enumeration(),
            Keyword::Buffer => self.buffer(),
        }
    }

    /// Read a declaration name that is not yet taken within `kind`.
    pub(crate) fn declaration_name(
        &mut self,
        kind: DeclarationKind,
        what: &'static str,
    ) -> Result<String, Error> {
        let name = self.cursor.expect_symbol(what)?;
        self.builder
            .ensure_unique(kind, &name)
            .map_err(|err| self.cursor.error(err))?;
        Ok(name)
    }

    /// `component Name [meta]?` with a field body.
    fn component(&mut self) -> Result<(), Error> {
        let name = self.declaration_name(DeclarationKind::Component, "component name")?;
        let index = self
            .builder
            .next_component_index()
            .map_err(|err| self.cursor.error(err))?;
        let meta = self.meta_then_start_scope()?;
        let parsed = self.field_list()?;

        self.field_type_uses
            .extend(parsed.iter().map(|parsed| FieldTypeUse {
                component: name.clone(),
                field_type: parsed.field.field_type.clone(),
                position: parsed.type_position,
            }));
        let fields = parsed.into_iter().map(|parsed| parsed.field).collect();

        debug!(%name, index = index.value(), "component");
        let component = ComponentDataType::new(index, name, fields, meta);
        self.builder
            .add_component_data_type(component)
            .map_err(|err| self.cursor.error(err))?;
        Ok(())
    }

    /// `type Name` with a field body.
    fn user_type(&mut self) -> Result<(), Error> {
        let name = self.declaration_name(DeclarationKind::UserType, "type name")?;
        self.cursor.expect_start_scope()?;
        let fields = self.plain_field_list()?;
        debug!(%name, "type");
        self.builder
            .add_user_type(UserType::new(name, fields))
            .map_err(|err| self.cursor.error(err))
    }

    /// `buffer Name` with a field body.
    fn buffer(&mut self) -> Result<(), Error> {
        let name = self.declaration_name(DeclarationKind::Buffer, "buffer name")?;
        self.cursor.expect_start_scope()?;
        let fields = self.plain_field_list()?;
        debug!(%name, "buffer");
        self.builder
            .add_buffer(Buffer::new(name, fields))
            .map_err(|err| self.cursor.error(err))
    }

    /// `event Name [meta]?` with a field body.
    fn event(&mut self) -> Result<(), Error> {
        let name = self.declaration_name(DeclarationKind::Event, "event name")?;
        let index = self
            .builder
            .next_event_index()
            .map_err(|err| self.cursor.error(err))?;
        let meta = self.meta_then_start_scope()?;
        let fields = self.plain_field_list()?;
        debug!(%name, index = index.value(), "event");
        self.builder
            .add_event(Event::new(index, name, fields, meta))
            .map_err(|err| self.cursor.error(err))?;
        Ok(())
    }

    /// `command Name Parameter Return`, or `command Name` with a field body.
    fn command(&mut self) -> Result<(), Error> {
        let name = self.declaration_name(DeclarationKind::Command, "command name")?;
        let index = self
            .builder
            .next_command_index()
            .map_err(|err| self.cursor.error(err))?;
        let body = match self.cursor.advance()? {
            Some(TokenKind::StartScope) => CommandBody::Fields(self.plain_field_list()?),
            Some(TokenKind::Symbol(parameter_type)) => {
                let return_type = self.cursor.expect_symbol("command return type")?;
                self.cursor.expect_line_end()?;
                CommandBody::Signature {
                    parameter_type,
                    return_type,
                }
            }
            found => {
                return Err(self.cursor.error(ParseErrorKind::MissingStartScope {
                    found: Found(found),
                }))
            }
        };
        debug!(%name, index = index.value(), "command");
        self.builder
            .add_command(Command::new(index, name, body))
            .map_err(|err| self.cursor.error(err))?;
        Ok(())
    }

    /// `enum Name` with `Constant value [meta]?` lines.
    fn enumeration(&mut self) -> Result<(), Error> {
        let name = self.declaration_name(DeclarationKind::Enum, "enum name")?;
        self.cursor.expect_start_scope()?;
        let mut enumeration = Enum::new(name);
        loop {
            match self.cursor.advance()? {
                Some(TokenKind::Symbol(constant)) => {
                    let value = self.cursor.expect_number("enum value")?;
                    let meta = self.meta_then_line_end()?;
                    enumeration.push_constant(constant, value, meta);
                }
                Some(TokenKind::EndScope) => break,
                found => {
                    return Err(self.cursor.error(ParseErrorKind::ExpectedEntryOrEndOfScope {
                        entry: "enum constant",
                        found: Found(found),
                    }))
                }
            }
        }
        debug!(
            name = %enumeration.name,
            constants = enumeration.constants.len(),
            "enum"
        );
        self.builder
            .add_enum(enumeration)
            .map_err(|err| self.cursor.error(err))
    }
}
