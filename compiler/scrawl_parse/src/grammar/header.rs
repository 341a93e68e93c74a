use scrawl_ir::TokenKind;
use tracing::debug;

use crate::{Error, Found, ParseErrorKind, Parser};

impl Parser<'_> {
    /// `namespace Some.Dotted.Name`
    pub(crate) fn namespace(&mut self) -> Result<(), Error> {
        let mut namespace = self.cursor.expect_symbol("namespace")?;
        loop {
            match self.cursor.advance()? {
                Some(TokenKind::Operator('.')) => {
                    namespace.push('.');
                    namespace.push_str(&self.cursor.expect_symbol("namespace part")?);
                }
                Some(TokenKind::LineDelimiter) | None => break,
                found => {
                    return Err(self.cursor.error(ParseErrorKind::MissingLineDelimiter {
                        found: Found(found),
                    }))
                }
            }
        }
        debug!(%namespace, "namespace");
        self.builder.set_namespace(namespace);
        Ok(())
    }

    /// `name Symbol`
    pub(crate) fn protocol_name(&mut self) -> Result<(), Error> {
        let name = self.cursor.expect_symbol("protocol name")?;
        self.cursor.expect_line_end()?;
        debug!(%name, "protocol name");
        self.builder.set_name(name);
        Ok(())
    }
}
