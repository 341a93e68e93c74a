use scrawl_ir::{MetaData, TokenKind};

use crate::{Error, Found, ParseErrorKind, Parser};

impl Parser<'_> {
    /// Pairs of `key 'value'` up to and including the closing `]`. The
    /// opening `[` has already been read. A repeated key overwrites.
    pub(crate) fn meta_block(&mut self) -> Result<MetaData, Error> {
        let mut meta = MetaData::new();
        loop {
            match self.cursor.advance()? {
                Some(TokenKind::EndMetaData) => return Ok(meta),
                Some(TokenKind::Symbol(key)) => {
                    let value = self.cursor.expect_string("meta value")?;
                    meta.insert(key, value);
                }
                found => {
                    return Err(self.cursor.error(ParseErrorKind::ExpectedMetaKey {
                        found: Found(found),
                    }))
                }
            }
        }
    }

    /// An optional meta block, then the end of the line.
    pub(crate) fn meta_then_line_end(&mut self) -> Result<MetaData, Error> {
        match self.cursor.advance()? {
            Some(TokenKind::StartMetaData) => {
                let meta = self.meta_block()?;
                self.cursor.expect_line_end()?;
                Ok(meta)
            }
            Some(TokenKind::LineDelimiter) | None => Ok(MetaData::new()),
            found => Err(self.cursor.error(ParseErrorKind::MissingLineDelimiter {
                found: Found(found),
            })),
        }
    }

    /// An optional meta block, then the start of an indented body.
    pub(crate) fn meta_then_start_scope(&mut self) -> Result<MetaData, Error> {
        match self.cursor.advance()? {
            Some(TokenKind::StartMetaData) => {
                let meta = self.meta_block()?;
                self.cursor.expect_start_scope()?;
                Ok(meta)
            }
            Some(TokenKind::StartScope) => Ok(MetaData::new()),
            found => Err(self.cursor.error(ParseErrorKind::MissingStartScope {
                found: Found(found),
            })),
        }
    }
}
