use std::fmt;

use crate::MetaData;

/// A named field with a type name.
///
/// The type name is kept as written. Whether it resolves to anything is a
/// question for the parser's allowlist, not for the IR.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Field {
    /// Zero-based position within the owning declaration.
    pub index: usize,
    pub name: String,
    pub field_type: String,
    pub meta: MetaData,
}

impl Field {
    pub fn new(
        index: usize,
        name: impl Into<String>,
        field_type: impl Into<String>,
        meta: MetaData,
    ) -> Self {
        Field {
            index,
            name: name.into(),
            field_type: field_type.into(),
            meta,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[field {} {} {}", self.index, self.name, self.field_type)?;
        if !self.meta.is_empty() {
            write!(f, " {}", self.meta)?;
        }
        f.write_str("]")
    }
}

/// Write `fields` one per line, indented.
pub(crate) fn write_fields(f: &mut fmt::Formatter<'_>, fields: &[Field]) -> fmt::Result {
    for field in fields {
        write!(f, "\n  {field}")?;
    }
    Ok(())
}
