use std::fmt;

use super::field::write_fields;
use crate::{Field, MetaData};

/// Plain record type usable as a field type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UserType {
    pub name: String,
    pub fields: Vec<Field>,
}

impl UserType {
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        UserType {
            name: name.into(),
            fields,
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[type {}]", self.name)?;
        write_fields(f, &self.fields)
    }
}

/// Record type carried as a bulk buffer.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Buffer {
    pub name: String,
    pub fields: Vec<Field>,
}

impl Buffer {
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Buffer {
            name: name.into(),
            fields,
        }
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[buffer {}]", self.name)?;
        write_fields(f, &self.fields)
    }
}

/// One named value of an [`Enum`].
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EnumConstant {
    /// Zero-based position within the enum.
    pub index: usize,
    pub name: String,
    pub value: i64,
    pub meta: MetaData,
}

impl fmt::Display for EnumConstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[constant {} {} = {}]", self.index, self.name, self.value)
    }
}

/// Named integer constants.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Enum {
    pub name: String,
    pub constants: Vec<EnumConstant>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Enum {
            name: name.into(),
            constants: Vec::new(),
        }
    }

    /// Append a constant; its index is its position.
    pub fn push_constant(&mut self, name: impl Into<String>, value: i64, meta: MetaData) {
        let index = self.constants.len();
        self.constants.push(EnumConstant {
            index,
            name: name.into(),
            value,
            meta,
        });
    }

    pub fn find_constant(&self, name: &str) -> Option<&EnumConstant> {
        self.constants.iter().find(|constant| constant.name == name)
    }
}

impl fmt::Display for Enum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[enum {}]", self.name)?;
        for constant in &self.constants {
            write!(f, "\n  {constant}")?;
        }
        Ok(())
    }
}
