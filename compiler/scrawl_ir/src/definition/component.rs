use std::fmt;

use super::field::write_fields;
use crate::{ComponentDataTypeIndex, Field, MetaData};

/// Component data type: the unit archetypes are composed of.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ComponentDataType {
    pub index: ComponentDataTypeIndex,
    pub name: String,
    pub fields: Vec<Field>,
    pub meta: MetaData,
}

impl ComponentDataType {
    pub fn new(
        index: ComponentDataTypeIndex,
        name: impl Into<String>,
        fields: Vec<Field>,
        meta: MetaData,
    ) -> Self {
        ComponentDataType {
            index,
            name: name.into(),
            fields,
            meta,
        }
    }
}

impl fmt::Display for ComponentDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[component {} {}]", self.index.value(), self.name)?;
        write_fields(f, &self.fields)
    }
}
