use std::fmt;

use super::field::write_fields;
use crate::{CommandTypeIndex, Field};

/// The two forms a command can take.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CommandBody {
    /// `command Name Parameter Return`
    Signature {
        parameter_type: String,
        return_type: String,
    },
    /// `command Name` followed by an indented field list.
    Fields(Vec<Field>),
}

/// Command message type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Command {
    pub index: CommandTypeIndex,
    pub name: String,
    pub body: CommandBody,
}

impl Command {
    pub fn new(index: CommandTypeIndex, name: impl Into<String>, body: CommandBody) -> Self {
        Command {
            index,
            name: name.into(),
            body,
        }
    }

    /// Fields of a fielded command; empty for the signature form.
    pub fn fields(&self) -> &[Field] {
        match &self.body {
            CommandBody::Fields(fields) => fields,
            CommandBody::Signature { .. } => &[],
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[command {} {}", self.index.value(), self.name)?;
        match &self.body {
            CommandBody::Signature {
                parameter_type,
                return_type,
            } => write!(f, " {parameter_type} -> {return_type}]"),
            CommandBody::Fields(fields) => {
                f.write_str("]")?;
                write_fields(f, fields)
            }
        }
    }
}
