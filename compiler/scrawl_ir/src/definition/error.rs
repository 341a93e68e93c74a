use std::fmt;

use thiserror::Error;

use crate::ErrorCategory;

/// The kinds of top-level declaration. Names are unique per kind.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DeclarationKind {
    Component,
    UserType,
    Archetype,
    Event,
    Command,
    Enum,
    Buffer,
}

impl DeclarationKind {
    /// The source keyword introducing this kind.
    pub fn keyword(self) -> &'static str {
        match self {
            DeclarationKind::Component => "component",
            DeclarationKind::UserType => "type",
            DeclarationKind::Archetype => "archetype",
            DeclarationKind::Event => "event",
            DeclarationKind::Command => "command",
            DeclarationKind::Enum => "enum",
            DeclarationKind::Buffer => "buffer",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A declaration that cannot be added to the tree.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum DefinitionError {
    #[error("duplicate {kind} name:{name}")]
    DuplicateName { kind: DeclarationKind, name: String },
    #[error("too many {kind} declarations (at most {capacity})")]
    IndexOverflow {
        kind: DeclarationKind,
        capacity: usize,
    },
}

impl DefinitionError {
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Semantic
    }
}
