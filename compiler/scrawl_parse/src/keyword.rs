//! Top-level declaration keywords.

use std::fmt;

/// A symbol that starts a top-level declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Keyword {
    Namespace,
    Name,
    Component,
    Type,
    Archetype,
    Event,
    Command,
    Enum,
    Buffer,
}

impl Keyword {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol {
            "namespace" => Keyword::Namespace,
            "name" => Keyword::Name,
            "component" => Keyword::Component,
            "type" => Keyword::Type,
            "archetype" => Keyword::Archetype,
            "event" => Keyword::Event,
            "command" => Keyword::Command,
            "enum" => Keyword::Enum,
            "buffer" => Keyword::Buffer,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Namespace => "namespace",
            Keyword::Name => "name",
            Keyword::Component => "component",
            Keyword::Type => "type",
            Keyword::Archetype => "archetype",
            Keyword::Event => "event",
            Keyword::Command => "command",
            Keyword::Enum => "enum",
            Keyword::Buffer => "buffer",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;
