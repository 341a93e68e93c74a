//! Definition tree produced by the parser.
//!
//! # Module Structure
//!
//! - `field`: named, typed fields shared by most declaration kinds
//! - `types`: user types, buffers and enums
//! - `component`: component data types
//! - `archetype`: entity archetypes, their LODs and items
//! - `event` / `command`: messages
//! - `root`: the [`Root`] container and its [`RootBuilder`]

mod archetype;
mod command;
mod component;
mod error;
mod event;
mod field;
mod root;
mod types;

pub use archetype::{EntityArchetype, EntityArchetypeItem, EntityArchetypeLod, LodError};
pub use command::{Command, CommandBody};
pub use component::ComponentDataType;
pub use error::{DeclarationKind, DefinitionError};
pub use event::Event;
pub use field::Field;
pub use root::{Root, RootBuilder};
pub use types::{Buffer, Enum, EnumConstant, UserType};
