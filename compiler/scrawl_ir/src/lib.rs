//! Scrawl IR - tokens and the definition tree.
//!
//! This crate contains the data structures shared by the scrawl front end:
//! - [`Token`] and [`TokenKind`] produced by the tokenizer
//! - 16-bit type IDs derived from declaration names ([`EntityArchetypeId`], [`EventTypeId`])
//! - [`MetaData`] blocks attached to fields, components and archetype items
//! - the definition tree rooted at [`Root`], built through [`RootBuilder`]
//!
//! # Design
//!
//! - **Arena + index**: archetype items refer to component data types by
//!   [`ComponentDataTypeIndex`] into [`Root::component_data_types`], never by pointer.
//! - **Closed sums**: tokens, archetype items and command bodies are enums,
//!   so every consumer matches them exhaustively.
//! - **Build, then freeze**: [`RootBuilder`] enforces naming and index
//!   invariants while declarations are added; [`Root`] only hands out shared
//!   references.

mod category;
mod definition;
mod index;
mod meta;
mod token;
mod type_id;

pub use category::ErrorCategory;
pub use definition::{
    Buffer, Command, CommandBody, ComponentDataType, DeclarationKind, DefinitionError,
    EntityArchetype, EntityArchetypeItem, EntityArchetypeLod, Enum, EnumConstant, Event, Field,
    LodError, Root, RootBuilder, UserType,
};
pub use index::{CommandTypeIndex, ComponentDataTypeIndex, EntityIndex, EventTypeIndex};
pub use meta::{MetaData, MetaDataError};
pub use scrawl_lexer_core::Position;
pub use token::{Token, TokenKind};
pub use type_id::{fnv1a_32, type_hash, EntityArchetypeId, EventTypeId};
