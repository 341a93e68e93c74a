//! Name-derived 16-bit type IDs.
//!
//! Entity archetypes and events are identified on the wire by a 16-bit value
//! computed from their name: FNV-1a (32-bit) over the UTF-8 bytes, with the
//! high and low halves folded together by XOR. The derivation is persisted by
//! downstream code generators, so it must never change.

use std::fmt;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1a hash.
pub const fn fnv1a_32(bytes: &[u8]) -> u32 {
    let mut hash = FNV_OFFSET_BASIS;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u32;
        hash = hash.wrapping_mul(FNV_PRIME);
        i += 1;
    }
    hash
}

/// Fold the FNV-1a hash of `name` into 16 bits.
#[allow(
    clippy::cast_possible_truncation,
    reason = "both operands are masked to 16 bits"
)]
pub const fn type_hash(name: &str) -> u16 {
    let hash = fnv1a_32(name.as_bytes());
    ((hash >> 16) ^ (hash & 0xffff)) as u16
}

macro_rules! define_type_id {
    ($(#[$attr:meta])* $name:ident, $label:literal) => {
        $(#[$attr])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        #[repr(transparent)]
        pub struct $name(u16);

        impl $name {
            /// Derive the ID from a declaration name.
            #[inline]
            pub const fn from_name(name: &str) -> Self {
                $name(type_hash(name))
            }

            #[inline]
            pub const fn value(self) -> u16 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!("[", $label, " {}]"), self.0)
            }
        }
    };
}

define_type_id!(
    /// Wire identifier of an entity archetype.
    EntityArchetypeId,
    "entity-archetype-id"
);
define_type_id!(
    /// Wire identifier of an event type.
    EventTypeId,
    "event-type-id"
);
