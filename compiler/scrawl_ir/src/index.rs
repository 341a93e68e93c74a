//! Declaration indices.
//!
//! Each index is the zero-based position of a declaration among the
//! declarations of its kind, in source order. The storage width is part of
//! the wire format: a protocol may declare at most 256 components,
//! archetypes and commands, and at most 65536 events.

use std::fmt;

macro_rules! define_index {
    ($(#[$attr:meta])* $name:ident($repr:ty), $label:literal) => {
        $(#[$attr])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        #[repr(transparent)]
        pub struct $name($repr);

        impl $name {
            /// Largest number of declarations this index can address.
            pub const CAPACITY: usize = <$repr>::MAX as usize + 1;

            #[inline]
            pub const fn new(value: $repr) -> Self {
                $name(value)
            }

            /// Index for the declaration following `count` existing ones,
            /// or `None` if it would not fit.
            #[inline]
            pub fn from_count(count: usize) -> Option<Self> {
                <$repr>::try_from(count).ok().map($name)
            }

            #[inline]
            pub const fn value(self) -> $repr {
                self.0
            }

            #[inline]
            pub const fn as_usize(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!("[", $label, " {}]"), self.0)
            }
        }
    };
}

define_index!(
    /// Position of a component data type among all components.
    ComponentDataTypeIndex(u8),
    "component-index"
);
define_index!(
    /// Position of an entity archetype among all archetypes.
    EntityIndex(u8),
    "entity-index"
);
define_index!(
    /// Position of an event among all events.
    EventTypeIndex(u16),
    "event-index"
);
define_index!(
    /// Position of a command among all commands.
    CommandTypeIndex(u8),
    "command-index"
);
