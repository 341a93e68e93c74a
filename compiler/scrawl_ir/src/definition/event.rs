use std::fmt;

use super::field::write_fields;
use crate::{EventTypeId, EventTypeIndex, Field, MetaData};

/// Event message type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Event {
    pub index: EventTypeIndex,
    pub name: String,
    pub fields: Vec<Field>,
    pub meta: MetaData,
    id: EventTypeId,
}

impl Event {
    pub fn new(
        index: EventTypeIndex,
        name: impl Into<String>,
        fields: Vec<Field>,
        meta: MetaData,
    ) -> Self {
        let name = name.into();
        Event {
            index,
            id: EventTypeId::from_name(&name),
            name,
            fields,
            meta,
        }
    }

    /// Wire identifier, derived from the name.
    #[inline]
    pub fn id(&self) -> EventTypeId {
        self.id
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[event {} {} {}]",
            self.index.value(),
            self.id.value(),
            self.name
        )?;
        write_fields(f, &self.fields)
    }
}
