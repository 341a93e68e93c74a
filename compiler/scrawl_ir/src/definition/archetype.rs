use std::fmt;

use thiserror::Error;

use crate::{
    ComponentDataTypeIndex, EntityArchetypeId, EntityIndex, ErrorCategory, MetaData, Root,
};

/// A LOD level that does not continue the `0, 1, 2, ...` sequence.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum LodError {
    #[error("lod level {level} is already defined")]
    Duplicate { level: i64 },
    #[error("lod levels must be in order: expected {expected}, got {level}")]
    OutOfOrder { expected: usize, level: i64 },
}

impl LodError {
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Semantic
    }
}

/// One entry of a LOD.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EntityArchetypeItem {
    /// A component data type declared in the same protocol.
    Component {
        component: ComponentDataTypeIndex,
        meta: MetaData,
    },
    /// A host-provided type from the allowed component types.
    FieldType { type_name: String, meta: MetaData },
}

impl EntityArchetypeItem {
    pub fn meta(&self) -> &MetaData {
        match self {
            EntityArchetypeItem::Component { meta, .. }
            | EntityArchetypeItem::FieldType { meta, .. } => meta,
        }
    }

    /// The referenced type's name. `None` only if a component index does
    /// not belong to `root`.
    pub fn name<'r>(&'r self, root: &'r Root) -> Option<&'r str> {
        match self {
            EntityArchetypeItem::Component { component, .. } => root
                .component_data_type(*component)
                .map(|c| c.name.as_str()),
            EntityArchetypeItem::FieldType { type_name, .. } => Some(type_name),
        }
    }
}

impl fmt::Display for EntityArchetypeItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityArchetypeItem::Component { component, .. } => {
                write!(f, "[component #{}]", component.value())
            }
            EntityArchetypeItem::FieldType { type_name, .. } => {
                write!(f, "[field-type {type_name}]")
            }
        }
    }
}

/// Items of one level of detail.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EntityArchetypeLod {
    pub level: usize,
    pub items: Vec<EntityArchetypeItem>,
}

/// Entity archetype: components grouped by level of detail.
///
/// LODs can only be appended through [`EntityArchetype::push_lod`], which
/// keeps `lods()[i].level == i`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EntityArchetype {
    pub index: EntityIndex,
    pub name: String,
    pub meta: MetaData,
    id: EntityArchetypeId,
    lods: Vec<EntityArchetypeLod>,
}

impl EntityArchetype {
    pub fn new(index: EntityIndex, name: impl Into<String>, meta: MetaData) -> Self {
        let name = name.into();
        EntityArchetype {
            index,
            id: EntityArchetypeId::from_name(&name),
            name,
            meta,
            lods: Vec::new(),
        }
    }

    /// Wire identifier, derived from the name.
    #[inline]
    pub fn id(&self) -> EntityArchetypeId {
        self.id
    }

    pub fn lods(&self) -> &[EntityArchetypeLod] {
        &self.lods
    }

    pub fn lod(&self, level: usize) -> Option<&EntityArchetypeLod> {
        self.lods.get(level)
    }

    /// LOD 0, if any LOD was declared.
    pub fn highest_level_of_detail(&self) -> Option<&EntityArchetypeLod> {
        self.lods.first()
    }

    /// Validate that `level` is the next LOD level.
    pub fn check_next_level(&self, level: i64) -> Result<usize, LodError> {
        let expected = self.lods.len();
        match usize::try_from(level) {
            Ok(found) if found == expected => Ok(found),
            Ok(found) if found < expected => Err(LodError::Duplicate { level }),
            _ => Err(LodError::OutOfOrder { expected, level }),
        }
    }

    /// Append the next LOD.
    pub fn push_lod(
        &mut self,
        level: i64,
        items: Vec<EntityArchetypeItem>,
    ) -> Result<(), LodError> {
        let level = self.check_next_level(level)?;
        self.lods.push(EntityArchetypeLod { level, items });
        Ok(())
    }
}

impl fmt::Display for EntityArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[archetype {} {} {}]",
            self.index.value(),
            self.id.value(),
            self.name
        )?;
        for lod in &self.lods {
            write!(f, "\n  [lod {}]", lod.level)?;
            for item in &lod.items {
                write!(f, "\n    {item}")?;
            }
        }
        Ok(())
    }
}
