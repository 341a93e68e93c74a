use std::fmt;

use rustc_hash::FxHashMap;

use crate::{
    Buffer, Command, CommandTypeIndex, ComponentDataType, ComponentDataTypeIndex,
    DeclarationKind, DefinitionError, EntityArchetype, EntityIndex, Enum, Event, EventTypeIndex,
    UserType,
};

/// The definition tree of one protocol file.
///
/// Owns every declaration. Declarations are stored in source order per
/// kind; a declaration's index is its position in the corresponding slice.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Root {
    namespace: String,
    name: String,
    hash: u32,
    component_data_types: Vec<ComponentDataType>,
    user_types: Vec<UserType>,
    archetypes: Vec<EntityArchetype>,
    events: Vec<Event>,
    commands: Vec<Command>,
    enums: Vec<Enum>,
    buffers: Vec<Buffer>,
    #[cfg_attr(feature = "serde", serde(skip))]
    names: FxHashMap<DeclarationKind, FxHashMap<String, usize>>,
}

impl Root {
    /// Dotted namespace, empty if none was declared.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// FNV-1a hash of the canonical, comment-free source.
    pub fn hash(&self) -> u32 {
        self.hash
    }

    pub fn component_data_types(&self) -> &[ComponentDataType] {
        &self.component_data_types
    }

    pub fn user_types(&self) -> &[UserType] {
        &self.user_types
    }

    pub fn archetypes(&self) -> &[EntityArchetype] {
        &self.archetypes
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn enums(&self) -> &[Enum] {
        &self.enums
    }

    pub fn buffers(&self) -> &[Buffer] {
        &self.buffers
    }

    pub fn component_data_type(&self, index: ComponentDataTypeIndex) -> Option<&ComponentDataType> {
        self.component_data_types.get(index.as_usize())
    }

    fn lookup(&self, kind: DeclarationKind, name: &str) -> Option<usize> {
        self.names.get(&kind)?.get(name).copied()
    }

    pub fn contains(&self, kind: DeclarationKind, name: &str) -> bool {
        self.lookup(kind, name).is_some()
    }

    pub fn find_component_data_type(&self, name: &str) -> Option<&ComponentDataType> {
        self.lookup(DeclarationKind::Component, name)
            .and_then(|i| self.component_data_types.get(i))
    }

    pub fn find_user_type(&self, name: &str) -> Option<&UserType> {
        self.lookup(DeclarationKind::UserType, name)
            .and_then(|i| self.user_types.get(i))
    }

    pub fn find_archetype(&self, name: &str) -> Option<&EntityArchetype> {
        self.lookup(DeclarationKind::Archetype, name)
            .and_then(|i| self.archetypes.get(i))
    }

    pub fn find_event(&self, name: &str) -> Option<&Event> {
        self.lookup(DeclarationKind::Event, name)
            .and_then(|i| self.events.get(i))
    }

    pub fn find_command(&self, name: &str) -> Option<&Command> {
        self.lookup(DeclarationKind::Command, name)
            .and_then(|i| self.commands.get(i))
    }

    pub fn find_enum(&self, name: &str) -> Option<&Enum> {
        self.lookup(DeclarationKind::Enum, name)
            .and_then(|i| self.enums.get(i))
    }

    pub fn find_buffer(&self, name: &str) -> Option<&Buffer> {
        self.lookup(DeclarationKind::Buffer, name)
            .and_then(|i| self.buffers.get(i))
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "namespace: {}", self.namespace)?;
        writeln!(f, "name: {}", self.name)?;
        write!(f, "hash: {:#010x}", self.hash)?;
        for component in &self.component_data_types {
            write!(f, "\n{component}")?;
        }
        for user_type in &self.user_types {
            write!(f, "\n{user_type}")?;
        }
        for buffer in &self.buffers {
            write!(f, "\n{buffer}")?;
        }
        for enumeration in &self.enums {
            write!(f, "\n{enumeration}")?;
        }
        for archetype in &self.archetypes {
            write!(
                f,
                "\n[archetype {} {} {}]",
                archetype.index.value(),
                archetype.id().value(),
                archetype.name
            )?;
            for lod in archetype.lods() {
                write!(f, "\n  [lod {}]", lod.level)?;
                for item in &lod.items {
                    let name = item.name(self).unwrap_or("?");
                    write!(f, "\n    [item {name}]")?;
                }
            }
        }
        for event in &self.events {
            write!(f, "\n{event}")?;
        }
        for command in &self.commands {
            write!(f, "\n{command}")?;
        }
        Ok(())
    }
}

/// Accumulates declarations in source order and enforces per-kind name
/// uniqueness and index capacity.
#[derive(Debug, Default)]
pub struct RootBuilder {
    root: Root,
}

macro_rules! next_index {
    ($fn_name:ident, $index:ty, $field:ident, $kind:expr) => {
        /// Index the next declaration of this kind will receive.
        pub fn $fn_name(&self) -> Result<$index, DefinitionError> {
            <$index>::from_count(self.root.$field.len()).ok_or(DefinitionError::IndexOverflow {
                kind: $kind,
                capacity: <$index>::CAPACITY,
            })
        }
    };
}

impl RootBuilder {
    pub fn new() -> Self {
        RootBuilder::default()
    }

    pub fn set_namespace(&mut self, namespace: impl Into<String>) {
        self.root.namespace = namespace.into();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.root.name = name.into();
    }

    /// The declarations added so far.
    pub fn root(&self) -> &Root {
        &self.root
    }

    pub fn ensure_unique(&self, kind: DeclarationKind, name: &str) -> Result<(), DefinitionError> {
        if self.root.contains(kind, name) {
            return Err(DefinitionError::DuplicateName {
                kind,
                name: name.to_owned(),
            });
        }
        Ok(())
    }

    next_index!(
        next_component_index,
        ComponentDataTypeIndex,
        component_data_types,
        DeclarationKind::Component
    );
    next_index!(
        next_entity_index,
        EntityIndex,
        archetypes,
        DeclarationKind::Archetype
    );
    next_index!(
        next_event_index,
        EventTypeIndex,
        events,
        DeclarationKind::Event
    );
    next_index!(
        next_command_index,
        CommandTypeIndex,
        commands,
        DeclarationKind::Command
    );

    fn register(
        &mut self,
        kind: DeclarationKind,
        name: &str,
        position: usize,
    ) -> Result<(), DefinitionError> {
        self.ensure_unique(kind, name)?;
        self.root
            .names
            .entry(kind)
            .or_default()
            .insert(name.to_owned(), position);
        Ok(())
    }

    /// Add a component; its index is overwritten with the next free one.
    pub fn add_component_data_type(
        &mut self,
        mut component: ComponentDataType,
    ) -> Result<ComponentDataTypeIndex, DefinitionError> {
        let index = self.next_component_index()?;
        self.register(DeclarationKind::Component, &component.name, index.as_usize())?;
        component.index = index;
        self.root.component_data_types.push(component);
        Ok(index)
    }

    pub fn add_user_type(&mut self, user_type: UserType) -> Result<(), DefinitionError> {
        let position = self.root.user_types.len();
        self.register(DeclarationKind::UserType, &user_type.name, position)?;
        self.root.user_types.push(user_type);
        Ok(())
    }

    /// Add an archetype; its index is overwritten with the next free one.
    pub fn add_archetype(
        &mut self,
        mut archetype: EntityArchetype,
    ) -> Result<EntityIndex, DefinitionError> {
        let index = self.next_entity_index()?;
        self.register(DeclarationKind::Archetype, &archetype.name, index.as_usize())?;
        archetype.index = index;
        self.root.archetypes.push(archetype);
        Ok(index)
    }

    /// Add an event; its index is overwritten with the next free one.
    pub fn add_event(&mut self, mut event: Event) -> Result<EventTypeIndex, DefinitionError> {
        let index = self.next_event_index()?;
        self.register(DeclarationKind::Event, &event.name, index.as_usize())?;
        event.index = index;
        self.root.events.push(event);
        Ok(index)
    }

    /// Add a command; its index is overwritten with the next free one.
    pub fn add_command(&mut self, mut command: Command) -> Result<CommandTypeIndex, DefinitionError> {
        let index = self.next_command_index()?;
        self.register(DeclarationKind::Command, &command.name, index.as_usize())?;
        command.index = index;
        self.root.commands.push(command);
        Ok(index)
    }

    pub fn add_enum(&mut self, enumeration: Enum) -> Result<(), DefinitionError> {
        let position = self.root.enums.len();
        self.register(DeclarationKind::Enum, &enumeration.name, position)?;
        self.root.enums.push(enumeration);
        Ok(())
    }

    pub fn add_buffer(&mut self, buffer: Buffer) -> Result<(), DefinitionError> {
        let position = self.root.buffers.len();
        self.register(DeclarationKind::Buffer, &buffer.name, position)?;
        self.root.buffers.push(buffer);
        Ok(())
    }

    /// Freeze the tree, stamping the content hash.
    pub fn finish(mut self, hash: u32) -> Root {
        self.root.hash = hash;
        self.root
    }
}
