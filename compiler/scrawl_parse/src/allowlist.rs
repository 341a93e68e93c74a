//! Host-supplied names the parser accepts without a declaration.

use rustc_hash::FxHashSet;

/// Names provided by the host environment rather than the protocol file.
///
/// - *Component types* may appear as archetype items without being declared
///   as `component` (for example an engine-provided `WorldPosition`).
/// - *Component fields* restrict the field types a `component` may use.
///   When empty, component field types are not checked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Allowlist {
    component_fields: FxHashSet<String>,
    component_types: FxHashSet<String>,
}

impl Allowlist {
    pub fn new() -> Self {
        Allowlist::default()
    }

    #[must_use]
    pub fn with_component_field(mut self, name: impl Into<String>) -> Self {
        self.component_fields.insert(name.into());
        self
    }

    #[must_use]
    pub fn with_component_fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.component_fields.extend(names.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_component_type(mut self, name: impl Into<String>) -> Self {
        self.component_types.insert(name.into());
        self
    }

    #[must_use]
    pub fn with_component_types<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.component_types.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn allows_component_field(&self, name: &str) -> bool {
        self.component_fields.contains(name)
    }

    pub fn allows_component_type(&self, name: &str) -> bool {
        self.component_types.contains(name)
    }

    /// Whether component field types are checked at all.
    pub fn restricts_component_fields(&self) -> bool {
        !self.component_fields.is_empty()
    }

    pub fn component_types(&self) -> impl Iterator<Item = &str> {
        self.component_types.iter().map(String::as_str)
    }

    pub fn component_fields(&self) -> impl Iterator<Item = &str> {
        self.component_fields.iter().map(String::as_str)
    }
}
