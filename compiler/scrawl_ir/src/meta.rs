//! Key/value meta data attached to declarations.
//!
//! A meta block is written `[key value, key2 value2]` in source. Keys are
//! unique; inserting an existing key replaces the value but keeps the key's
//! original position, so iteration order is the order keys first appeared.

use std::fmt;

use thiserror::Error;

use crate::ErrorCategory;

/// Errors from typed meta data lookups.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum MetaDataError {
    #[error("missing meta value '{key}'")]
    Missing { key: String },
    #[error("meta value '{key}' is not an integer: '{value}'")]
    NotAnInteger { key: String, value: String },
}

impl MetaDataError {
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Semantic
    }
}

/// Ordered string-to-string map.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct MetaData {
    entries: Vec<(String, String)>,
}

impl MetaData {
    pub fn new() -> Self {
        MetaData::default()
    }

    /// Insert or overwrite `key`, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Look up `key` and parse it as a decimal integer.
    pub fn int(&self, key: &str) -> Result<i64, MetaDataError> {
        let value = self.get(key).ok_or_else(|| MetaDataError::Missing {
            key: key.to_owned(),
        })?;
        value.parse().map_err(|_| MetaDataError::NotAnInteger {
            key: key.to_owned(),
            value: value.to_owned(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MetaData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut meta = MetaData::new();
        for (key, value) in iter {
            meta.insert(key, value);
        }
        meta
    }
}

impl fmt::Display for MetaData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key} '{value}'")?;
        }
        f.write_str("]")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MetaData {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
