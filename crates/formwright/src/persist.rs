//! Saving and restoring the field configuration.
//!
//! The configuration is the whole ordered field list, stored as a JSON array
//! under a single key of a [`ConfigStore`]. The store is passed in by the
//! caller; this module never reaches for ambient storage.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::error::{FormError, Result};
use crate::field::{Field, FieldId};

/// Key the configuration is stored under unless settings say otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "formConfiguration";

/// A string key-value store holding saved configurations.
pub trait ConfigStore {
    /// Reads the value under `key`, or `None` if nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: ConfigStore + ?Sized> ConfigStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

impl<S: ConfigStore + ?Sized> ConfigStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// An in-memory [`ConfigStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding one entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.into(), value.into());
        store
    }

    /// Returns the raw stored text under `key`.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl ConfigStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Serializes the field list to compact JSON.
pub fn save(fields: &[Field]) -> Result<String> {
    serde_json::to_string(fields).map_err(|e| FormError::Serialize(e.to_string()))
}

/// Serializes the field list to indented JSON.
pub fn save_pretty(fields: &[Field]) -> Result<String> {
    serde_json::to_string_pretty(fields).map_err(|e| FormError::Serialize(e.to_string()))
}

/// Restores a field list from stored text.
///
/// `None` means nothing was stored and yields an empty list. Text that is not
/// a valid configuration fails with [`FormError::Deserialize`]; a
/// configuration repeating an id fails with [`FormError::DuplicateId`], and
/// one holding an id above [`FieldId::MAX`] fails with
/// [`FormError::IdOutOfRange`].
pub fn load(stored: Option<&str>) -> Result<Vec<Field>> {
    let Some(text) = stored else {
        return Ok(Vec::new());
    };

    let fields: Vec<Field> = serde_json::from_str(text)?;

    let mut seen = HashSet::with_capacity(fields.len());
    for field in &fields {
        if field.id() > FieldId::MAX {
            return Err(FormError::IdOutOfRange(field.id().get()));
        }
        if !seen.insert(field.id()) {
            return Err(FormError::DuplicateId(field.id()));
        }
    }

    debug!(count = fields.len(), "parsed stored configuration");
    Ok(fields)
}
