//! # Selection Store
//!
//! The one piece of mutable state: a single storage slot named
//! [`STORAGE_KEY`] holding the last selected jurisdiction code.
//!
//! The slot holds raw text. Resolution validates it on read and falls back
//! to the default when the stored code is unknown.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::StoreError;

/// Name of the persisted slot.
pub const STORAGE_KEY: &str = "evelynJurisdiction";

/// A single-slot key/value store for the selected jurisdiction.
///
/// Infallible by contract: implementations that can fail must log and
/// degrade (an unreadable slot reads as empty, a failed write is dropped).
pub trait SelectionStore {
    /// Current slot contents, if any.
    fn load(&self) -> Option<String>;

    /// Overwrite the slot.
    fn save(&mut self, code: &str);
}

impl<S: SelectionStore + ?Sized> SelectionStore for &mut S {
    fn load(&self) -> Option<String> {
        (**self).load()
    }

    fn save(&mut self, code: &str) {
        (**self).save(code)
    }
}

impl<S: SelectionStore + ?Sized> SelectionStore for Box<S> {
    fn load(&self) -> Option<String> {
        (**self).load()
    }

    fn save(&mut self, code: &str) {
        (**self).save(code)
    }
}

// ---------------------------------------------------------------------------
// In-memory
// ---------------------------------------------------------------------------

/// A store that lives as long as the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySelectionStore {
    slot: Option<String>,
}

impl MemorySelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose slot already holds `value`.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            slot: Some(value.into()),
        }
    }

    /// Peek at the slot without going through the trait.
    pub fn value(&self) -> Option<&str> {
        self.slot.as_deref()
    }
}

impl SelectionStore for MemorySelectionStore {
    fn load(&self) -> Option<String> {
        self.slot.clone()
    }

    fn save(&mut self, code: &str) {
        self.slot = Some(code.to_string());
    }
}

// ---------------------------------------------------------------------------
// File-backed
// ---------------------------------------------------------------------------

/// A store persisted as a small JSON object, `{"evelynJurisdiction": "IE"}`.
///
/// Other keys already in the file are preserved on write.
#[derive(Debug, Clone)]
pub struct FileSelectionStore {
    path: PathBuf,
}

impl FileSelectionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the slot. A missing file is an empty slot, not an error.
    pub fn try_load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.read_entries()?.remove(STORAGE_KEY))
    }

    /// Write the slot, creating the file if needed.
    pub fn try_save(&self, code: &str) -> Result<(), StoreError> {
        let mut entries = self.read_entries()?;
        entries.insert(STORAGE_KEY.to_string(), code.to_string());
        let json = serde_json::to_string_pretty(&entries)?;
        std::fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(source) => Err(StoreError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

impl SelectionStore for FileSelectionStore {
    fn load(&self) -> Option<String> {
        match self.try_load() {
            Ok(value) => value,
            Err(error) => {
                tracing::warn!(%error, "unreadable selection store, treating as empty");
                None
            }
        }
    }

    fn save(&mut self, code: &str) {
        if let Err(error) = self.try_save(code) {
            tracing::warn!(%error, code, "failed to persist jurisdiction selection");
        }
    }
}
