//! Main entry point for Stash.
//!
//! This module provides the [`Stash`] struct, which binds a storage
//! collaborator and hands out slot accessors over it.

use stash_core::{Result, Value};
use stash_engine::Slot;
use stash_storage::{FileStore, MemoryStore, StringStore};
use std::path::Path;
use std::sync::Arc;

/// A handle to one storage backend.
///
/// `Stash` owns nothing but the shared store; every [`Slot`] it produces
/// reads and writes that store. Creating it is cheap, and clones share the
/// backend.
///
/// # Example
///
/// ```
/// use stash::prelude::*;
///
/// let stash = Stash::in_memory();
///
/// let count = stash.slot_with("visits", 0)?;
/// assert_eq!(count.get(), Some(Value::Int(0)));
/// # Ok::<(), stash::Error>(())
/// ```
#[derive(Clone)]
pub struct Stash {
    store: Arc<dyn StringStore>,
}

impl std::fmt::Debug for Stash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stash").finish_non_exhaustive()
    }
}

impl Stash {
    /// Create a stash over a caller-supplied store.
    pub fn new(store: Arc<dyn StringStore>) -> Self {
        Self { store }
    }

    /// Create a stash over a fresh in-memory store.
    ///
    /// Nothing touches the disk; all entries are gone when the last clone
    /// drops. Use for tests, caching, and temporary state.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Open a stash over a file-backed store at `path`.
    ///
    /// The file is created on the first write; an existing file is loaded
    /// as the initial contents.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(Arc::new(FileStore::open(path)?)))
    }

    /// Attach a slot for `key` with no default.
    ///
    /// The slot starts empty when the store has no entry.
    pub fn slot(&self, key: &str) -> Result<Slot> {
        Slot::attach(self.store.clone(), key, None)
    }

    /// Attach a slot for `key`, seeding `default` if the key has no entry.
    ///
    /// An existing entry always wins over the default, whatever its value.
    pub fn slot_with(&self, key: &str, default: impl Into<Value>) -> Result<Slot> {
        Slot::attach(self.store.clone(), key, Some(default.into()))
    }

    /// The underlying store collaborator.
    pub fn store(&self) -> Arc<dyn StringStore> {
        self.store.clone()
    }
}
