//! In-memory store backend
//!
//! The ephemeral backend: no files, no recovery, all entries gone on drop.
//! This is the unit-test double and the right choice for caching scenarios.

use crate::StringStore;
use parking_lot::RwLock;
use stash_core::Result;
use std::collections::HashMap;

/// In-memory string store.
///
/// Entries live in a `HashMap` behind an `RwLock`. `get` and `set` never
/// fail.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl StringStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, raw: &str) -> Result<()> {
        self.entries.write().insert(key.to_owned(), raw.to_owned());
        Ok(())
    }
}
