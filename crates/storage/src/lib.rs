//! Storage collaborators for Stash
//!
//! This crate defines the external-store capability the accessor composes
//! with, plus two reference backends:
//! - [`MemoryStore`]: HashMap behind an RwLock, for tests and ephemeral use
//! - [`FileStore`]: a single JSON-object file with write-through persistence

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use stash_core::Result;

/// External key-value string store.
///
/// The capability set is deliberately small: read a raw string by key,
/// write a raw string by key. Values are always strings; parsing and
/// serialization live above this boundary. Implementations handle their
/// own interior locking and report failures through [`stash_core::Error`];
/// the accessor never manages a backend's lifecycle beyond holding a
/// shared handle.
pub trait StringStore: Send + Sync {
    /// Get the raw string at `key`, or `None` if no entry exists.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write the raw string at `key`, creating or replacing the entry.
    fn set(&self, key: &str, raw: &str) -> Result<()>;
}
