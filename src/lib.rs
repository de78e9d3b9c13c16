//! # Stash
//!
//! Reactive keyed-value accessors over pluggable string storage.
//!
//! A [`Slot`] mirrors one key in an external store: it exposes the current
//! value, a setter that writes through, and change notification for
//! dependents. Values cover every JSON shape; raw store strings that are
//! not valid JSON are exposed as plain strings instead of faulting, so
//! legacy entries keep working.
//!
//! ## Quick Start
//!
//! ```
//! use stash::prelude::*;
//!
//! let stash = Stash::in_memory();
//!
//! // A default applies only when the key has no entry yet; it is
//! // persisted immediately so later reads observe it.
//! let theme = stash.slot_with("theme", "dark")?;
//! assert_eq!(theme.get(), Some(Value::from("dark")));
//!
//! // Writes go through to the store and notify watchers.
//! theme.set("light")?;
//! assert_eq!(theme.get(), Some(Value::from("light")));
//! # Ok::<(), stash::Error>(())
//! ```
//!
//! ## Storage backends
//!
//! The store is a collaborator behind the [`StringStore`] trait:
//! [`MemoryStore`] for ephemeral use and tests, [`FileStore`] for a
//! durable single-file image, or any caller-supplied implementation.
//!
//! ## What a default never does
//!
//! An existing entry always wins over a default, even when the stored
//! value is falsy (`false`, `0`, `""`). Re-creating an accessor for the
//! same key is idempotent with respect to persisted data.

#![warn(missing_docs)]

mod stash;

pub mod prelude;

// Re-export main entry points
pub use crate::stash::Stash;
pub use stash_core::{Error, Result};

// Re-export the accessor surface
pub use stash_core::{decode_raw, encode_raw, SlotKey, Value};
pub use stash_engine::{resolve_initial, Resolution, Slot, WatchHandle};
pub use stash_storage::{FileStore, MemoryStore, StringStore};
