//! Convenience re-exports for common usage.
//!
//! ```
//! use stash::prelude::*;
//!
//! let stash = Stash::in_memory();
//! let slot = stash.slot("greeting")?;
//! slot.set("hello")?;
//! # Ok::<(), stash::Error>(())
//! ```

pub use crate::stash::Stash;
pub use stash_core::{Error, Result, SlotKey, Value};
pub use stash_engine::{Slot, WatchHandle};
pub use stash_storage::{FileStore, MemoryStore, StringStore};
