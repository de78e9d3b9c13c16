//! Accessor engine for Stash
//!
//! This crate implements the slot accessor over a [`StringStore`]
//! collaborator:
//! - [`resolve_initial`]: the pure initialization policy
//! - [`Slot`]: the value/setter pair with write-through persistence
//! - [`WatchHandle`]: RAII change-notification registration

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod init;
pub mod slot;
pub mod watch;

pub use init::{resolve_initial, Resolution};
pub use slot::Slot;
pub use watch::WatchHandle;

// Re-export the collaborator trait for convenience
pub use stash_storage::StringStore;
