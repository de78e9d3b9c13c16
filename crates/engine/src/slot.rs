//! Slot accessor
//!
//! A [`Slot`] mirrors one key in an external string store: it exposes the
//! current value, a setter that writes through to the store, and change
//! notification for dependents.
//!
//! ## Initialization
//!
//! The stored raw string is read once, at attach time. An existing entry is
//! decoded (JSON parse, degrading to the raw string) and always wins over
//! the caller's default; a missing entry takes the default and seeds it
//! back into the store immediately. Attaching again to the same key is
//! idempotent with respect to persisted data.
//!
//! ## Writes
//!
//! `set` writes the store first, then swaps the in-memory value, then runs
//! watchers. A failed store write leaves the exposed value unchanged, so
//! callers never observe a half-applied write.

use crate::init::resolve_initial;
use crate::watch::{WatchHandle, Watchers};
use parking_lot::RwLock;
use stash_core::{encode_raw, Result, SlotKey, Value};
use stash_storage::StringStore;
use std::sync::Arc;
use tracing::debug;

/// Reactive accessor over one stored key.
///
/// Cloning a `Slot` is cheap and produces a handle to the same state:
/// clones share the current value and the watcher registry.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use stash_engine::Slot;
/// use stash_storage::MemoryStore;
/// use stash_core::Value;
///
/// let store = Arc::new(MemoryStore::new());
/// let slot = Slot::attach(store, "Numberwang", Some(Value::Int(42))).unwrap();
///
/// assert_eq!(slot.get(), Some(Value::Int(42)));
/// slot.set(Value::Int(7)).unwrap();
/// assert_eq!(slot.get(), Some(Value::Int(7)));
/// ```
#[derive(Clone)]
pub struct Slot {
    store: Arc<dyn StringStore>,
    key: SlotKey,
    current: Arc<RwLock<Option<Value>>>,
    watchers: Watchers,
}

impl Slot {
    /// Attach to `key` in the given store.
    ///
    /// Runs the initialization policy described in the module docs. The
    /// default is used, and persisted, only when the store has no entry;
    /// an existing entry is never overwritten, even when it is falsy
    /// (`false`, `0`, `""`).
    pub fn attach(
        store: Arc<dyn StringStore>,
        key: &str,
        default: Option<Value>,
    ) -> Result<Self> {
        let key = SlotKey::new(key)?;
        let raw = store.get(key.as_str())?;
        let resolution = resolve_initial(raw.as_deref(), default.as_ref());

        if let Some(seed) = &resolution.seed {
            debug!(key = %key, raw = %seed, "seeding default into empty slot");
            store.set(key.as_str(), seed)?;
        }

        match &resolution.current {
            Some(value) => {
                debug!(key = %key, value_type = value.type_name(), "attached slot")
            }
            None => debug!(key = %key, "attached empty slot"),
        }

        Ok(Self {
            store,
            key,
            current: Arc::new(RwLock::new(resolution.current)),
            watchers: Watchers::new(),
        })
    }

    /// The key this slot mirrors.
    pub fn key(&self) -> &str {
        self.key.as_str()
    }

    /// The current value, or `None` for a slot that started empty with no
    /// default and has not been written since.
    pub fn get(&self) -> Option<Value> {
        self.current.read().clone()
    }

    /// Write a new value.
    ///
    /// The value is encoded (strings verbatim, everything else canonical
    /// JSON), written through to the store, and exposed to readers and
    /// watchers.
    pub fn set(&self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        let raw = encode_raw(&value);
        self.store.set(self.key.as_str(), &raw)?;

        *self.current.write() = Some(value.clone());
        self.watchers.notify(&value);
        Ok(())
    }

    /// Read-modify-write convenience over [`get`](Self::get) and
    /// [`set`](Self::set).
    pub fn update<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(Option<&Value>) -> Value,
    {
        let next = {
            let current = self.current.read();
            f(current.as_ref())
        };
        self.set(next)
    }

    /// Watch for changes.
    ///
    /// The callback runs after every successful write with the new value.
    /// Dropping the returned handle unsubscribes.
    pub fn watch<F>(&self, callback: F) -> WatchHandle
    where
        F: Fn(&Value) + Send + Sync + 'static,
    {
        self.watchers.subscribe(callback)
    }
}

impl std::fmt::Debug for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slot")
            .field("key", &self.key)
            .field("current", &*self.current.read())
            .finish()
    }
}
