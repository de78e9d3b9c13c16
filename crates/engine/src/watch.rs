//! Change notification
//!
//! A slot carries a registry of watcher callbacks that fire after every
//! successful write, giving dependents a hook to recompute from the new
//! value. Watchers are synchronous and run on the writing caller; there is
//! no queue and no cross-thread wakeup.

use parking_lot::RwLock;
use stash_core::Value;
use std::sync::{Arc, Weak};

type Callback = Arc<dyn Fn(&Value) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    callbacks: Vec<(u64, Callback)>,
}

/// Watcher registry shared by the clones of one slot.
#[derive(Clone, Default)]
pub(crate) struct Watchers {
    inner: Arc<RwLock<Registry>>,
}

impl Watchers {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Register a callback, returning the guard that keeps it alive.
    pub(crate) fn subscribe<F>(&self, callback: F) -> WatchHandle
    where
        F: Fn(&Value) + Send + Sync + 'static,
    {
        let mut registry = self.inner.write();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.callbacks.push((id, Arc::new(callback)));

        WatchHandle {
            id,
            registry: Arc::downgrade(&self.inner),
        }
    }

    /// Run every live callback with the new value.
    ///
    /// The registry lock is released before callbacks run, so a callback
    /// may subscribe or drop handles without deadlocking.
    pub(crate) fn notify(&self, value: &Value) {
        let callbacks: Vec<Callback> = {
            let registry = self.inner.read();
            registry.callbacks.iter().map(|(_, cb)| cb.clone()).collect()
        };
        for callback in callbacks {
            callback(value);
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.inner.read().callbacks.len()
    }
}

/// RAII guard for a watcher registration.
///
/// Dropping the handle unsubscribes the callback. Handles hold only a weak
/// reference to the registry, so a handle outliving its slot is harmless.
pub struct WatchHandle {
    id: u64,
    registry: Weak<RwLock<Registry>>,
}

impl Drop for WatchHandle {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.write().callbacks.retain(|(id, _)| *id != self.id);
        }
    }
}
