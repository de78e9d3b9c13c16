//! Initialization resolver
//!
//! Deciding what a freshly attached slot holds is a pure function of the
//! stored raw string and the caller's default. Store access stays at the
//! boundary (the caller reads before and writes after), which keeps every
//! branch of the policy testable without a store.

use stash_core::{decode_raw, encode_raw, Value};

/// Outcome of resolving a slot's initial state.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// The value the slot exposes after initialization. `None` means the
    /// store had no entry and the caller supplied no default.
    pub current: Option<Value>,
    /// Raw string to persist, present only when a default is being seeded
    /// into an empty slot.
    pub seed: Option<String>,
}

/// Resolve the initial value for a slot.
///
/// - An existing entry always wins: it is decoded (JSON parse, degrading
///   to the raw string) and the default is ignored entirely, even when the
///   stored value is falsy (`false`, `0`, `""`).
/// - An absent entry takes the default, and the default is seeded back so
///   subsequent reads observe it.
/// - Absent entry, no default: the slot starts empty and nothing is
///   written.
///
/// Because an existing entry short-circuits, re-resolving against
/// already-persisted data is idempotent regardless of the default passed.
pub fn resolve_initial(raw: Option<&str>, default: Option<&Value>) -> Resolution {
    match raw {
        Some(raw) => Resolution {
            current: Some(decode_raw(raw)),
            seed: None,
        },
        None => match default {
            Some(default) => Resolution {
                current: Some(default.clone()),
                seed: Some(encode_raw(default)),
            },
            None => Resolution {
                current: None,
                seed: None,
            },
        },
    }
}
