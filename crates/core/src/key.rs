//! Slot key type
//!
//! A [`SlotKey`] identifies one persisted slot in the external store. It is
//! immutable for the lifetime of an accessor instance.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Identifier for one persisted slot.
///
/// Any non-empty string is a valid key; no syntax beyond that is imposed,
/// so namespaced (`"settings:theme"`) and unicode keys work unchanged.
///
/// # Examples
///
/// ```
/// use stash_core::SlotKey;
///
/// let key = SlotKey::new("Numberwang").unwrap();
/// assert_eq!(key.as_str(), "Numberwang");
///
/// assert!(SlotKey::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotKey(String);

impl SlotKey {
    /// Create a key, rejecting the empty string.
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(Error::InvalidKey("key must not be empty".to_string()));
        }
        Ok(SlotKey(key))
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SlotKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SlotKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
