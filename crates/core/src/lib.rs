//! Core types for Stash
//!
//! This crate defines the fundamental pieces shared by every layer:
//! - [`Value`]: the canonical closed value model (all JSON shapes)
//! - [`SlotKey`]: validated identifier for one persisted slot
//! - [`Error`] / [`Result`]: the canonical error type
//! - [`decode_raw`] / [`encode_raw`]: the raw-string codec

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod error;
pub mod key;
pub mod value;

pub use codec::{decode_raw, encode_raw};
pub use error::{Error, Result};
pub use key::SlotKey;
pub use value::Value;
