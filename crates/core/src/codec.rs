//! Raw-string codec for stored values
//!
//! The external store holds unparsed strings. This module defines the two
//! pure functions that move between raw strings and [`Value`]:
//!
//! - [`decode_raw`] parses a raw string as JSON and degrades to the raw
//!   string itself when the parse fails. It never returns an error.
//! - [`encode_raw`] writes `String` values verbatim and everything else as
//!   canonical JSON with deterministic (sorted) object-key order.
//!
//! The degradation rule is what keeps legacy, non-JSON store contents
//! readable: a raw `bond` comes back as the string `"bond"` instead of a
//! parse fault.

use crate::value::Value;
use std::collections::HashMap;

/// Decode a raw store string into a [`Value`].
///
/// Attempts a JSON parse first; any JSON type is accepted, including the
/// falsy scalars `false`, `0`, and `null`. On parse failure the raw string
/// itself is the result. The literal strings `undefined` and `""` are parse
/// failures and therefore come back verbatim.
///
/// # Examples
///
/// ```
/// use stash_core::{decode_raw, Value};
///
/// assert_eq!(decode_raw("42"), Value::Int(42));
/// assert_eq!(decode_raw("false"), Value::Bool(false));
/// assert_eq!(decode_raw("bond"), Value::String("bond".to_string()));
/// ```
pub fn decode_raw(raw: &str) -> Value {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => value,
        Err(_) => Value::String(raw.to_owned()),
    }
}

/// Encode a [`Value`] into the raw string persisted by the store.
///
/// `String` values are written verbatim, preserving the representation the
/// decoder accepts for legacy entries. Every other variant encodes as
/// canonical JSON. A `String` whose text happens to be valid JSON (such as
/// `"42"`) will re-read as the parsed value; that mirrors the decoder's
/// degradation rule.
///
/// Non-finite floats have no JSON representation and encode as `null`,
/// matching the host-JSON convention the store format descends from.
pub fn encode_raw(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => encode_json(other),
    }
}

/// Encode any Value as JSON text, including nested strings (quoted).
fn encode_json(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => encode_float(*f),
        Value::String(s) => encode_string(s),
        Value::Array(items) => encode_array(items),
        Value::Object(entries) => encode_object(entries),
    }
}

/// Format a float, ensuring whole numbers keep a decimal point so they
/// decode back as `Float`, not `Int`.
fn encode_float(f: f64) -> String {
    if !f.is_finite() {
        return "null".to_string();
    }
    let s = f.to_string();
    if s.contains('.') || s.contains('e') || s.contains('E') {
        s
    } else {
        format!("{}.0", s)
    }
}

/// Encode a string with proper JSON escaping
fn encode_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c.is_control() => {
                result.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => result.push(c),
        }
    }
    result.push('"');
    result
}

/// Encode an array
fn encode_array(items: &[Value]) -> String {
    let elements: Vec<String> = items.iter().map(encode_json).collect();
    format!("[{}]", elements.join(","))
}

/// Encode an object with deterministic key ordering
fn encode_object(entries: &HashMap<String, Value>) -> String {
    let mut sorted: Vec<_> = entries.iter().collect();
    sorted.sort_by_key(|(k, _)| *k);

    let pairs: Vec<String> = sorted
        .iter()
        .map(|(k, v)| format!("{}:{}", encode_string(k), encode_json(v)))
        .collect();

    format!("{{{}}}", pairs.join(","))
}
