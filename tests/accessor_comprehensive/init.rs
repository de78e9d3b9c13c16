//! Initialization behavior
//!
//! What a slot holds right after attach, for every combination of stored
//! entry and default.

use crate::common::*;
use stash::prelude::*;

// ============================================================================
// Basic attach
// ============================================================================

#[test]
fn attach_is_callable_with_a_default() {
    let t = TestStash::new();
    let slot = t.stash.slot_with("foo", "bar").unwrap();
    assert!(slot.get().is_some());
}

#[test]
fn attach_without_default_on_empty_key_starts_empty() {
    let t = TestStash::new();
    let slot = t.stash.slot("nothing-here").unwrap();

    assert_eq!(slot.get(), None);
    // Nothing was written either.
    assert_eq!(t.raw("nothing-here"), None);
}

#[test]
fn empty_key_is_rejected() {
    let t = TestStash::new();
    let err = t.stash.slot("").unwrap_err();
    assert!(err.is_invalid_key());
}

// ============================================================================
// Existing entries
// ============================================================================

#[test]
fn accepts_non_json_strings() {
    let t = TestStash::new();
    t.seed_raw("name", "bond");

    let slot = t.stash.slot("name").unwrap();

    assert_eq!(slot.get(), Some(Value::from("bond")));
}

#[test]
fn returns_structured_value_for_a_json_string() {
    let t = TestStash::new();
    t.seed_raw("🛸🛸🛸🛸🛸", r#"{"_":"a","3":true,"z":{"y":[2]}}"#);

    let slot = t.stash.slot("🛸🛸🛸🛸🛸").unwrap();

    let value = slot.get().unwrap();
    let obj = value.as_object().unwrap();
    assert_eq!(obj.get("_"), Some(&Value::from("a")));
    assert_eq!(obj.get("3"), Some(&Value::Bool(true)));
    let z = obj.get("z").and_then(Value::as_object).unwrap();
    assert_eq!(z.get("y"), Some(&Value::Array(vec![Value::Int(2)])));
}

#[test]
fn json_scalars_parse_with_their_type() {
    let t = TestStash::new();
    t.seed_raw("int", "42");
    t.seed_raw("float", "1.5");
    t.seed_raw("bool", "true");
    t.seed_raw("null", "null");
    t.seed_raw("array", "[1,2]");

    assert_eq!(t.stash.slot("int").unwrap().get(), Some(Value::Int(42)));
    assert_eq!(t.stash.slot("float").unwrap().get(), Some(Value::Float(1.5)));
    assert_eq!(t.stash.slot("bool").unwrap().get(), Some(Value::Bool(true)));
    assert_eq!(t.stash.slot("null").unwrap().get(), Some(Value::Null));
    assert_eq!(
        t.stash.slot("array").unwrap().get(),
        Some(Value::Array(vec![Value::Int(1), Value::Int(2)]))
    );
}

#[test]
fn undefined_literal_and_empty_string_read_back_raw() {
    let t = TestStash::new();
    t.seed_raw("undef", "undefined");
    t.seed_raw("empty", "");

    assert_eq!(
        t.stash.slot("undef").unwrap().get(),
        Some(Value::from("undefined"))
    );
    assert_eq!(
        t.stash.slot("empty").unwrap().get(),
        Some(Value::from(""))
    );
}

// ============================================================================
// No-override guarantee
// ============================================================================

#[test]
fn does_not_override_existing_data() {
    let t = TestStash::new();

    // First attach seeds the default.
    let first = t.stash.slot_with("dynamickey", 1690000000).unwrap();
    assert_eq!(first.get(), Some(Value::Int(1690000000)));
    assert_eq!(t.raw("dynamickey").as_deref(), Some("1690000000"));

    // Second attach with a different default must not touch the entry.
    let second = t
        .stash
        .slot_with("dynamickey", "Sat Jul 22 2023")
        .unwrap();
    assert_eq!(second.get(), Some(Value::Int(1690000000)));
    assert_eq!(t.raw("dynamickey").as_deref(), Some("1690000000"));
}

#[test]
fn existing_falsy_values_win_over_defaults() {
    let t = TestStash::new();
    t.seed_raw("zero", "0");
    t.seed_raw("no", "false");
    t.seed_raw("blank", "");

    assert_eq!(
        t.stash.slot_with("zero", 99).unwrap().get(),
        Some(Value::Int(0))
    );
    assert_eq!(
        t.stash.slot_with("no", true).unwrap().get(),
        Some(Value::Bool(false))
    );
    assert_eq!(
        t.stash.slot_with("blank", "full").unwrap().get(),
        Some(Value::from(""))
    );

    // And none of the raw entries changed.
    assert_eq!(t.raw("zero").as_deref(), Some("0"));
    assert_eq!(t.raw("no").as_deref(), Some("false"));
    assert_eq!(t.raw("blank").as_deref(), Some(""));
}
