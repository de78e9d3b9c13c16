//! Default seeding
//!
//! A default applies only when the key has no entry, and is persisted the
//! moment it applies.

use crate::common::*;
use stash::prelude::*;

#[test]
fn numeric_default_is_exposed_and_persisted() {
    let t = TestStash::new();

    let slot = t.stash.slot_with("Numberwang", 42).unwrap();

    assert_eq!(slot.get(), Some(Value::Int(42)));
    assert_eq!(t.raw("Numberwang").as_deref(), Some("42"));
}

#[test]
fn zero_default_is_exposed_and_persisted() {
    let t = TestStash::new();

    let slot = t
        .stash
        .slot_with("AmountOfMoneyInMyBankAccount", 0)
        .unwrap();

    assert_eq!(slot.get(), Some(Value::Int(0)));
    assert_eq!(t.raw("AmountOfMoneyInMyBankAccount").as_deref(), Some("0"));
}

#[test]
fn false_default_is_exposed_and_persisted() {
    let t = TestStash::new();

    let slot = t.stash.slot_with("opted-in", false).unwrap();

    assert_eq!(slot.get(), Some(Value::Bool(false)));
    assert_eq!(t.raw("opted-in").as_deref(), Some("false"));
}

#[test]
fn string_default_is_persisted_verbatim() {
    let t = TestStash::new();

    let slot = t.stash.slot_with("name", "bond").unwrap();

    assert_eq!(slot.get(), Some(Value::from("bond")));
    assert_eq!(t.raw("name").as_deref(), Some("bond"));
}

#[test]
fn structured_default_is_persisted_as_json() {
    let t = TestStash::new();

    let slot = t
        .stash
        .slot_with("pair", Value::Array(vec![Value::Int(1), Value::Bool(false)]))
        .unwrap();

    assert_eq!(
        slot.get(),
        Some(Value::Array(vec![Value::Int(1), Value::Bool(false)]))
    );
    assert_eq!(t.raw("pair").as_deref(), Some("[1,false]"));
}

#[test]
fn seeded_default_is_visible_to_later_accessors() {
    let t = TestStash::new();

    t.stash.slot_with("seeded", 7).unwrap();

    // Even an accessor with no default now sees the entry.
    let reader = t.stash.slot("seeded").unwrap();
    assert_eq!(reader.get(), Some(Value::Int(7)));
}

#[test]
fn existing_false_wins_when_default_is_true() {
    let t = TestStash::new();
    t.seed_raw("AmIFalse", "false");

    let slot = t.stash.slot_with("AmIFalse", true).unwrap();

    assert_eq!(slot.get(), Some(Value::Bool(false)));
    assert_eq!(t.raw("AmIFalse").as_deref(), Some("false"));
}

#[test]
fn existing_false_wins_when_default_is_false() {
    let t = TestStash::new();
    t.seed_raw("AmIFalse", "false");

    let slot = t.stash.slot_with("AmIFalse", false).unwrap();

    assert_eq!(slot.get(), Some(Value::Bool(false)));
    assert_eq!(t.raw("AmIFalse").as_deref(), Some("false"));
}
