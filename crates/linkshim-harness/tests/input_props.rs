#![forbid(unsafe_code)]

//! Integration tests: inputs driven by an external store, with props
//! swapped between renders.

use std::sync::Arc;

use linkshim_core::{
    BindingConfig, BindingError, ChangeEvent, Conflict, DeprecationNotice, EventHandler,
    LinkConfig, StateOwner, Value,
};
use linkshim_harness::{CheckboxInput, MockState, TextInput};

fn text_input(config: BindingConfig) -> TextInput {
    TextInput::mount_with(config, LinkConfig::default(), Arc::new(DeprecationNotice::new()))
        .expect("mount")
}

fn checkbox_input(config: BindingConfig) -> CheckboxInput {
    CheckboxInput::mount_with(config, LinkConfig::default(), Arc::new(DeprecationNotice::new()))
        .expect("mount")
}

/// An `onChange` that writes `target.value` into `store[key]`.
fn value_handler(store: &std::rc::Rc<MockState>, key: &'static str) -> EventHandler {
    let store = std::rc::Rc::clone(store);
    EventHandler::new(move |e| store.apply_partial_update(key, e.target_value()))
}

/// An `onChange` that writes `target.checked` into `store[key]`.
fn checked_handler(store: &std::rc::Rc<MockState>, key: &'static str) -> EventHandler {
    let store = std::rc::Rc::clone(store);
    EventHandler::new(move |e| store.apply_partial_update(key, e.target_checked()))
}

// ============================================================================
// Text input, valueLink
// ============================================================================

#[test]
fn value_link_sets_value() {
    let store = MockState::with_state([("value", "Lorem ipsum dolor")]);
    let input = text_input(BindingConfig::new().value_link(store.link_state("value")));
    assert_eq!(input.rendered().value, Some(store.get("value")));
    assert_eq!(input.rendered().input_type, "text");
}

#[test]
fn value_link_updates_store() {
    let store = MockState::new();
    let input = text_input(BindingConfig::new().value_link(store.link_state("value")));
    assert!(input.simulate_change(&ChangeEvent::value("sit amet")));
    assert_eq!(store.get("value"), Value::from("sit amet"));
}

#[test]
fn swapping_value_link_updates_value() {
    let store = MockState::with_state([("oldValue", "old text"), ("newValue", "new text")]);
    let mut input = text_input(BindingConfig::new().value_link(store.link_state("oldValue")));
    input
        .set_props(BindingConfig::new().value_link(store.link_state("newValue")))
        .expect("valid props");
    assert_eq!(input.rendered().value, Some(Value::from("new text")));
    assert_eq!(input.render_count(), 2);
}

#[test]
fn swapping_value_link_updates_handler() {
    let store = MockState::new();
    let mut input = text_input(BindingConfig::new().value_link(store.link_state("oldValue")));
    input.simulate_change(&ChangeEvent::value("first"));
    input
        .set_props(BindingConfig::new().value_link(store.link_state("newValue")))
        .expect("valid props");
    input.simulate_change(&ChangeEvent::value("second"));

    assert_eq!(store.get("oldValue"), Value::from("first"));
    assert_eq!(store.get("newValue"), Value::from("second"));
}

#[test]
fn refreshed_value_link_keeps_handler_identity() {
    let store = MockState::with_state([("value", "a")]);
    let mut input = text_input(BindingConfig::new().value_link(store.link_state("value")));
    let before = input.rendered().on_change.clone().expect("handler");

    input.simulate_change(&ChangeEvent::value("b"));
    input
        .set_props(BindingConfig::new().value_link(store.link_state("value")))
        .expect("valid props");

    assert_eq!(input.rendered().value, Some(Value::from("b")));
    assert!(before.same_as(input.rendered().on_change.as_ref().expect("handler")));
}

// ============================================================================
// Text input, value + onChange
// ============================================================================

#[test]
fn direct_value_and_handler() {
    let store = std::rc::Rc::new(MockState::with_state([("value", "shown")]));
    let input = text_input(
        BindingConfig::new()
            .value(store.get("value"))
            .on_change(value_handler(&store, "value")),
    );
    assert_eq!(input.rendered().value, Some(Value::from("shown")));

    input.simulate_change(&ChangeEvent::value("typed"));
    assert_eq!(store.get("value"), Value::from("typed"));
}

#[test]
fn swapping_direct_value() {
    let mut input = text_input(BindingConfig::new().value("before"));
    input
        .set_props(BindingConfig::new().value("after"))
        .expect("valid props");
    assert_eq!(input.rendered().value, Some(Value::from("after")));
    assert!(!input.simulate_change(&ChangeEvent::value("ignored")));
}

#[test]
fn swapping_direct_handler() {
    let store = std::rc::Rc::new(MockState::new());
    let mut input = text_input(BindingConfig::new().on_change(value_handler(&store, "oldValue")));
    input.simulate_change(&ChangeEvent::value("first"));
    input
        .set_props(BindingConfig::new().on_change(value_handler(&store, "newValue")))
        .expect("valid props");
    input.simulate_change(&ChangeEvent::value("second"));

    assert_eq!(store.get("oldValue"), Value::from("first"));
    assert_eq!(store.get("newValue"), Value::from("second"));
}

// ============================================================================
// Checkbox input, checkedLink
// ============================================================================

#[test]
fn checked_link_sets_checked() {
    for state in [true, false] {
        let store = MockState::with_state([("checked", state)]);
        let input = checkbox_input(BindingConfig::new().checked_link(store.link_state("checked")));
        assert_eq!(input.rendered().checked, Some(Value::Bool(state)));
        assert_eq!(input.rendered().input_type, "checkbox");
    }
}

#[test]
fn checked_link_updates_store() {
    let store = MockState::with_state([("checked", false)]);
    let input = checkbox_input(BindingConfig::new().checked_link(store.link_state("checked")));
    input.simulate_change(&ChangeEvent::checked(true));
    assert_eq!(store.get("checked"), Value::Bool(true));
}

#[test]
fn swapping_checked_link_updates_checked_and_handler() {
    let store = MockState::with_state([("oldChecked", true), ("newChecked", false)]);
    let mut input =
        checkbox_input(BindingConfig::new().checked_link(store.link_state("oldChecked")));
    input.simulate_change(&ChangeEvent::checked(false));

    input
        .set_props(BindingConfig::new().checked_link(store.link_state("newChecked")))
        .expect("valid props");
    assert_eq!(input.rendered().checked, Some(Value::Bool(false)));
    input.simulate_change(&ChangeEvent::checked(true));

    assert_eq!(store.get("oldChecked"), Value::Bool(false));
    assert_eq!(store.get("newChecked"), Value::Bool(true));
}

// ============================================================================
// Checkbox input, checked + onChange
// ============================================================================

#[test]
fn direct_checked_and_handler() {
    let store = std::rc::Rc::new(MockState::with_state([("checked", true)]));
    let mut input = checkbox_input(
        BindingConfig::new()
            .checked(store.get("checked"))
            .on_change(checked_handler(&store, "checked")),
    );
    assert_eq!(input.rendered().checked, Some(Value::Bool(true)));

    input.simulate_change(&ChangeEvent::checked(false));
    assert_eq!(store.get("checked"), Value::Bool(false));

    input
        .set_props(BindingConfig::new().checked(false))
        .expect("valid props");
    assert_eq!(input.rendered().checked, Some(Value::Bool(false)));
}

// ============================================================================
// Conflicting props
// ============================================================================

#[test]
fn both_links_rejected_at_mount() {
    let store = MockState::new();
    let err = TextInput::mount_with(
        BindingConfig::new()
            .value_link(store.link_state("a"))
            .checked_link(store.link_state("b")),
        LinkConfig::default(),
        Arc::new(DeprecationNotice::new()),
    )
    .unwrap_err();
    assert_eq!(err, BindingError::ConflictingBindingModes(Conflict::BothLinks));
}

#[test]
fn conflicting_set_props_keeps_previous_render() {
    let store = std::rc::Rc::new(MockState::with_state([("value", "kept")]));
    let mut input = text_input(BindingConfig::new().value_link(store.link_state("value")));
    let err = input
        .set_props(
            BindingConfig::new()
                .value_link(store.link_state("value"))
                .on_change(value_handler(&store, "value")),
        )
        .unwrap_err();
    assert_eq!(
        err,
        BindingError::ConflictingBindingModes(Conflict::ValueLinkWithDirectProps)
    );
    assert_eq!(input.rendered().value, Some(Value::from("kept")));
    assert_eq!(input.render_count(), 1);
}
