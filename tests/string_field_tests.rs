use std::cell::RefCell;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use errorfield::{FieldEvent, FieldValue, StringField, StringFieldState, TextRange};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// State for "abc" with the cursor at the end, as after typing it.
fn typed_abc() -> StringFieldState {
    let mut state = StringFieldState::new("abc");
    let mut field = StringField::new("abc", |_| panic!("no text change expected"));
    field.handle_key(&press(KeyCode::End), &mut state);
    state
}

#[test]
fn selection_only_change_does_not_notify() {
    let calls = RefCell::new(Vec::<String>::new());
    let mut state = typed_abc();
    assert_eq!(state.value().selection, TextRange::cursor(3));

    let mut field = StringField::new("abc", |text| calls.borrow_mut().push(text));
    field.apply_edit(
        FieldValue::new("abc").with_selection(TextRange::cursor(1)),
        &mut state,
    );
    drop(field);

    assert!(calls.borrow().is_empty(), "cursor moves must stay silent");
    assert_eq!(state.value().selection, TextRange::cursor(1));
}

#[test]
fn text_edit_notifies_once_with_new_text() {
    let calls = RefCell::new(Vec::<String>::new());
    let mut state = typed_abc();
    let mut field = StringField::new("abc", |text| calls.borrow_mut().push(text));
    field.apply_edit(
        FieldValue::new("abcd").with_selection(TextRange::cursor(4)),
        &mut state,
    );
    drop(field);

    assert_eq!(*calls.borrow(), vec!["abcd".to_string()]);
    assert_eq!(state.value().text, "abcd");
}

#[test]
fn arrow_keys_move_cursor_silently() {
    let mut calls = 0;
    let mut state = typed_abc();
    let mut field = StringField::new("abc", |_| calls += 1);
    assert_eq!(
        field.handle_key(&press(KeyCode::Left), &mut state),
        FieldEvent::Edited
    );
    assert_eq!(
        field.handle_key(&press(KeyCode::Left), &mut state),
        FieldEvent::Edited
    );
    drop(field);

    assert_eq!(calls, 0);
    assert_eq!(state.value().selection, TextRange::cursor(1));
}

#[test]
fn typing_notifies_with_full_text() {
    let mut state = typed_abc();
    let mut received = Vec::new();
    let mut field = StringField::new("abc", |next| received.push(next));
    field.handle_key(&press(KeyCode::Char('d')), &mut state);
    drop(field);

    assert_eq!(received, vec!["abcd".to_string()]);
    assert_eq!(state.effective_value("abcd").selection, TextRange::cursor(4));
}

#[test]
fn external_update_keeps_retained_selection() {
    let mut state = StringFieldState::new("hello");
    let mut field = StringField::new("hello", |_| {});
    field.apply_edit(
        FieldValue::new("hello")
            .with_selection(TextRange::new(1, 3))
            .with_composition(Some(TextRange::new(0, 2))),
        &mut state,
    );
    drop(field);

    // The owner replaces the string without going through the field.
    let effective = state.effective_value("jello world");
    assert_eq!(effective.text, "jello world");
    assert_eq!(effective.selection, TextRange::new(1, 3));
    assert_eq!(effective.composition, Some(TextRange::new(0, 2)));

    let shrunk = state.effective_value("j");
    assert_eq!(shrunk.selection, TextRange::new(1, 1));
}

#[test]
fn edit_after_external_update_starts_from_retained_cursor() {
    let mut state = StringFieldState::new("abc");
    let mut field = StringField::new("abc", |_| {});
    field.apply_edit(
        FieldValue::new("abc").with_selection(TextRange::cursor(1)),
        &mut state,
    );
    drop(field);

    let mut received = None;
    let mut field = StringField::new("xyz", |text| received = Some(text));
    field.handle_key(&press(KeyCode::Char('!')), &mut state);
    drop(field);

    assert_eq!(received.as_deref(), Some("x!yz"));
}

#[test]
fn paste_reports_new_text() {
    let mut received = None;
    let mut state = StringFieldState::default();
    let mut field = StringField::new("", |text| received = Some(text));
    assert_eq!(field.handle_paste("pasted", &mut state), FieldEvent::Edited);
    drop(field);

    assert_eq!(received.as_deref(), Some("pasted"));
    assert_eq!(state.value().cursor(), 6);
}
