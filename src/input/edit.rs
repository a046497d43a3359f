use std::borrow::Cow;

use super::keymap::{EditCommand, Motion};
use super::{InputBehavior, keyboard::KeyboardOptions};
use crate::value::{FieldValue, TextRange, byte_index};

/// Applies `command` to `value`. Returns `None` when the value would not
/// change, including every command on a disabled field and content edits on
/// a read-only one.
pub fn apply(
    value: &FieldValue,
    command: &EditCommand,
    behavior: &InputBehavior,
) -> Option<FieldValue> {
    if !behavior.enabled {
        return None;
    }
    let value = value.with_text(value.text.as_str());
    let editable = !behavior.read_only;

    let next = match command {
        EditCommand::Insert(text) if editable => {
            insert(&value, text, &behavior.keyboard_options, behavior.single_line)
        }
        EditCommand::Newline if editable && !behavior.single_line => {
            insert(&value, "\n", &behavior.keyboard_options, false)
        }
        EditCommand::DeleteBackward if editable => delete_backward(&value),
        EditCommand::DeleteForward if editable => delete_forward(&value),
        EditCommand::DeleteWordBackward if editable => delete_word_backward(&value),
        EditCommand::Move { motion, extend } => move_selection(&value, *motion, *extend),
        EditCommand::SelectAll => value
            .clone()
            .with_selection(TextRange::new(0, value.char_len())),
        _ => return None,
    };

    (next != value).then_some(next)
}

fn insert(value: &FieldValue, text: &str, options: &KeyboardOptions, single_line: bool) -> FieldValue {
    let start = value.selection.min();
    let before = &value.text[..byte_index(&value.text, start)];
    let text = normalize_line_breaks(text);
    let mut shaped = options.shape_input(before, &text);
    if single_line {
        shaped = shaped.replace('\n', " ");
    }
    // A fully filtered insert leaves the selection alone.
    if shaped.is_empty() {
        return value.clone();
    }
    let inserted = shaped.chars().count();
    replace_range(value, value.selection.min(), value.selection.max(), &shaped)
        .with_selection(TextRange::cursor(start + inserted))
}

/// Folds `\r\n` and lone `\r` into `\n`.
fn normalize_line_breaks(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

fn delete_backward(value: &FieldValue) -> FieldValue {
    let selection = value.selection;
    if !selection.collapsed() {
        return replace_range(value, selection.min(), selection.max(), "")
            .with_selection(TextRange::cursor(selection.min()));
    }
    let cursor = selection.end;
    if cursor == 0 {
        return value.clone();
    }
    replace_range(value, cursor - 1, cursor, "").with_selection(TextRange::cursor(cursor - 1))
}

fn delete_forward(value: &FieldValue) -> FieldValue {
    let selection = value.selection;
    if !selection.collapsed() {
        return replace_range(value, selection.min(), selection.max(), "")
            .with_selection(TextRange::cursor(selection.min()));
    }
    let cursor = selection.end;
    if cursor >= value.char_len() {
        return value.clone();
    }
    replace_range(value, cursor, cursor + 1, "").with_selection(TextRange::cursor(cursor))
}

fn delete_word_backward(value: &FieldValue) -> FieldValue {
    if !value.selection.collapsed() {
        return delete_backward(value);
    }
    let cursor = value.selection.end;
    let start = word_left(&value.text, cursor);
    if start == cursor {
        return value.clone();
    }
    replace_range(value, start, cursor, "").with_selection(TextRange::cursor(start))
}

/// Replaces chars `start..end` with `replacement`. Content edits commit any
/// pending composition.
fn replace_range(value: &FieldValue, start: usize, end: usize, replacement: &str) -> FieldValue {
    let mut text = value.text.clone();
    let start_byte = byte_index(&text, start);
    let end_byte = byte_index(&text, end);
    text.replace_range(start_byte..end_byte, replacement);
    FieldValue {
        text,
        selection: TextRange::cursor(start),
        composition: None,
    }
}

fn move_selection(value: &FieldValue, motion: Motion, extend: bool) -> FieldValue {
    let selection = value.selection;
    if !extend && !selection.collapsed() {
        match motion {
            Motion::Left => return value.clone().with_selection(TextRange::cursor(selection.min())),
            Motion::Right => return value.clone().with_selection(TextRange::cursor(selection.max())),
            _ => {}
        }
    }

    let chars: Vec<char> = value.text.chars().collect();
    let focus = selection.end;
    let target = match motion {
        Motion::Left => focus.saturating_sub(1),
        Motion::Right => (focus + 1).min(chars.len()),
        Motion::WordLeft => word_left(&value.text, focus),
        Motion::WordRight => word_right(&value.text, focus),
        Motion::Up => vertical(&chars, focus, -1),
        Motion::Down => vertical(&chars, focus, 1),
        Motion::LineStart => line_start(&chars, focus),
        Motion::LineEnd => line_end(&chars, focus),
        Motion::Start => 0,
        Motion::End => chars.len(),
    };

    let next = if extend {
        TextRange::new(selection.start, target)
    } else {
        TextRange::cursor(target)
    };
    value.clone().with_selection(next)
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

pub(crate) fn word_left(text: &str, offset: usize) -> usize {
    let chars: Vec<char> = text.chars().collect();
    let mut idx = offset.min(chars.len());
    while idx > 0 && !is_word_char(chars[idx - 1]) {
        idx -= 1;
    }
    while idx > 0 && is_word_char(chars[idx - 1]) {
        idx -= 1;
    }
    idx
}

pub(crate) fn word_right(text: &str, offset: usize) -> usize {
    let chars: Vec<char> = text.chars().collect();
    let mut idx = offset.min(chars.len());
    while idx < chars.len() && !is_word_char(chars[idx]) {
        idx += 1;
    }
    while idx < chars.len() && is_word_char(chars[idx]) {
        idx += 1;
    }
    idx
}

fn line_start(chars: &[char], offset: usize) -> usize {
    chars[..offset]
        .iter()
        .rposition(|ch| *ch == '\n')
        .map(|idx| idx + 1)
        .unwrap_or(0)
}

fn line_end(chars: &[char], offset: usize) -> usize {
    chars[offset..]
        .iter()
        .position(|ch| *ch == '\n')
        .map(|idx| offset + idx)
        .unwrap_or(chars.len())
}

/// Moves one line up or down keeping the column where possible. Moving past
/// the first or last line lands on the text's start or end.
fn vertical(chars: &[char], offset: usize, delta: i32) -> usize {
    let start = line_start(chars, offset);
    let column = offset - start;
    if delta < 0 {
        if start == 0 {
            return 0;
        }
        let previous_start = line_start(chars, start - 1);
        let previous_len = start - 1 - previous_start;
        previous_start + column.min(previous_len)
    } else {
        let end = line_end(chars, offset);
        if end == chars.len() {
            return chars.len();
        }
        let next_start = end + 1;
        let next_len = line_end(chars, next_start) - next_start;
        next_start + column.min(next_len)
    }
}
