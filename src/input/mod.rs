//! Terminal text-input primitive.
//!
//! Turns `crossterm` key and paste events into new [`FieldValue`]s. The
//! field widgets hand their passthrough parameters to it as an
//! [`InputBehavior`] and forward whatever it produces.

pub mod edit;
pub mod interaction;
pub mod keyboard;
pub mod keymap;
pub mod transform;

use crossterm::event::KeyEvent;

use crate::value::FieldValue;

pub use interaction::{Interaction, InteractionSource};
pub use keyboard::{
    ActionHandler, Capitalization, ImeAction, KeyboardActions, KeyboardOptions, KeyboardType,
};
pub use keymap::{EditCommand, Motion};
pub use transform::VisualTransformation;

/// The parameters of a field that affect editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputBehavior {
    pub enabled: bool,
    pub read_only: bool,
    pub single_line: bool,
    pub keyboard_options: KeyboardOptions,
}

impl Default for InputBehavior {
    fn default() -> Self {
        Self {
            enabled: true,
            read_only: false,
            single_line: false,
            keyboard_options: KeyboardOptions::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Changed(FieldValue),
    Action(ImeAction),
    Ignored,
}

pub fn handle_key(value: &FieldValue, key: &KeyEvent, behavior: &InputBehavior) -> KeyOutcome {
    let command = keymap::classify(key, behavior.single_line);
    if command == EditCommand::ImeAction {
        return if behavior.enabled {
            KeyOutcome::Action(behavior.keyboard_options.ime_action)
        } else {
            KeyOutcome::Ignored
        };
    }
    match edit::apply(value, &command, behavior) {
        Some(next) => KeyOutcome::Changed(next),
        None => KeyOutcome::Ignored,
    }
}

pub fn handle_paste(value: &FieldValue, text: &str, behavior: &InputBehavior) -> KeyOutcome {
    match edit::apply(value, &EditCommand::Insert(text.to_string()), behavior) {
        Some(next) => KeyOutcome::Changed(next),
        None => KeyOutcome::Ignored,
    }
}
