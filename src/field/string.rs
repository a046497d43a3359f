use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Position, Rect},
    widgets::{StatefulWidget, Widget},
};
use tracing::trace;

use super::{FieldEvent, TextField};
use crate::{options::FieldOptions, value::FieldValue};

/// Retained state of a [`StringField`]: the last value the input primitive
/// produced. Its text is replaced by the owner's string on every use, so
/// only the selection and composition carry over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringFieldState {
    value: FieldValue,
}

impl StringFieldState {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            value: FieldValue::new(text),
        }
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    /// The value the field shows for the owner's current `text`.
    pub fn effective_value(&self, text: &str) -> FieldValue {
        self.value.with_text(text)
    }
}

/// A text field driven by a plain string.
///
/// The owner keeps the string and a [`StringFieldState`]. The callback only
/// fires when an edit changes the text; moving the cursor or the selection
/// updates the state silently.
pub struct StringField<'a> {
    value: &'a str,
    on_value_change: Box<dyn FnMut(String) + 'a>,
    options: FieldOptions,
}

impl<'a> StringField<'a> {
    pub fn new(value: &'a str, on_value_change: impl FnMut(String) + 'a) -> Self {
        Self {
            value,
            on_value_change: Box::new(on_value_change),
            options: FieldOptions::default(),
        }
    }

    pub fn with_options(mut self, options: FieldOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &FieldOptions {
        &self.options
    }

    pub fn height(&self, state: &StringFieldState) -> u16 {
        let effective = state.effective_value(self.value);
        self.view(&effective).height()
    }

    pub fn cursor_position(&self, area: Rect, state: &StringFieldState) -> Option<Position> {
        let effective = state.effective_value(self.value);
        self.view(&effective).cursor_position(area)
    }

    pub fn draw(&self, frame: &mut Frame<'_>, area: Rect, state: &StringFieldState) {
        let effective = state.effective_value(self.value);
        self.view(&effective).draw(frame, area);
    }

    pub fn handle_key(&mut self, key: &KeyEvent, state: &mut StringFieldState) -> FieldEvent {
        self.with_field(state, |field| field.handle_key(key))
    }

    pub fn handle_paste(&mut self, text: &str, state: &mut StringFieldState) -> FieldEvent {
        self.with_field(state, |field| field.handle_paste(text))
    }

    /// Takes a value produced by the input primitive: always retained, and
    /// reported to the owner only when its text differs from the string.
    pub fn apply_edit(&mut self, value: FieldValue, state: &mut StringFieldState) {
        self.with_field(state, |field| field.apply_edit(value));
    }

    /// A render-only field over `effective`; its callback is never reached.
    fn view<'v>(&self, effective: &'v FieldValue) -> TextField<'v> {
        TextField::new(effective, |_| {}).with_options(self.options.clone())
    }

    fn with_field<R>(
        &mut self,
        state: &mut StringFieldState,
        run: impl FnOnce(&mut TextField<'_>) -> R,
    ) -> R {
        let effective = state.effective_value(self.value);
        let current = self.value;
        let retained = &mut state.value;
        let on_value_change = &mut self.on_value_change;
        let mut field = TextField::new(&effective, |next: FieldValue| {
            if next.text == current {
                trace!("selection changed without text edit");
                *retained = next;
            } else {
                let text = next.text.clone();
                *retained = next;
                on_value_change(text);
            }
        })
        .with_options(self.options.clone());
        run(&mut field)
    }
}

impl StatefulWidget for &StringField<'_> {
    type State = StringFieldState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let effective = state.effective_value(self.value);
        self.view(&effective).render(area, buf);
    }
}

impl StatefulWidget for StringField<'_> {
    type State = StringFieldState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        StatefulWidget::render(&self, area, buf, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::TextRange;

    #[test]
    fn state_starts_with_cursor_at_zero() {
        let state = StringFieldState::new("abc");
        assert_eq!(state.value().selection, TextRange::cursor(0));
    }

    #[test]
    fn effective_value_takes_owner_text() {
        let mut state = StringFieldState::new("abc");
        let mut field = StringField::new("abc", |_| {});
        field.apply_edit(
            FieldValue::new("abc").with_selection(TextRange::new(1, 3)),
            &mut state,
        );
        let effective = state.effective_value("xy");
        assert_eq!(effective.text, "xy");
        assert_eq!(effective.selection, TextRange::new(1, 2));
    }
}
