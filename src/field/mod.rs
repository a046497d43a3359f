mod caption;
mod render;
mod string;

use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    widgets::Widget,
};
use tracing::{debug, trace};

use crate::{
    input::{self, ImeAction, KeyOutcome},
    options::FieldOptions,
    value::FieldValue,
};

pub use caption::{CAPTION_HEIGHT, CAPTION_PADDING_END, CAPTION_PADDING_START};
pub use string::{StringField, StringFieldState};

/// Areas of a field: the input box on top, the caption strip below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    pub input: Rect,
    pub caption: Rect,
}

/// What a key or paste event did to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    Edited,
    Action(ImeAction),
    Ignored,
}

/// A text field driven by a [`FieldValue`].
///
/// Like any immediate-mode widget it is rebuilt for every frame and every
/// event from the value the owner holds. Edits never touch that value
/// directly; they arrive through `on_value_change` and show up once the
/// owner builds the next field.
pub struct TextField<'a> {
    value: &'a FieldValue,
    on_value_change: Box<dyn FnMut(FieldValue) + 'a>,
    options: FieldOptions,
}

impl<'a> TextField<'a> {
    pub fn new(value: &'a FieldValue, on_value_change: impl FnMut(FieldValue) + 'a) -> Self {
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

    pub fn value(&self) -> &FieldValue {
        self.value
    }

    /// Splits `area` into the input box and the caption strip beneath it.
    /// Rows beyond [`TextField::height`] stay below the caption untouched.
    pub fn layout(&self, area: Rect) -> FieldLayout {
        let box_rows = self.height().saturating_sub(CAPTION_HEIGHT);
        let [input, caption, _] = Layout::vertical([
            Constraint::Length(box_rows),
            Constraint::Length(CAPTION_HEIGHT),
            Constraint::Fill(1),
        ])
        .areas(area);
        FieldLayout { input, caption }
    }

    /// Rows the field wants: the outline, the visible text rows capped by
    /// `max_lines`, and the caption strip.
    pub fn height(&self) -> u16 {
        let rows = if self.options.single_line {
            1
        } else {
            render::text_rows(self.value).min(self.options.visible_lines())
        };
        let rows = u16::try_from(rows).unwrap_or(u16::MAX);
        vertical_chrome(&self.options)
            .saturating_add(rows)
            .saturating_add(CAPTION_HEIGHT)
    }

    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        let layout = self.layout(area);
        render::cursor_position(self.value, &self.options, layout.input)
    }

    /// Renders into the frame and places the terminal cursor when focused.
    pub fn draw(&self, frame: &mut Frame<'_>, area: Rect) {
        frame.render_widget(self, area);
        if let Some(cursor) = self.cursor_position(area) {
            frame.set_cursor_position(cursor);
        }
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> FieldEvent {
        let outcome = input::handle_key(self.value, key, &self.options.input_behavior());
        self.dispatch(outcome)
    }

    pub fn handle_paste(&mut self, text: &str) -> FieldEvent {
        let outcome = input::handle_paste(self.value, text, &self.options.input_behavior());
        self.dispatch(outcome)
    }

    /// Forwards a value produced by the input primitive to the owner.
    pub fn apply_edit(&mut self, value: FieldValue) {
        trace!(
            chars = value.char_len(),
            selection_start = value.selection.start,
            selection_end = value.selection.end,
            "field value changed"
        );
        (self.on_value_change)(value);
    }

    fn dispatch(&mut self, outcome: KeyOutcome) -> FieldEvent {
        match outcome {
            KeyOutcome::Changed(value) => {
                self.apply_edit(value);
                FieldEvent::Edited
            }
            KeyOutcome::Action(action) => {
                self.perform_action(action);
                FieldEvent::Action(action)
            }
            KeyOutcome::Ignored => FieldEvent::Ignored,
        }
    }

    fn perform_action(&self, action: ImeAction) {
        debug!(?action, "ime action");
        if let Some(handler) = self.options.keyboard_actions.handler(action) {
            handler();
        } else if action == ImeAction::Done
            && let Some(source) = &self.options.interaction_source
        {
            source.blur();
        }
    }
}

impl Widget for &TextField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = self.layout(area);
        render::render_input_box(self.value, &self.options, layout.input, buf);
        caption::render_caption(&self.options, layout.caption, buf);
    }
}

impl Widget for TextField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        (&self).render(area, buf);
    }
}

/// Rows the outline and title take around the text rows.
fn vertical_chrome(options: &FieldOptions) -> u16 {
    let probe = Rect::new(0, 0, 16, 16);
    probe.height - render::input_block(options).inner(probe).height
}
