use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use serde::Serialize;
use tracing::{debug, info};

use super::{Preview, PreviewOptions, session::PreviewSession, status::StatusLine};
use crate::{
    field::{FieldEvent, StringField, StringFieldState, TextField},
    input::{ImeAction, InteractionSource, KeyboardOptions, VisualTransformation},
    options::FieldOptions,
    value::FieldValue,
};

const HELP_TEXT: &str = "Tab/Shift+Tab focus • Ctrl+E toggle error • Esc quit";

#[derive(Debug)]
enum EntryContent {
    Value(FieldValue),
    Text {
        text: String,
        state: StringFieldState,
    },
}

#[derive(Debug)]
struct PreviewEntry {
    preview: Preview,
    source: InteractionSource,
    error_toggled: bool,
    content: EntryContent,
}

impl PreviewEntry {
    fn new(preview: Preview) -> Self {
        let content = if preview.is_string_driven() {
            EntryContent::Text {
                text: String::new(),
                state: StringFieldState::default(),
            }
        } else {
            EntryContent::Value(FieldValue::default())
        };
        Self {
            preview,
            source: InteractionSource::new(),
            error_toggled: false,
            content,
        }
    }

    fn text(&self) -> &str {
        match &self.content {
            EntryContent::Value(value) => &value.text,
            EntryContent::Text { text, .. } => text,
        }
    }

    fn is_error(&self) -> bool {
        self.preview.base_error(self.text()) != self.error_toggled
    }

    fn value(&self) -> FieldValue {
        match &self.content {
            EntryContent::Value(value) => value.clone(),
            EntryContent::Text { text, state } => state.effective_value(text),
        }
    }
}

enum FieldInput<'e> {
    Key(&'e KeyEvent),
    Paste(&'e str),
}

/// Final state of one preview when the runtime exits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewResult {
    pub preview: &'static str,
    pub value: FieldValue,
    pub is_error: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewReport {
    pub fields: Vec<PreviewResult>,
}

pub struct PreviewApp {
    entries: Vec<PreviewEntry>,
    focus: usize,
    options: PreviewOptions,
    status: StatusLine,
    should_quit: bool,
}

impl PreviewApp {
    pub fn new(previews: &[Preview], options: PreviewOptions) -> Self {
        let entries: Vec<PreviewEntry> = previews.iter().copied().map(PreviewEntry::new).collect();
        if let Some(first) = entries.first() {
            first.source.focus();
        }
        Self {
            entries,
            focus: 0,
            options,
            status: StatusLine::new(),
            should_quit: false,
        }
    }

    pub fn run(&mut self) -> Result<PreviewReport> {
        info!(previews = self.entries.len(), "starting preview");
        let mut session = PreviewSession::start(self.options.tick_rate)?;
        while !self.should_quit {
            session.draw(|frame| self.draw(frame))?;
            match session.next_event()? {
                Some(Event::Key(key)) => self.handle_key(key),
                Some(Event::Paste(text)) => self.handle_paste(&text),
                _ => {}
            }
        }
        info!("preview closed");
        Ok(self.report())
    }

    pub fn report(&self) -> PreviewReport {
        PreviewReport {
            fields: self
                .entries
                .iter()
                .map(|entry| PreviewResult {
                    preview: entry.preview.title(),
                    value: entry.value(),
                    is_error: entry.is_error(),
                })
                .collect(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn status_message(&self) -> &str {
        self.status.message()
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.entries
            .get(self.focus)
            .filter(|entry| entry.source.is_focused())
            .map(|_| self.focus)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
            return;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') | KeyCode::Char('C') if ctrl => self.should_quit = true,
            KeyCode::Char('e') | KeyCode::Char('E') if ctrl => self.toggle_error(),
            KeyCode::Tab => self.move_focus(1),
            KeyCode::BackTab => self.move_focus(-1),
            _ => self.route(FieldInput::Key(&key)),
        }
    }

    pub fn handle_paste(&mut self, text: &str) {
        self.route(FieldInput::Paste(text));
    }

    fn field_options(&self, entry: &PreviewEntry) -> FieldOptions {
        let mut options = entry
            .preview
            .options()
            .with_error(entry.is_error())
            .with_interaction_source(entry.source.clone());
        if self.options.single_line {
            let ime_action = if self.focus + 1 < self.entries.len() {
                ImeAction::Next
            } else {
                ImeAction::Done
            };
            options = options
                .with_single_line(true)
                .with_keyboard_options(KeyboardOptions::default().with_ime_action(ime_action));
        } else {
            options = options.with_max_lines(3);
        }
        if self.options.password && entry.preview.is_string_driven() {
            options = options.with_visual_transformation(VisualTransformation::password());
        }
        options
    }

    fn move_focus(&mut self, delta: isize) {
        if self.entries.is_empty() {
            return;
        }
        if let Some(entry) = self.entries.get(self.focus) {
            entry.source.blur();
        }
        let len = self.entries.len() as isize;
        self.focus = (self.focus as isize + delta).rem_euclid(len) as usize;
        let entry = &self.entries[self.focus];
        entry.source.focus();
        debug!(focus = self.focus, "focus moved");
        self.status.ready();
    }

    fn toggle_error(&mut self) {
        let Some(entry) = self.entries.get_mut(self.focus) else {
            return;
        };
        entry.error_toggled = !entry.error_toggled;
        let is_error = entry.is_error();
        self.status.error_toggled(entry.preview.title(), is_error);
    }

    fn route(&mut self, input: FieldInput<'_>) {
        let Some(entry) = self.entries.get(self.focus) else {
            return;
        };
        if !entry.source.is_focused() {
            return;
        }
        let options = self.field_options(entry);
        let entry = &mut self.entries[self.focus];
        let title = entry.preview.title();

        let event = match &mut entry.content {
            EntryContent::Value(value) => {
                let mut next = None;
                let mut field =
                    TextField::new(value, |changed| next = Some(changed)).with_options(options);
                let event = match input {
                    FieldInput::Key(key) => field.handle_key(key),
                    FieldInput::Paste(text) => field.handle_paste(text),
                };
                drop(field);
                if let Some(changed) = next {
                    *value = changed;
                }
                event
            }
            EntryContent::Text { text, state } => {
                let mut next = None;
                let mut field =
                    StringField::new(text, |changed| next = Some(changed)).with_options(options);
                let event = match input {
                    FieldInput::Key(key) => field.handle_key(key, state),
                    FieldInput::Paste(pasted) => field.handle_paste(pasted, state),
                };
                drop(field);
                if let Some(changed) = next {
                    *text = changed;
                }
                event
            }
        };

        match event {
            FieldEvent::Edited => self.status.editing(title),
            FieldEvent::Action(ImeAction::Next) => self.move_focus(1),
            FieldEvent::Action(ImeAction::Previous) => self.move_focus(-1),
            FieldEvent::Action(action) => self.status.action(title, &format!("{action:?}")),
            FieldEvent::Ignored => {}
        }
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let outer = Block::default()
            .title("errorfield preview")
            .borders(Borders::ALL);
        let inner = outer.inner(frame.area());
        frame.render_widget(outer, frame.area());

        let footer_rows = if self.options.show_help { 2 } else { 1 };
        let [body, footer] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(footer_rows)]).areas(inner);

        let mut constraints = Vec::with_capacity(self.entries.len() * 2 + 1);
        for entry in &self.entries {
            constraints.push(Constraint::Length(1));
            constraints.push(Constraint::Length(self.entry_height(entry)));
        }
        constraints.push(Constraint::Fill(1));
        let rows = Layout::vertical(constraints).split(body);

        for (idx, entry) in self.entries.iter().enumerate() {
            let title_style = if idx == self.focus && entry.source.is_focused() {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            };
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(entry.preview.title(), title_style))),
                rows[idx * 2],
            );
            let area = rows[idx * 2 + 1];
            let options = self.field_options(entry);
            match &entry.content {
                EntryContent::Value(value) => {
                    TextField::new(value, |_| {})
                        .with_options(options)
                        .draw(frame, area);
                }
                EntryContent::Text { text, state } => {
                    StringField::new(text, |_| {})
                        .with_options(options)
                        .draw(frame, area, state);
                }
            }
        }

        let mut footer_lines = vec![Line::from(Span::styled(
            self.status.message().to_string(),
            Style::default().fg(Color::Gray),
        ))];
        if self.options.show_help {
            footer_lines.push(Line::from(Span::styled(
                HELP_TEXT,
                Style::default().fg(Color::DarkGray),
            )));
        }
        frame.render_widget(Paragraph::new(footer_lines), footer);
    }

    fn entry_height(&self, entry: &PreviewEntry) -> u16 {
        let options = self.field_options(entry);
        match &entry.content {
            EntryContent::Value(value) => TextField::new(value, |_| {}).with_options(options).height(),
            EntryContent::Text { text, state } => {
                StringField::new(text, |_| {}).with_options(options).height(state)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut PreviewApp, text: &str) {
        for ch in text.chars() {
            app.handle_key(press(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn typing_edits_the_focused_preview() {
        let mut app = PreviewApp::new(&Preview::ALL, PreviewOptions::default());
        type_text(&mut app, "hi");
        let report = app.report();
        assert_eq!(report.fields[0].value.text, "hi");
        assert_eq!(report.fields[0].value.cursor(), 2);
        assert_eq!(report.fields[1].value.text, "");
        assert_eq!(app.status_message(), "Editing Day · Helper");
    }

    #[test]
    fn tab_moves_focus_and_wraps() {
        let mut app = PreviewApp::new(&Preview::ALL, PreviewOptions::default());
        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.focused_index(), Some(1));
        app.handle_key(press(KeyCode::BackTab));
        app.handle_key(press(KeyCode::BackTab));
        assert_eq!(app.focused_index(), Some(2));
    }

    #[test]
    fn string_preview_error_follows_text_and_toggle() {
        let mut app = PreviewApp::new(&[Preview::DayString], PreviewOptions::default());
        type_text(&mut app, "a b");
        assert!(app.report().fields[0].is_error);
        app.handle_key(KeyEvent::new(KeyCode::Char('e'), KeyModifiers::CONTROL));
        assert!(!app.report().fields[0].is_error);
        assert_eq!(app.status_message(), "Day · String: error state off");
    }

    #[test]
    fn cursor_moves_in_string_preview_are_retained() {
        let mut app = PreviewApp::new(&[Preview::DayString], PreviewOptions::default());
        type_text(&mut app, "abc");
        app.handle_key(press(KeyCode::Left));
        app.handle_key(press(KeyCode::Left));
        type_text(&mut app, "x");
        let value = &app.report().fields[0].value;
        assert_eq!(value.text, "axbc");
        assert_eq!(value.cursor(), 2);
    }

    #[test]
    fn single_line_enter_moves_to_next_preview() {
        let options = PreviewOptions::default().with_single_line(true);
        let mut app = PreviewApp::new(&Preview::ALL, options);
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.focused_index(), Some(1));
        assert_eq!(app.report().fields[0].value.text, "");
    }

    #[test]
    fn escape_quits() {
        let mut app = PreviewApp::new(&Preview::ALL, PreviewOptions::default());
        app.handle_key(press(KeyCode::Esc));
        assert!(app.should_quit());
    }

    #[test]
    fn draw_shows_titles_and_captions() {
        let app = PreviewApp::new(&Preview::ALL, PreviewOptions::default());
        let mut terminal = Terminal::new(TestBackend::new(50, 24)).expect("terminal");
        terminal.draw(|frame| app.draw(frame)).expect("draw");
        let screen: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Day · Helper"));
        assert!(screen.contains("This is an helper!"));
        assert!(screen.contains("This is an error!"));
        assert!(screen.contains("Pick a handle without spaces"));
    }
}
