use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Left,
    Right,
    WordLeft,
    WordRight,
    Up,
    Down,
    LineStart,
    LineEnd,
    Start,
    End,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    Insert(String),
    Newline,
    DeleteBackward,
    DeleteForward,
    DeleteWordBackward,
    Move { motion: Motion, extend: bool },
    SelectAll,
    ImeAction,
    None,
}

pub fn classify(key: &KeyEvent, single_line: bool) -> EditCommand {
    if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
        return EditCommand::None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let extend = key.modifiers.contains(KeyModifiers::SHIFT);

    if ctrl {
        return match key.code {
            KeyCode::Char('a') | KeyCode::Char('A') => EditCommand::SelectAll,
            KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Backspace => {
                EditCommand::DeleteWordBackward
            }
            KeyCode::Left => EditCommand::Move {
                motion: Motion::WordLeft,
                extend,
            },
            KeyCode::Right => EditCommand::Move {
                motion: Motion::WordRight,
                extend,
            },
            KeyCode::Home => EditCommand::Move {
                motion: Motion::Start,
                extend,
            },
            KeyCode::End => EditCommand::Move {
                motion: Motion::End,
                extend,
            },
            _ => EditCommand::None,
        };
    }

    let motion = |motion| EditCommand::Move { motion, extend };
    match key.code {
        KeyCode::Char(ch) => EditCommand::Insert(ch.to_string()),
        KeyCode::Enter if single_line => EditCommand::ImeAction,
        KeyCode::Enter => EditCommand::Newline,
        KeyCode::Backspace => EditCommand::DeleteBackward,
        KeyCode::Delete => EditCommand::DeleteForward,
        KeyCode::Left => motion(Motion::Left),
        KeyCode::Right => motion(Motion::Right),
        KeyCode::Up => motion(Motion::Up),
        KeyCode::Down => motion(Motion::Down),
        KeyCode::Home => motion(Motion::LineStart),
        KeyCode::End => motion(Motion::LineEnd),
        _ => EditCommand::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn enter_depends_on_line_mode() {
        let enter = key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(classify(&enter, true), EditCommand::ImeAction);
        assert_eq!(classify(&enter, false), EditCommand::Newline);
    }

    #[test]
    fn shift_extends_and_ctrl_jumps_words() {
        let shifted = key(KeyCode::Left, KeyModifiers::SHIFT);
        assert_eq!(
            classify(&shifted, false),
            EditCommand::Move {
                motion: Motion::Left,
                extend: true
            }
        );
        let word = key(KeyCode::Right, KeyModifiers::CONTROL | KeyModifiers::SHIFT);
        assert_eq!(
            classify(&word, false),
            EditCommand::Move {
                motion: Motion::WordRight,
                extend: true
            }
        );
    }

    #[test]
    fn unknown_control_chords_are_ignored() {
        let chord = key(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(classify(&chord, false), EditCommand::None);
    }

    #[test]
    fn releases_are_ignored() {
        let mut release = key(KeyCode::Char('x'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(classify(&release, false), EditCommand::None);
    }
}
