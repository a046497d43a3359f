use std::{
    io::{self, Stdout},
    sync::Once,
    time::Duration,
};

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tracing::debug;

static RESTORE_ON_PANIC: Once = Once::new();

/// The terminal while a preview runs: raw mode, alternate screen and
/// bracketed paste. Dropping it, or panicking, puts the terminal back.
pub(super) struct PreviewSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    tick_rate: Duration,
}

impl PreviewSession {
    pub(super) fn start(tick_rate: Duration) -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        execute!(io::stdout(), EnterAlternateScreen, EnableBracketedPaste)
            .context("failed to enter alternate screen")?;
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))
            .context("failed to initialize terminal")?;
        RESTORE_ON_PANIC.call_once(|| {
            let previous = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                leave_screen();
                previous(info);
            }));
        });
        Ok(Self {
            terminal,
            tick_rate,
        })
    }

    pub(super) fn draw(&mut self, render: impl FnOnce(&mut Frame<'_>)) -> Result<()> {
        self.terminal.draw(render).context("failed to draw preview")?;
        Ok(())
    }

    /// Waits up to one tick for input. Resizes are handled here, so only
    /// key and paste events reach the caller.
    pub(super) fn next_event(&mut self) -> Result<Option<Event>> {
        if !event::poll(self.tick_rate)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Resize(width, height) => {
                debug!(width, height, "terminal resized");
                self.terminal.resize(Rect::new(0, 0, width, height))?;
                Ok(None)
            }
            event @ (Event::Key(_) | Event::Paste(_)) => Ok(Some(event)),
            Event::Mouse(_) | Event::FocusGained | Event::FocusLost => Ok(None),
        }
    }
}

impl Drop for PreviewSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        leave_screen();
    }
}

fn leave_screen() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen, Show);
}
