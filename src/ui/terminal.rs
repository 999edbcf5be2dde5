//! Terminal session resource.
//!
//! Raw mode and the alternate screen are a single exclusively-owned resource:
//! acquired once at session start, released exactly once. `Drop` guarantees
//! the release on every exit path, including error returns and unwinding
//! panics, so the user's shell is never left in raw/no-echo mode.

use crate::error::{PagerError, Result};
use ratatui::crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::io::{self, Stdout};

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Scoped raw-mode terminal session.
pub struct TerminalSession {
    terminal: CrosstermTerminal,
    restored: bool,
}

impl TerminalSession {
    /// Enter raw mode and the alternate screen. On partial failure the
    /// already-acquired half is released before the error is returned.
    pub fn enter() -> Result<Self> {
        enable_raw_mode().map_err(|e| PagerError::terminal(format!("raw mode: {e}")))?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(PagerError::terminal(format!("alternate screen: {e}")));
        }

        let terminal = Terminal::new(CrosstermBackend::new(stdout)).map_err(|e| {
            let _ = Self::release();
            PagerError::terminal(format!("backend init: {e}"))
        })?;

        Ok(Self {
            terminal,
            restored: false,
        })
    }

    /// Current terminal dimensions `(width, height)`. Usable before `enter`,
    /// which is where the Scroller gets its viewport size.
    pub fn size() -> Result<(u16, u16)> {
        ratatui::crossterm::terminal::size()
            .map_err(|e| PagerError::terminal(format!("cannot query size: {e}")))
    }

    /// Draw one full frame.
    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<()> {
        self.terminal
            .draw(render)
            .map_err(|e| PagerError::terminal(format!("draw failed: {e}")))?;
        Ok(())
    }

    /// Restore the terminal. Idempotent; also invoked by `Drop`.
    pub fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        Self::release().map_err(|e| PagerError::terminal(format!("restore failed: {e}")))
    }

    fn release() -> io::Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
