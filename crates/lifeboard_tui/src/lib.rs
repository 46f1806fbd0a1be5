pub mod board;
pub mod status;

pub use board::BoardWidget;
pub use status::StatusLine;

use anyhow::Result;
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::{Frame, Terminal};
use std::io::{self, Stdout};

/// Whether the terminal reports mouse events. Drag painting needs `On`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseCapture {
    On,
    Off,
}

/// Terminal guard for the board screen.
///
/// [`Tui::enter`] switches to the alternate screen in raw mode. The terminal
/// is restored once, by [`Tui::leave`] or when the guard is dropped,
/// whichever comes first.
pub struct Tui<B: Backend = CrosstermBackend<Stdout>> {
    terminal: Terminal<B>,
    mouse: MouseCapture,
    active: bool,
}

impl Tui {
    pub fn enter(mouse: MouseCapture) -> Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        let mut tui = Self::with_terminal(terminal, mouse);
        // Marked active first so a failure part way through still restores.
        tui.active = true;
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        if mouse == MouseCapture::On {
            execute!(io::stdout(), EnableMouseCapture)?;
        }
        tui.terminal.clear()?;
        Ok(tui)
    }
}

impl<B: Backend> Tui<B> {
    fn with_terminal(terminal: Terminal<B>, mouse: MouseCapture) -> Self {
        Self {
            terminal,
            mouse,
            active: false,
        }
    }

    pub fn mouse(&self) -> MouseCapture {
        self.mouse
    }

    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }

    /// Restores the terminal, reporting any failure.
    pub fn leave(mut self) -> Result<()> {
        self.restore()
    }

    fn restore(&mut self) -> Result<()> {
        if !std::mem::replace(&mut self.active, false) {
            return Ok(());
        }
        disable_raw_mode()?;
        if self.mouse == MouseCapture::On {
            execute!(io::stdout(), DisableMouseCapture)?;
        }
        execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;
        Ok(())
    }
}

impl<B: Backend> Drop for Tui<B> {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
