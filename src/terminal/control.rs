//! Terminal control capability: the thin OS seam the screen manager calls.
//!
//! The manager never touches raw-mode or escape-sequence details itself;
//! everything goes through this trait. Tests substitute a recording mock,
//! production uses [`CrosstermTerminal`].

use std::io::{self, Write};

use crossterm::{
    cursor,
    execute,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

/// Low-level terminal operations the draw engine depends on.
pub trait TerminalControl {
    /// Switch to the alternate screen buffer.
    fn enter_alt_screen(&mut self) -> io::Result<()>;
    /// Return to the normal screen buffer.
    fn leave_alt_screen(&mut self) -> io::Result<()>;
    /// Clear the visible screen.
    fn clear(&mut self) -> io::Result<()>;
    /// Clear the screen and the scrollback.
    fn hard_clear(&mut self) -> io::Result<()>;
    /// Hide the cursor.
    fn hide_cursor(&mut self) -> io::Result<()>;
    /// Show the cursor.
    fn show_cursor(&mut self) -> io::Result<()>;
    /// Current viewport size as `(width, height)` in cells.
    fn size(&self) -> io::Result<(u16, u16)>;
    /// Move the cursor to a 0-indexed (x, y) cell.
    fn move_to(&mut self, x: u16, y: u16) -> io::Result<()>;
    /// Leave raw mode, restoring line-buffered input.
    fn set_cooked(&mut self) -> io::Result<()>;
    /// Enable or disable input echo.
    fn set_echo(&mut self, on: bool) -> io::Result<()>;
}

/// Crossterm-backed terminal control writing to stdout.
#[derive(Debug, Default)]
pub struct CrosstermTerminal;

impl CrosstermTerminal {
    /// Create a new stdout-backed terminal controller.
    pub const fn new() -> Self {
        Self
    }
}

impl TerminalControl for CrosstermTerminal {
    fn enter_alt_screen(&mut self) -> io::Result<()> {
        execute!(io::stdout(), EnterAlternateScreen)
    }

    fn leave_alt_screen(&mut self) -> io::Result<()> {
        execute!(io::stdout(), LeaveAlternateScreen)
    }

    fn clear(&mut self) -> io::Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), cursor::MoveTo(0, 0))
    }

    fn hard_clear(&mut self) -> io::Result<()> {
        execute!(
            io::stdout(),
            Clear(ClearType::All),
            Clear(ClearType::Purge),
            cursor::MoveTo(0, 0)
        )
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        execute!(io::stdout(), cursor::Hide)
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        execute!(io::stdout(), cursor::Show)
    }

    fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    fn move_to(&mut self, x: u16, y: u16) -> io::Result<()> {
        execute!(io::stdout(), cursor::MoveTo(x, y))
    }

    fn set_cooked(&mut self) -> io::Result<()> {
        if terminal::is_raw_mode_enabled()? {
            terminal::disable_raw_mode()?;
        }
        io::stdout().flush()
    }

    fn set_echo(&mut self, on: bool) -> io::Result<()> {
        // Echo is part of cooked mode on POSIX terminals; crossterm exposes
        // no separate toggle, so restoring echo means leaving raw mode.
        if on && terminal::is_raw_mode_enabled()? {
            terminal::disable_raw_mode()?;
        }
        Ok(())
    }
}
