//! Terminal lifecycle: raw mode, alternate screen, and event polling.

use anyhow::{Context, Result};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{stdout, Stdout};
use std::time::Duration;

/// Owns the terminal while the TUI is running
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let terminal =
            Terminal::new(CrosstermBackend::new(stdout())).context("Failed to open terminal")?;
        Ok(Self { terminal })
    }

    /// Switch to raw mode and the alternate screen
    ///
    /// If any step fails the terminal is restored before the error is returned.
    pub fn enter(&mut self) -> Result<()> {
        let result = self.try_enter();
        restore_on_error(result, || self.exit())
    }

    fn try_enter(&mut self) -> Result<()> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Restore the terminal to its normal state
    pub fn exit(&mut self) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(stdout(), LeaveAlternateScreen, DisableMouseCapture)
            .context("Failed to leave alternate screen")?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Wait up to `timeout` for an input event
    pub fn poll_event(&self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

/// Run `restore` when `result` is an error, keeping the original error
fn restore_on_error<T>(result: Result<T>, restore: impl FnOnce() -> Result<()>) -> Result<T> {
    if let Err(e) = &result {
        if let Err(restore_err) = restore() {
            tracing::error!("Failed to restore terminal after {:#}: {:#}", e, restore_err);
        }
    }
    result
}

/// Restore the terminal before the default panic output is printed
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}
