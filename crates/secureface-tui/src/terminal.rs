//! Terminal lifecycle for the login screen.
//!
//! There is no signal handler. Raw mode turns Ctrl+C into an ordinary key
//! event, which the reducer answers with `UiEffect::Quit`; the loop then
//! ends and the runtime's `Drop` calls [`restore_terminal`]. A panic takes
//! the hook installed by [`install_panic_hook`] instead.

use std::io::{self, Stdout};
use std::panic;

use anyhow::{Context, Result};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

pub type ScreenTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Puts the terminal in screen mode: raw input, alternate screen and
/// bracketed paste (so a pasted email arrives as one event).
///
/// Install the panic hook first. If a step fails, whatever was already
/// switched on is switched back off.
///
/// # Errors
/// Returns an error if any terminal mode cannot be entered.
pub fn setup_terminal() -> Result<ScreenTerminal> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let entered = execute!(io::stdout(), EnterAlternateScreen, EnableBracketedPaste)
        .context("Failed to enter alternate screen")
        .and_then(|()| {
            Terminal::new(CrosstermBackend::new(io::stdout()))
                .context("Failed to create terminal")
        });
    if entered.is_err() {
        let _ = restore_terminal();
    }
    entered
}

/// Leaves screen mode. Safe to call more than once.
///
/// # Errors
/// Returns an error if the alternate screen or raw mode cannot be left.
pub fn restore_terminal() -> Result<()> {
    // Paste mode is switched off while still in raw mode.
    let _ = execute!(io::stdout(), DisableBracketedPaste);

    execute!(io::stdout(), LeaveAlternateScreen).context("Failed to leave alternate screen")?;
    disable_raw_mode().context("Failed to disable raw mode")?;
    Ok(())
}

/// Restores the terminal before the default panic output is printed.
pub fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        previous(info);
    }));
}
