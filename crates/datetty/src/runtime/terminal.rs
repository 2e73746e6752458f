use std::io::{self, IsTerminal};

use crossterm::cursor::Show;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::runtime::TuiTerminal;

/// Restores terminal state on all exit paths after raw mode is enabled.
///
/// The session loop uses `?` on every draw and read. Without this guard, any
/// early return after entering raw mode and the alternate screen would leave
/// the user's shell in a broken state.
///
/// Keeping cleanup in `Drop` guarantees restore runs during normal exit,
/// runtime errors, and unwinding panics.
pub(crate) struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stderr = io::stderr();
        let _ = disable_raw_mode();
        let _ = execute!(stderr, LeaveAlternateScreen, Show);
    }
}

/// Fails fast when the process is not attached to an interactive terminal,
/// before any terminal mode is touched.
pub(crate) fn ensure_interactive() -> io::Result<()> {
    if !io::stdin().is_terminal() {
        return Err(io::Error::other(
            "an interactive terminal is required (stdin is not a TTY)",
        ));
    }
    if !io::stderr().is_terminal() {
        return Err(io::Error::other(
            "an interactive terminal is required (stderr is not a TTY)",
        ));
    }

    Ok(())
}

/// Enables raw mode and enters the alternate screen on stderr.
///
/// The picker draws on stderr so stdout carries nothing but the final
/// formatted date.
pub(crate) fn setup_terminal() -> io::Result<TuiTerminal> {
    enable_raw_mode()?;

    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stderr);

    Terminal::new(backend)
}
