use std::io;

use crossterm::event::{self, Event};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::calendar::CalendarDate;
use crate::keymap;
use crate::picker::{CursorState, NavigationCommand};
use crate::ui;

mod terminal;

pub(crate) type TuiTerminal = Terminal<CrosstermBackend<io::Stderr>>;

/// How a picker session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user confirmed a date.
    Selected(CalendarDate),
    /// The user quit without confirming. Not an error.
    Cancelled,
}

/// Runs the picker event/render loop until the user confirms or quits.
///
/// One iteration per event: draw the current state, block on the next key,
/// map it, fold the command into the state. There is no timeout; the loop
/// waits indefinitely for input.
///
/// # Errors
/// Returns an error when the process is not attached to an interactive
/// terminal or when terminal setup, rendering, or event reading fails.
pub fn run(initial: CursorState) -> io::Result<SessionOutcome> {
    terminal::ensure_interactive()?;

    let _terminal_guard = terminal::TerminalGuard;
    let mut terminal = terminal::setup_terminal()?;

    run_session_loop(&mut terminal, initial)
}

fn run_session_loop(
    terminal: &mut TuiTerminal,
    initial: CursorState,
) -> io::Result<SessionOutcome> {
    let mut state = initial;

    loop {
        terminal.draw(|frame| ui::render(frame, &state))?;

        // Resize and other non-key events fall through to the next draw.
        let Event::Key(key) = event::read()? else {
            continue;
        };

        match keymap::map_key(key) {
            Some(NavigationCommand::Quit) => return Ok(SessionOutcome::Cancelled),
            Some(NavigationCommand::Confirm) => {
                state = state.apply(NavigationCommand::Confirm);
                if let Some(date) = state.selected {
                    return Ok(SessionOutcome::Selected(date));
                }
            }
            Some(command) => state = state.apply(command),
            None => {}
        }
    }
}
