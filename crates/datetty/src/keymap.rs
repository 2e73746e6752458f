use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::picker::NavigationCommand;

/// Key bindings shown in the legend, in display order. The first
/// [`NAVIGATION_BINDING_COUNT`] entries form the navigation group.
pub const BINDINGS: &[(&str, &str)] = &[
    ("\u{2191}/k", "up"),
    ("\u{2193}/j", "down"),
    ("\u{2190}/h", "left"),
    ("\u{2192}/l", "right"),
    ("enter", "select"),
    ("q", "quit"),
];

pub const NAVIGATION_BINDING_COUNT: usize = 4;

/// Maps one raw key event to a picker command.
///
/// Total and pure: recognized presses map to `Some`, everything else
/// (releases, modified chords other than ctrl-c, unbound keys) maps to
/// `None` and is dropped by the driver.
pub fn map_key(key: KeyEvent) -> Option<NavigationCommand> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(NavigationCommand::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(NavigationCommand::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(NavigationCommand::MoveDown),
        KeyCode::Left | KeyCode::Char('h') => Some(NavigationCommand::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(NavigationCommand::MoveRight),
        KeyCode::Enter => Some(NavigationCommand::Confirm),
        KeyCode::Char('q') => Some(NavigationCommand::Quit),
        _ => None,
    }
}
