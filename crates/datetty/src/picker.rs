use crate::calendar::CalendarDate;

// Grid-cursor step sizes: vertical moves jump one calendar row, horizontal
// moves one day.
const WEEK_STEP: i32 = 7;
const DAY_STEP: i32 = 1;

/// A command accepted by the picker, produced by the input mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationCommand {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Confirm,
    Quit,
}

/// An immutable snapshot of the picker.
///
/// Every accepted command produces a new snapshot via [`CursorState::apply`];
/// nothing is mutated in place, so transitions are testable without a live
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorState {
    /// The date the grid cursor rests on.
    pub focused: CalendarDate,
    /// Month currently displayed; equals `focused.month` while uncommitted.
    pub visible_month: u8,
    /// Year currently displayed; equals `focused.year` while uncommitted.
    pub visible_year: i32,
    /// True once the user has confirmed a date. Terminal: no later command
    /// changes the state.
    pub committed: bool,
    /// The confirmed date; `Some` exactly when `committed`.
    pub selected: Option<CalendarDate>,
}

impl CursorState {
    /// Creates the session-start state focused on `focused`.
    pub fn new(focused: CalendarDate) -> Self {
        Self {
            focused,
            visible_month: focused.month,
            visible_year: focused.year,
            committed: false,
            selected: None,
        }
    }

    /// Folds one command into the state, returning the next snapshot.
    ///
    /// A committed state is terminal and is returned unchanged for every
    /// command. `Quit` never changes the state either; the session driver
    /// treats it as an out-of-band termination signal.
    #[must_use]
    pub fn apply(self, command: NavigationCommand) -> Self {
        if self.committed {
            return self;
        }

        match command {
            NavigationCommand::MoveUp => self.moved(-WEEK_STEP),
            NavigationCommand::MoveDown => self.moved(WEEK_STEP),
            NavigationCommand::MoveLeft => self.moved(-DAY_STEP),
            NavigationCommand::MoveRight => self.moved(DAY_STEP),
            NavigationCommand::Confirm => Self {
                committed: true,
                selected: Some(self.focused),
                ..self
            },
            NavigationCommand::Quit => self,
        }
    }

    // The visible month always follows the cursor: after every move it is
    // recomputed from the new focused date.
    fn moved(self, delta_days: i32) -> Self {
        let focused = self.focused.add_days(delta_days);

        Self {
            focused,
            visible_month: focused.month,
            visible_year: focused.year,
            ..self
        }
    }
}
