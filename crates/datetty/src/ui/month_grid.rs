use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::calendar::{self, CalendarDate};
use crate::picker::CursorState;
use crate::ui::Component;

pub const WEEK_ROW_COUNT: usize = 6;
pub const WEEKDAY_COUNT: usize = 7;
pub const GRID_CELL_COUNT: usize = WEEK_ROW_COUNT * WEEKDAY_COUNT;
/// Title line, weekday header, six week rows.
pub const GRID_HEIGHT: u16 = 8;

const CELL_WIDTH: usize = 3;
const WEEKDAY_HEADER: &str = " Su Mo Tu We Th Fr Sa";

/// One cell of the rendered month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub date: CalendarDate,
    /// False for the leading/trailing days borrowed from adjacent months.
    pub in_month: bool,
}

/// Computes the 6x7 grid of days covering the given month.
///
/// Always returns exactly [`GRID_CELL_COUNT`] cells: leading cells are
/// filled from the previous month and trailing cells from the next, so every
/// row is fully populated.
pub fn month_cells(year: i32, month: u8) -> Vec<GridCell> {
    let leading = i32::from(calendar::first_weekday_of_month(year, month));
    let first_of_month = CalendarDate {
        year,
        month,
        day: 1,
    };
    let start = first_of_month.add_days(-leading);

    (0..GRID_CELL_COUNT)
        .map(|index| {
            let date = start.add_days(i32::try_from(index).unwrap_or(0));

            GridCell {
                date,
                in_month: date.month == month && date.year == year,
            }
        })
        .collect()
}

/// The calendar month widget: title, weekday header, and six week rows with
/// the cursor (or the confirmed selection) highlighted.
pub struct MonthGrid<'a> {
    state: &'a CursorState,
}

impl<'a> MonthGrid<'a> {
    pub fn new(state: &'a CursorState) -> Self {
        Self { state }
    }

    fn cell_style(&self, cell: &GridCell) -> Style {
        if self.state.committed && self.state.selected == Some(cell.date) {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else if !self.state.committed && self.state.focused == cell.date {
            Style::default().add_modifier(Modifier::REVERSED)
        } else if cell.in_month {
            Style::default()
        } else {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM)
        }
    }
}

impl Component for MonthGrid<'_> {
    fn render(&self, f: &mut Frame, area: Rect) {
        let title = format!(
            "{} {}",
            calendar::month_name(self.state.visible_month),
            self.state.visible_year
        );
        let cells = month_cells(self.state.visible_year, self.state.visible_month);

        let mut lines = Vec::with_capacity(WEEK_ROW_COUNT + 2);
        lines.push(
            Line::from(Span::styled(
                title,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))
            .centered(),
        );
        lines.push(Line::from(Span::styled(
            WEEKDAY_HEADER,
            Style::default().fg(Color::Gray),
        )));

        for week in cells.chunks(WEEKDAY_COUNT) {
            let mut spans = Vec::with_capacity(WEEKDAY_COUNT);
            for cell in week {
                spans.push(Span::styled(
                    format!("{:>CELL_WIDTH$}", cell.date.day),
                    self.cell_style(cell),
                ));
            }
            lines.push(Line::from(spans));
        }

        f.render_widget(Paragraph::new(lines), area);
    }
}
