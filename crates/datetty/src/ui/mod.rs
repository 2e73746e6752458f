pub mod legend;
pub mod month_grid;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::picker::CursorState;
use crate::ui::legend::{Legend, LegendDensity};
use crate::ui::month_grid::MonthGrid;

/// A trait for UI components that enforces a standard rendering interface.
pub trait Component {
    fn render(&self, f: &mut Frame, area: Rect);
}

/// Draws one picker frame: the month grid on top, the key legend at the
/// bottom. The legend expands to its multi-line form when the terminal is
/// tall enough.
pub fn render(f: &mut Frame, state: &CursorState) {
    let area = f.area();
    let density = legend_density(area);

    let chunks = Layout::default()
        .constraints([
            Constraint::Length(month_grid::GRID_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(density.height()),
        ])
        .margin(1)
        .split(area);

    MonthGrid::new(state).render(f, chunks[0]);
    Legend::new(density).render(f, chunks[2]);
}

// Which legend density fits is a presentation choice made here, not by the
// legend component itself.
fn legend_density(area: Rect) -> LegendDensity {
    let full_height = month_grid::GRID_HEIGHT + LegendDensity::Full.height() + 3;

    if area.height >= full_height {
        LegendDensity::Full
    } else {
        LegendDensity::Short
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::calendar::CalendarDate;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_render_draws_grid_and_legend() {
        // Arrange
        let backend = TestBackend::new(80, 12);
        let mut terminal = Terminal::new(backend).expect("failed to create terminal");
        let state = CursorState::new(CalendarDate {
            year: 2024,
            month: 3,
            day: 15,
        });

        // Act
        terminal
            .draw(|f| render(f, &state))
            .expect("failed to draw");

        // Assert
        let text = buffer_text(&terminal);
        assert!(text.contains("March 2024"));
        assert!(text.contains("Su Mo Tu We Th Fr Sa"));
        assert!(text.contains("select"));
        assert!(text.contains("quit"));
    }

    #[test]
    fn test_legend_density_follows_terminal_height() {
        // Arrange
        let short = Rect::new(0, 0, 40, 11);
        let full = Rect::new(0, 0, 40, 16);

        // Act / Assert
        assert_eq!(legend_density(short), LegendDensity::Short);
        assert_eq!(legend_density(full), LegendDensity::Full);
    }
}
