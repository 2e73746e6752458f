use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::keymap::{BINDINGS, NAVIGATION_BINDING_COUNT};
use crate::ui::Component;

const SHORT_SEPARATOR: &str = " \u{2022} ";
const FULL_COLUMN_GAP: &str = "    ";

/// How much vertical space the legend may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendDensity {
    /// One `•`-separated line.
    Short,
    /// One row per binding group.
    Full,
}

impl LegendDensity {
    pub fn height(self) -> u16 {
        match self {
            LegendDensity::Short => 1,
            LegendDensity::Full => 2,
        }
    }
}

/// Builds the single-line legend from the static binding table.
pub fn short_line() -> Line<'static> {
    let mut spans = Vec::with_capacity(BINDINGS.len() * 3);

    for (index, (key, action)) in BINDINGS.iter().enumerate() {
        if index > 0 {
            spans.push(separator());
        }
        spans.push(key_span(key));
        spans.push(action_span(action));
    }

    Line::from(spans)
}

/// Builds the expanded legend: navigation bindings on the first row, session
/// actions on the second.
pub fn full_lines() -> Vec<Line<'static>> {
    let (navigation, actions) = BINDINGS.split_at(NAVIGATION_BINDING_COUNT);

    vec![group_line(navigation), group_line(actions)]
}

fn group_line(bindings: &'static [(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(bindings.len() * 3);

    for (index, (key, action)) in bindings.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw(FULL_COLUMN_GAP));
        }
        spans.push(key_span(key));
        spans.push(action_span(action));
    }

    Line::from(spans)
}

fn key_span(key: &'static str) -> Span<'static> {
    Span::styled(key, Style::default().fg(Color::Cyan))
}

fn action_span(action: &'static str) -> Span<'static> {
    Span::styled(
        format!(" {action}"),
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::DIM),
    )
}

fn separator() -> Span<'static> {
    Span::styled(
        SHORT_SEPARATOR,
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM),
    )
}

/// The key-binding legend widget.
pub struct Legend {
    density: LegendDensity,
}

impl Legend {
    pub fn new(density: LegendDensity) -> Self {
        Self { density }
    }
}

impl Component for Legend {
    fn render(&self, f: &mut Frame, area: Rect) {
        let lines = match self.density {
            LegendDensity::Short => vec![short_line()],
            LegendDensity::Full => full_lines(),
        };

        f.render_widget(Paragraph::new(lines), area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_short_line_lists_every_binding_once() {
        // Arrange / Act
        let text = line_text(&short_line());

        // Assert
        for (key, action) in BINDINGS {
            assert!(text.contains(key), "missing key {key}");
            assert!(text.contains(action), "missing action {action}");
        }
        assert_eq!(text.matches('\u{2022}').count(), BINDINGS.len() - 1);
    }

    #[test]
    fn test_full_lines_split_navigation_from_actions() {
        // Arrange / Act
        let lines = full_lines();

        // Assert
        assert_eq!(lines.len(), 2);
        let navigation = line_text(&lines[0]);
        let actions = line_text(&lines[1]);
        assert!(navigation.contains("up"));
        assert!(navigation.contains("right"));
        assert!(!navigation.contains("select"));
        assert!(actions.contains("select"));
        assert!(actions.contains("quit"));
    }

    #[test]
    fn test_render_short_legend_fits_single_row() {
        // Arrange
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).expect("failed to create terminal");
        let legend = Legend::new(LegendDensity::Short);

        // Act
        terminal
            .draw(|f| {
                let area = f.area();
                legend.render(f, area);
            })
            .expect("failed to draw");

        // Assert
        let buffer = terminal.backend().buffer();
        let text: String = buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect();
        assert!(text.contains("select"));
        assert!(text.contains("quit"));
    }
}
