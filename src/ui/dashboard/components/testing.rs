//! Testing tab component

use super::super::state::DashboardState;
use super::super::utils::coverage_label;

use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

pub fn render_testing_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let block = Block::default()
        .title("TESTING")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(results) = &state.tests else {
        f.render_widget(Paragraph::new("Loading test results..."), inner);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(inner);

    let field = |title: &'static str, value: String, color: Color| {
        Paragraph::new(vec![
            Line::from(Span::styled(
                value,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(title, Style::default().fg(Color::DarkGray))),
        ])
        .alignment(Alignment::Center)
    };

    f.render_widget(
        field("Passed", results.passed.to_string(), Color::Green),
        chunks[0],
    );
    f.render_widget(
        field("Failed", results.failed.to_string(), Color::Red),
        chunks[1],
    );
    f.render_widget(
        field("Coverage", coverage_label(results), Color::Yellow),
        chunks[2],
    );
}
