//! Activity panel component
//!
//! Renders the bounded activity list, newest first.

use super::super::state::DashboardState;
use super::super::utils::{activity_color, activity_icon, format_compact_timestamp};

use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_activity_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let max_lines = (area.height.saturating_sub(3)) as usize;
    let line_count = max_lines.max(1);

    let lines: Vec<Line> = state
        .activity()
        .iter()
        .take(line_count)
        .map(|entry| {
            Line::from(vec![
                Span::styled(
                    format!("{} ", activity_icon(entry.kind)),
                    Style::default().fg(activity_color(entry.kind)),
                ),
                Span::styled(
                    format!("{} ", format_compact_timestamp(&entry.timestamp)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(entry.message.clone()),
            ])
        })
        .collect();

    let paragraph = if lines.is_empty() {
        Paragraph::new(vec![Line::from("Starting up...")])
    } else {
        Paragraph::new(lines)
    };

    let block = Block::default()
        .title("RECENT ACTIVITY")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    f.render_widget(paragraph.block(block).wrap(Wrap { trim: true }), area);
}
