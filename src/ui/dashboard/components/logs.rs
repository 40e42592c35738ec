//! Logs tab component
//!
//! Renders framework log entries, newest first.

use super::super::state::DashboardState;
use super::super::utils::{format_compact_timestamp, log_severity_color};

use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_logs_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    // Account for borders and padding
    let max_lines = (area.height.saturating_sub(3)) as usize;
    let line_count = max_lines.max(1);

    let log_lines: Vec<Line> = state
        .logs
        .iter()
        .take(line_count)
        .map(|entry| {
            Line::from(vec![
                Span::styled(
                    format!("{} ", format_compact_timestamp(&entry.time)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{} ", entry.level),
                    Style::default().fg(log_severity_color(entry.level)),
                ),
                Span::raw(entry.message.clone()),
            ])
        })
        .collect();

    let paragraph = if log_lines.is_empty() {
        Paragraph::new(vec![Line::from("Select this tab again to load logs...")])
    } else {
        Paragraph::new(log_lines)
    };

    let block = Block::default()
        .title("LOGS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    f.render_widget(paragraph.block(block).wrap(Wrap { trim: true }), area);
}
