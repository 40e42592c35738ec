//! Dashboard header component
//!
//! Renders the title line and the last-refreshed timestamp.

use super::super::state::DashboardState;

use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!("DOTFILES DASHBOARD v{}", version))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let refreshed_text = match &state.last_refreshed {
        Some(timestamp) => format!("Last updated: {}", timestamp),
        None => "Last updated: never".to_string(),
    };
    let refreshed = Paragraph::new(refreshed_text)
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(refreshed, header_chunks[1]);
}
