//! Plugins tab component

use super::super::state::DashboardState;
use crate::models::PluginStatus;

use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_plugins_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let lines: Vec<Line> = if state.plugins.is_empty() {
        vec![Line::from("No plugins installed")]
    } else {
        state
            .plugins
            .iter()
            .flat_map(|plugin| {
                let status_color = match plugin.status {
                    PluginStatus::Active => Color::Green,
                    PluginStatus::Inactive => Color::DarkGray,
                };
                vec![
                    Line::from(vec![
                        Span::styled(
                            plugin.name.clone(),
                            Style::default().fg(Color::White),
                        ),
                        Span::raw(" "),
                        Span::styled(plugin.version.clone(), Style::default().fg(Color::DarkGray)),
                        Span::raw(" "),
                        Span::styled(plugin.status.to_string(), Style::default().fg(status_color)),
                    ]),
                    Line::from(Span::styled(
                        format!("  {}", plugin.description),
                        Style::default().fg(Color::Gray),
                    )),
                ]
            })
            .collect()
    };

    let block = Block::default()
        .title("PLUGINS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
}
