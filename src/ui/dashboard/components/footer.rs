//! Dashboard footer component

use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect) {
    let footer = Paragraph::new("[1-4/Tab] Switch tab  [r] Refresh  [t] Run tests  [q/Esc] Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(footer, area);
}
