//! Tab bar component

use super::super::state::{DashboardState, Tab};

use ratatui::prelude::{Color, Style};
use ratatui::widgets::{Block, Borders, Tabs};
use ratatui::Frame;

pub fn render_tab_bar(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let titles: Vec<&str> = Tab::ALL.iter().map(|tab| tab.title()).collect();
    let selected = Tab::ALL
        .iter()
        .position(|tab| *tab == state.active_tab)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::BOTTOM));

    f.render_widget(tabs, area);
}
