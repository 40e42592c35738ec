//! Dashboard main renderer

use super::components::{activity, footer, header, logs, plugins, system, tabs, testing};
use super::state::{DashboardState, Tab};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Percentage(35),
            Constraint::Length(1),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);
    tabs::render_tab_bar(f, main_chunks[1], state);

    match state.active_tab {
        Tab::System => system::render_system_panel(f, main_chunks[2], state),
        Tab::Testing => testing::render_testing_panel(f, main_chunks[2], state),
        Tab::Plugins => plugins::render_plugins_panel(f, main_chunks[2], state),
        Tab::Logs => logs::render_logs_panel(f, main_chunks[2], state),
    }

    activity::render_activity_panel(f, main_chunks[3], state);
    footer::render_footer(f, main_chunks[4]);
}
