//! System tab component
//!
//! Renders OS info plus memory/disk/CPU gauges.

use super::super::state::DashboardState;
use super::super::utils::{cpu_label, disk_label, memory_label, usage_color};

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};
use ratatui::Frame;

pub fn render_system_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let block = Block::default()
        .title("SYSTEM")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(info) = &state.system else {
        f.render_widget(Paragraph::new("Loading system info..."), inner);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(2),
        ])
        .split(inner);

    let os_line = Paragraph::new(format!("OS: {}", info.os));
    f.render_widget(os_line, chunks[0]);

    // Gauge percent equals the reported used percentage
    let memory_gauge = Gauge::default()
        .block(Block::default().title("Memory"))
        .gauge_style(Style::default().fg(usage_color(info.memory.percent())))
        .percent(info.memory.percent())
        .label(memory_label(&info.memory));
    f.render_widget(memory_gauge, chunks[1]);

    let disk_gauge = Gauge::default()
        .block(Block::default().title("Disk"))
        .gauge_style(Style::default().fg(usage_color(info.disk.percent())))
        .percent(info.disk.percent())
        .label(disk_label(&info.disk));
    f.render_widget(disk_gauge, chunks[2]);

    let cpu_percent = (info.cpu.usage as u16).min(100);
    let cpu_gauge = Gauge::default()
        .block(Block::default().title("CPU"))
        .gauge_style(Style::default().fg(usage_color(cpu_percent)))
        .percent(cpu_percent)
        .label(cpu_label(&info.cpu));
    f.render_widget(cpu_gauge, chunks[3]);
}
