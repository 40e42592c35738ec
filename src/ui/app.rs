//! Main application state and UI loop

use crate::events::Event as WorkerEvent;
use crate::ui::dashboard::{render_dashboard, DashboardState, Tab};
use crate::workers::Command;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};

/// Application state
pub struct App {
    /// Dashboard display state.
    state: DashboardState,

    /// Receives events from the dashboard worker.
    event_receiver: mpsc::Receiver<WorkerEvent>,

    /// Sends commands to the dashboard worker.
    command_sender: mpsc::Sender<Command>,

    /// Broadcasts shutdown signal to the worker.
    shutdown_sender: broadcast::Sender<()>,
}

impl App {
    pub fn new(
        event_receiver: mpsc::Receiver<WorkerEvent>,
        command_sender: mpsc::Sender<Command>,
        shutdown_sender: broadcast::Sender<()>,
        initial_tab: Option<&str>,
    ) -> Self {
        let mut state = DashboardState::new();
        if let Some(name) = initial_tab {
            // Unknown tab names are silently ignored
            state.select_tab_named(name);
        }
        Self {
            state,
            event_receiver,
            command_sender,
            shutdown_sender,
        }
    }

    /// Mark a tab active and ask the worker for that tab's data.
    async fn select_tab(&mut self, tab: Tab) {
        self.state.select_tab(tab);
        let _ = self.command_sender.send(Command::SelectTab(tab)).await;
    }

    fn next_tab(&self) -> Tab {
        let current = Tab::ALL
            .iter()
            .position(|tab| *tab == self.state.active_tab)
            .unwrap_or(0);
        Tab::ALL[(current + 1) % Tab::ALL.len()]
    }
}

/// Runs the application UI in a loop, handling events and rendering the dashboard.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    loop {
        // Queue all incoming worker events for processing
        while let Ok(event) = app.event_receiver.try_recv() {
            app.state.add_event(event);
        }

        app.state.update();
        terminal.draw(|f| render_dashboard(f, &app.state))?;

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                match key.code {
                    KeyCode::Esc | KeyCode::Char('q') => {
                        let _ = app.shutdown_sender.send(());
                        return Ok(());
                    }
                    KeyCode::Char('1') => app.select_tab(Tab::System).await,
                    KeyCode::Char('2') => app.select_tab(Tab::Testing).await,
                    KeyCode::Char('3') => app.select_tab(Tab::Plugins).await,
                    KeyCode::Char('4') => app.select_tab(Tab::Logs).await,
                    KeyCode::Tab => {
                        let next = app.next_tab();
                        app.select_tab(next).await;
                    }
                    KeyCode::Char('r') => {
                        let _ = app.command_sender.send(Command::Refresh).await;
                    }
                    KeyCode::Char('t') => {
                        let _ = app.command_sender.send(Command::RunTests).await;
                    }
                    _ => {}
                }
            }
        }
    }
}
