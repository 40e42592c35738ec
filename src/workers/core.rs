//! Core worker utilities

use crate::events::{DataUpdate, Event, EventType, Fetcher};
use crate::logging::LogLevel;
use crate::ui::dashboard::Tab;
use tokio::sync::mpsc;

/// Commands sent from the UI (or headless signals) to the dashboard worker.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Command {
    /// A tab was selected; load its data category on demand.
    SelectTab(Tab),
    /// Manually triggered full refresh.
    Refresh,
    /// Execute the test suite.
    RunTests,
}

/// Common event sending utilities for the dashboard worker
#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Send a generic event
    pub async fn send_event(&self, event: Event) {
        let _ = self.sender.send(event).await;
    }

    /// Send a successful fetch result for a display region.
    pub async fn send_data(&self, fetcher: Fetcher, message: String, update: DataUpdate) {
        let _ = self.sender.send(Event::data(fetcher, message, update)).await;
    }

    /// Send a displayable status event.
    pub async fn send_status(
        &self,
        fetcher: Fetcher,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        let _ = self
            .sender
            .send(Event::with_level(fetcher, message, event_type, log_level))
            .await;
    }
}
