//! Event System
//!
//! Typed events flowing from the dashboard worker to the display state.

use crate::logging::{should_log_with_env, LogLevel};
use crate::models::{LogEntry, Plugin, SystemInfo, TestResults};
use chrono::Local;
use std::fmt::Display;

/// The fetch routine an event originated from.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Fetcher {
    /// Host/system information fetch routine.
    System,
    /// Test results fetch routine (including on-demand suite runs).
    Tests,
    /// Plugin registry fetch routine.
    Plugins,
    /// Log store fetch routine, loaded only when its tab is selected.
    Logs,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    Waiting,
}

/// Payload attached to events that carry fresh data for a display region.
#[derive(Debug, Clone, PartialEq)]
pub enum DataUpdate {
    System(SystemInfo),
    Tests(TestResults),
    Plugins(Vec<Plugin>),
    Logs(Vec<LogEntry>),
    /// A full refresh completed at the given local timestamp. Emitted
    /// unconditionally, even when individual fetch routines failed.
    RefreshedAt(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub fetcher: Fetcher,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    /// Optional data payload for display updates.
    pub update: Option<DataUpdate>,
}

impl Event {
    fn new(fetcher: Fetcher, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            fetcher,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            update: None,
        }
    }

    /// A successful fetch carrying new data for its display region.
    pub fn data(fetcher: Fetcher, msg: String, update: DataUpdate) -> Self {
        Self {
            update: Some(update),
            ..Self::new(fetcher, msg, EventType::Success, LogLevel::Debug)
        }
    }

    /// Marks the completion of a full refresh cycle.
    pub fn refresh_completed() -> Self {
        let now = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        Self {
            fetcher: Fetcher::System,
            msg: "Dashboard data refreshed".to_string(),
            timestamp: now.clone(),
            event_type: EventType::Refresh,
            log_level: LogLevel::Info,
            update: Some(DataUpdate::RefreshedAt(now)),
        }
    }

    pub fn with_level(
        fetcher: Fetcher,
        msg: String,
        event_type: EventType,
        log_level: LogLevel,
    ) -> Self {
        Self::new(fetcher, msg, event_type, log_level)
    }

    /// Whether this event belongs in the activity display.
    pub fn should_display(&self) -> bool {
        // Always show success and refresh completions
        if self.event_type == EventType::Success && self.update.is_none() {
            return true;
        }
        if self.event_type == EventType::Refresh {
            return true;
        }
        // Data-carrying events update their region silently
        if self.update.is_some() {
            return false;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CpuLoad, Usage};

    fn sample_system_info() -> SystemInfo {
        SystemInfo {
            os: "Linux 6.12.41".to_string(),
            memory: Usage {
                used: 65,
                total: 100,
            },
            disk: Usage {
                used: 45,
                total: 100,
            },
            cpu: CpuLoad { usage: 25 },
        }
    }

    #[test]
    fn test_data_events_are_silent() {
        let event = Event::data(
            Fetcher::System,
            "System info updated".to_string(),
            DataUpdate::System(sample_system_info()),
        );
        assert!(!event.should_display());
    }

    #[test]
    fn test_refresh_completion_is_displayed() {
        let event = Event::refresh_completed();
        assert!(event.should_display());
        assert!(matches!(event.update, Some(DataUpdate::RefreshedAt(_))));
    }

    #[test]
    fn test_error_events_are_displayed_at_default_threshold() {
        let event = Event::with_level(
            Fetcher::Plugins,
            "Failed to load plugins: connection refused".to_string(),
            EventType::Error,
            LogLevel::Warn,
        );
        assert!(event.should_display());
    }

    #[test]
    fn test_display_includes_type_and_message() {
        let event = Event::with_level(
            Fetcher::Tests,
            "Test suite completed successfully".to_string(),
            EventType::Success,
            LogLevel::Info,
        );
        let rendered = event.to_string();
        assert!(rendered.starts_with("Success ["));
        assert!(rendered.ends_with("Test suite completed successfully"));
    }
}
