//! Dashboard state update logic
//!
//! Applies queued worker events to the display state.

use super::state::{ActivityEntry, ActivityKind, DashboardState};
use crate::events::{DataUpdate, Event, EventType};
use crate::logging::LogLevel;

impl DashboardState {
    /// Advance the animation tick and process all queued events.
    pub fn update(&mut self) {
        self.tick += 1;

        while let Some(event) = self.pending_events.pop_front() {
            self.process_event(event);
        }
    }

    /// Apply a single event: data payloads replace the affected display
    /// region; displayable events become activity entries.
    fn process_event(&mut self, event: Event) {
        let displayable = event.should_display();

        if let Some(update) = &event.update {
            match update.clone() {
                DataUpdate::System(info) => self.system = Some(info),
                DataUpdate::Tests(results) => self.tests = Some(results),
                DataUpdate::Plugins(plugins) => self.plugins = plugins,
                DataUpdate::Logs(entries) => self.logs = entries,
                DataUpdate::RefreshedAt(timestamp) => self.last_refreshed = Some(timestamp),
            }
        }

        if displayable {
            self.record_activity(ActivityEntry {
                message: event.msg,
                kind: activity_kind(event.event_type, event.log_level),
                timestamp: event.timestamp,
            });
        }
    }
}

/// Map an event's type and level to the activity kind shown in the panel.
fn activity_kind(event_type: EventType, log_level: LogLevel) -> ActivityKind {
    match event_type {
        EventType::Success => ActivityKind::Success,
        EventType::Error => {
            if log_level >= LogLevel::Error {
                ActivityKind::Error
            } else {
                ActivityKind::Warning
            }
        }
        EventType::Refresh | EventType::Waiting => ActivityKind::Info,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Fetcher;
    use crate::models::{CpuLoad, SystemInfo, TestResults, Usage};

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
    fn test_data_event_updates_region_without_activity() {
        let mut state = DashboardState::new();
        state.add_event(Event::data(
            Fetcher::System,
            "System info updated".to_string(),
            DataUpdate::System(sample_system_info()),
        ));

        state.update();

        assert!(state.system.is_some());
        assert!(state.activity().is_empty());
    }

    #[test]
    fn test_refresh_completion_sets_timestamp_and_records_activity() {
        let mut state = DashboardState::new();
        state.add_event(Event::refresh_completed());

        state.update();

        assert!(state.last_refreshed.is_some());
        assert_eq!(state.activity().len(), 1);
        let entry = state.activity().front().unwrap();
        assert_eq!(entry.message, "Dashboard data refreshed");
        assert_eq!(entry.kind, ActivityKind::Info);
    }

    #[test]
    fn test_failed_fetch_leaves_display_stale() {
        let mut state = DashboardState::new();
        state.add_event(Event::data(
            Fetcher::Tests,
            "Test results updated".to_string(),
            DataUpdate::Tests(TestResults {
                passed: 47,
                failed: 2,
                coverage: 85,
            }),
        ));
        state.update();

        state.add_event(Event::with_level(
            Fetcher::Tests,
            "Failed to load test results: backend unavailable".to_string(),
            EventType::Error,
            LogLevel::Warn,
        ));
        state.update();

        // Previous data survives the failure
        assert_eq!(state.tests.unwrap().passed, 47);
        assert_eq!(
            state.activity().front().unwrap().kind,
            ActivityKind::Warning
        );
    }

    #[test]
    fn test_activity_kind_mapping() {
        assert_eq!(
            activity_kind(EventType::Success, LogLevel::Info),
            ActivityKind::Success
        );
        assert_eq!(
            activity_kind(EventType::Error, LogLevel::Error),
            ActivityKind::Error
        );
        assert_eq!(
            activity_kind(EventType::Error, LogLevel::Warn),
            ActivityKind::Warning
        );
        assert_eq!(
            activity_kind(EventType::Waiting, LogLevel::Info),
            ActivityKind::Info
        );
    }
}
