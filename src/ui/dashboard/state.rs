//! Dashboard display state
//!
//! Transient per-session state: the active tab, the latest value of each
//! data category, and the bounded activity list.

use crate::consts::dashboard_consts::MAX_ACTIVITY_ENTRIES;
use crate::events::Event;
use crate::models::{LogEntry, Plugin, SystemInfo, TestResults};

use std::collections::VecDeque;
use std::str::FromStr;

/// A named view region showing one data category.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Tab {
    System,
    Testing,
    Plugins,
    Logs,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::System, Tab::Testing, Tab::Plugins, Tab::Logs];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::System => "System",
            Tab::Testing => "Testing",
            Tab::Plugins => "Plugins",
            Tab::Logs => "Logs",
        }
    }
}

/// Kind of an activity entry, for icon and color selection.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ActivityKind {
    Success,
    Info,
    Warning,
    Error,
}

/// A transient log line surfaced to the user describing the outcome of an
/// action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub message: String,
    pub kind: ActivityKind,
    pub timestamp: String,
}

/// Display state owned by the dashboard for its process lifetime.
/// Nothing here is persisted; every field is recreated from fetch events.
#[derive(Debug)]
pub struct DashboardState {
    /// The currently selected tab. Exactly one tab is active at a time.
    pub active_tab: Tab,
    /// Latest system info, if any fetch has succeeded yet.
    pub system: Option<SystemInfo>,
    /// Latest test results, if any fetch has succeeded yet.
    pub tests: Option<TestResults>,
    /// Plugins registered with the framework.
    pub plugins: Vec<Plugin>,
    /// Framework log entries, loaded on demand.
    pub logs: Vec<LogEntry>,
    /// Local timestamp of the last completed full refresh.
    pub last_refreshed: Option<String>,
    /// Queue of events waiting to be processed.
    pub pending_events: VecDeque<Event>,
    /// Animation tick counter.
    pub tick: usize,

    /// Bounded activity list, newest-first.
    activity: VecDeque<ActivityEntry>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            active_tab: Tab::System,
            system: None,
            tests: None,
            plugins: Vec::new(),
            logs: Vec::new(),
            last_refreshed: None,
            pending_events: VecDeque::new(),
            tick: 0,
            activity: VecDeque::new(),
        }
    }

    /// Activity entries, newest first.
    pub fn activity(&self) -> &VecDeque<ActivityEntry> {
        &self.activity
    }

    /// Mark the given tab active.
    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Select a tab by its lowercase name. Unknown names leave the state
    /// unchanged.
    pub fn select_tab_named(&mut self, name: &str) -> Option<Tab> {
        let tab = Tab::from_str(name).ok()?;
        self.select_tab(tab);
        Some(tab)
    }

    /// Prepend an entry to the activity list, evicting the oldest once the
    /// list exceeds its capacity.
    pub fn record_activity(&mut self, entry: ActivityEntry) {
        self.activity.push_front(entry);
        self.activity.truncate(MAX_ACTIVITY_ENTRIES);
    }

    /// Queue an event for the next update pass.
    pub fn add_event(&mut self, event: Event) {
        self.pending_events.push_back(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(message: &str) -> ActivityEntry {
        ActivityEntry {
            message: message.to_string(),
            kind: ActivityKind::Info,
            timestamp: "2024-01-15 10:30:45".to_string(),
        }
    }

    #[test]
    fn test_activity_list_is_capped_at_ten() {
        let mut state = DashboardState::new();
        for i in 0..25 {
            state.record_activity(entry(&format!("activity {}", i)));
        }
        assert_eq!(state.activity().len(), 10);
    }

    #[test]
    fn test_activity_evicts_oldest_first_and_displays_newest_first() {
        let mut state = DashboardState::new();
        for i in 0..12 {
            state.record_activity(entry(&format!("activity {}", i)));
        }
        // Newest first
        assert_eq!(state.activity().front().unwrap().message, "activity 11");
        // Entries 0 and 1 were evicted
        assert_eq!(state.activity().back().unwrap().message, "activity 2");
    }

    #[test]
    fn test_select_tab_named_matches_known_tabs() {
        let mut state = DashboardState::new();
        assert_eq!(state.select_tab_named("plugins"), Some(Tab::Plugins));
        assert_eq!(state.active_tab, Tab::Plugins);
        assert_eq!(state.select_tab_named("logs"), Some(Tab::Logs));
        assert_eq!(state.active_tab, Tab::Logs);
    }

    #[test]
    fn test_select_tab_named_ignores_unknown_ids() {
        let mut state = DashboardState::new();
        state.select_tab(Tab::Testing);

        assert_eq!(state.select_tab_named("metrics"), None);
        assert_eq!(state.select_tab_named(""), None);

        // Display state unchanged
        assert_eq!(state.active_tab, Tab::Testing);
    }
}
