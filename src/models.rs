//! Data categories displayed by the dashboard
//!
//! These mirror the JSON payloads of the backend collaborator API
//! (`/api/system`, `/api/tests`, `/api/plugins`, `/api/logs`).

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Usage of a bounded resource. `used` is a percentage (0-100);
/// `total` is the capacity in GB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub used: u8,
    pub total: u64,
}

impl Usage {
    /// Percentage used, clamped to the displayable range.
    pub fn percent(&self) -> u16 {
        (self.used as u16).min(100)
    }
}

/// Instantaneous CPU load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuLoad {
    pub usage: u8,
}

/// Host information shown on the system tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInfo {
    pub os: String,
    pub memory: Usage,
    pub disk: Usage,
    pub cpu: CpuLoad,
}

/// Outcome of the most recent test-suite run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResults {
    pub passed: u32,
    pub failed: u32,
    /// Line coverage percentage (0-100).
    pub coverage: u8,
}

/// Whether a plugin is currently loaded by the framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PluginStatus {
    Active,
    Inactive,
}

/// A plugin registered with the framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plugin {
    pub name: String,
    pub description: String,
    pub version: String,
    pub status: PluginStatus,
}

/// Severity of a framework log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum LogSeverity {
    Info,
    Warning,
    Error,
}

/// One line from the framework log store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub time: String,
    pub level: LogSeverity,
    pub message: String,
}

impl Display for LogEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.time, self.level, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_percent_clamps() {
        let usage = Usage {
            used: 65,
            total: 100,
        };
        assert_eq!(usage.percent(), 65);

        let overfull = Usage {
            used: 130,
            total: 100,
        };
        assert_eq!(overfull.percent(), 100);
    }

    #[test]
    fn test_plugin_deserializes_from_api_shape() {
        let json = r#"{
            "name": "Example Plugin",
            "description": "A sample plugin demonstrating the framework",
            "version": "v1.0.0",
            "status": "active"
        }"#;
        let plugin: Plugin = serde_json::from_str(json).unwrap();
        assert_eq!(plugin.status, PluginStatus::Active);
        assert_eq!(plugin.version, "v1.0.0");
    }

    #[test]
    fn test_log_severity_uppercase_wire_format() {
        let entry: LogEntry = serde_json::from_str(
            r#"{"time": "2024-01-15 10:30:45", "level": "WARNING", "message": "Plugin update available"}"#,
        )
        .unwrap();
        assert_eq!(entry.level, LogSeverity::Warning);
        assert_eq!(entry.level.to_string(), "WARNING");
    }
}
