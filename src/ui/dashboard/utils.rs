//! Dashboard utility functions
//!
//! Label formatting and color helpers shared across components. The label
//! contract lives here so it can be asserted without a terminal.

use super::state::ActivityKind;
use crate::models::{CpuLoad, LogSeverity, TestResults, Usage};
use ratatui::prelude::Color;

/// Memory indicator label, e.g. "65% of 100GB".
pub fn memory_label(memory: &Usage) -> String {
    format!("{}% of {}GB", memory.used, memory.total)
}

/// Disk indicator label, e.g. "45% used".
pub fn disk_label(disk: &Usage) -> String {
    format!("{}% used", disk.used)
}

/// CPU indicator label, e.g. "25% usage".
pub fn cpu_label(cpu: &CpuLoad) -> String {
    format!("{}% usage", cpu.usage)
}

/// Coverage field, rendered with a percent sign: "85%".
pub fn coverage_label(results: &TestResults) -> String {
    format!("{}%", results.coverage)
}

/// Gauge color by fill ratio.
pub fn usage_color(percent: u16) -> Color {
    if percent >= 80 {
        Color::Red
    } else if percent >= 60 {
        Color::Yellow
    } else {
        Color::Green
    }
}

/// Icon shown next to an activity entry.
pub fn activity_icon(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Success => "✓",
        ActivityKind::Info => "ℹ",
        ActivityKind::Warning => "⚠",
        ActivityKind::Error => "✗",
    }
}

/// Color of an activity entry.
pub fn activity_color(kind: ActivityKind) -> Color {
    match kind {
        ActivityKind::Success => Color::Green,
        ActivityKind::Info => Color::Cyan,
        ActivityKind::Warning => Color::Yellow,
        ActivityKind::Error => Color::Red,
    }
}

/// Color of a framework log line by severity.
pub fn log_severity_color(level: LogSeverity) -> Color {
    match level {
        LogSeverity::Info => Color::Gray,
        LogSeverity::Warning => Color::Yellow,
        LogSeverity::Error => Color::Red,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            if let Some(month_day) = date_part.get(5..10) {
                if let Some(hour_min) = time_part.get(0..5) {
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_label_and_gauge_percent() {
        let memory = Usage {
            used: 65,
            total: 100,
        };
        assert_eq!(memory_label(&memory), "65% of 100GB");
        assert_eq!(memory.percent(), 65);
    }

    #[test]
    fn test_disk_and_cpu_labels() {
        assert_eq!(
            disk_label(&Usage {
                used: 45,
                total: 100
            }),
            "45% used"
        );
        assert_eq!(cpu_label(&CpuLoad { usage: 25 }), "25% usage");
    }

    #[test]
    fn test_test_results_field_rendering() {
        let results = TestResults {
            passed: 47,
            failed: 2,
            coverage: 85,
        };
        assert_eq!(results.passed.to_string(), "47");
        assert_eq!(results.failed.to_string(), "2");
        assert_eq!(coverage_label(&results), "85%");
    }

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(
            format_compact_timestamp("2024-01-15 10:30:45"),
            "01-15 10:30"
        );
        // Malformed input falls through unchanged
        assert_eq!(format_compact_timestamp("just now"), "just now");
    }
}
