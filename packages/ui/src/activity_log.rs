//! User-visible log of what the app did: generations, fallbacks, saves, errors.

use dioxus::prelude::*;

/// Oldest entries are dropped past this many.
pub const MAX_ENTRIES: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    pub fn is_problem(self) -> bool {
        matches!(self, LogLevel::Warning | LogLevel::Error)
    }

    pub fn class(self) -> &'static str {
        match self {
            LogLevel::Error => "activity-log-entry error",
            LogLevel::Warning => "activity-log-entry warning",
            LogLevel::Success => "activity-log-entry success",
            LogLevel::Info => "activity-log-entry info",
        }
    }
}

/// Which entries the panel lists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFilter {
    #[default]
    All,
    /// Warnings (built-in content substituted) and errors only.
    Problems,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActivityLog {
    pub entries: Vec<LogEntry>,
    pub visible: bool,
    pub filter: LogFilter,
}

impl ActivityLog {
    pub fn push(&mut self, timestamp: String, level: LogLevel, message: &str) {
        self.entries.push(LogEntry {
            timestamp,
            level,
            message: message.to_string(),
        });
        if self.entries.len() > MAX_ENTRIES {
            let excess = self.entries.len() - MAX_ENTRIES;
            self.entries.drain(..excess);
        }
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|e| e.level == LogLevel::Error)
    }

    /// Times built-in tips or steps were shown instead of generated ones.
    pub fn fallback_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.level == LogLevel::Warning)
            .count()
    }

    pub fn problem_count(&self) -> usize {
        self.entries.iter().filter(|e| e.level.is_problem()).count()
    }

    /// Entries under the current filter, newest first.
    pub fn visible_entries(&self) -> Vec<&LogEntry> {
        self.entries
            .iter()
            .rev()
            .filter(|e| match self.filter {
                LogFilter::All => true,
                LogFilter::Problems => e.level.is_problem(),
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.filter = LogFilter::All;
    }
}

pub fn use_activity_log() -> Signal<ActivityLog> {
    use_context::<Signal<ActivityLog>>()
}

pub fn log_activity(log: &mut Signal<ActivityLog>, level: LogLevel, message: &str) {
    let ts = current_time();
    log.write().push(ts, level, message);
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    "00:00:00".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_errors() {
        let mut log = ActivityLog::default();
        log.push("10:00:00".to_string(), LogLevel::Info, "Generating tips...");
        assert!(!log.has_errors());

        log.push("10:00:01".to_string(), LogLevel::Error, "Failed to generate tips");
        assert!(log.has_errors());
        assert_eq!(log.entries.len(), 2);
        assert_eq!(log.entries[1].message, "Failed to generate tips");
    }

    #[test]
    fn test_oldest_entries_dropped() {
        let mut log = ActivityLog::default();
        for i in 0..MAX_ENTRIES + 5 {
            log.push(String::new(), LogLevel::Info, &format!("entry {i}"));
        }
        assert_eq!(log.entries.len(), MAX_ENTRIES);
        assert_eq!(log.entries[0].message, "entry 5");
    }

    #[test]
    fn test_problems_filter_lists_fallbacks_and_errors_newest_first() {
        let mut log = ActivityLog::default();
        log.push("10:00:00".to_string(), LogLevel::Info, "Generating tips...");
        log.push(
            "10:00:02".to_string(),
            LogLevel::Warning,
            "Tip generation failed (transport failure), showing built-in tips",
        );
        log.push("10:00:05".to_string(), LogLevel::Info, "Saved \"Create a Sleep Sanctuary\"");
        log.push("10:00:09".to_string(), LogLevel::Error, "Failed to load \"Walk\": 529");

        assert_eq!(log.visible_entries().len(), 4);
        assert_eq!(log.visible_entries()[0].timestamp, "10:00:09");

        log.filter = LogFilter::Problems;
        let shown: Vec<&str> = log
            .visible_entries()
            .iter()
            .map(|e| e.timestamp.as_str())
            .collect();
        assert_eq!(shown, vec!["10:00:09", "10:00:02"]);
        assert_eq!(log.fallback_count(), 1);
        assert_eq!(log.problem_count(), 2);

        log.clear();
        assert!(log.visible_entries().is_empty());
        assert_eq!(log.filter, LogFilter::All);
    }
}
