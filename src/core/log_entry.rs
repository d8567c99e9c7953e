//! Log entry structure

use super::log_level::LogLevel;
use super::timestamp::format_timestamp;
use chrono::{DateTime, Local};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Local::now(),
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Render the entry as one newline-terminated line
    ///
    /// `[2025-01-08 10:30:45] INFO:  message\n`
    pub fn format_line(&self) -> String {
        let timestamp = format_timestamp(&self.timestamp);
        let label = self.level.label();

        let mut line =
            String::with_capacity(timestamp.len() + label.len() + self.message.len() + 4);
        line.push('[');
        line.push_str(&timestamp);
        line.push_str("] ");
        line.push_str(label);
        line.push_str(&self.message);
        line.push('\n');
        line
    }
}
