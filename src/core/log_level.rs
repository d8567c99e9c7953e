//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug = 0,
    #[default]
    Info = 1,
    Error = 2,
}

impl LogLevel {
    /// All levels in ascending order
    pub const ALL: [LogLevel; 3] = [LogLevel::Debug, LogLevel::Info, LogLevel::Error];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Error => "ERROR",
        }
    }

    /// Label written in front of every message.
    ///
    /// All labels are seven characters wide so messages line up in a column.
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG: ",
            LogLevel::Info => "INFO:  ",
            LogLevel::Error => "ERROR: ",
        }
    }

    /// Classify a received log line by its label.
    ///
    /// Lines without a recognizable DEBUG or ERROR label count as INFO.
    pub fn from_line(line: &str) -> Self {
        if line.contains("DEBUG:") {
            LogLevel::Debug
        } else if line.contains("ERROR:") {
            LogLevel::Error
        } else {
            LogLevel::Info
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = LoggerError;

    fn try_from(code: u8) -> Result<Self, LoggerError> {
        match code {
            0 => Ok(LogLevel::Debug),
            1 => Ok(LogLevel::Info),
            2 => Ok(LogLevel::Error),
            _ => Err(LoggerError::InvalidLevel(code.to_string())),
        }
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<u8>() {
            return LogLevel::try_from(code).map_err(|_| LoggerError::InvalidLevel(s.to_string()));
        }

        match trimmed.to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "ERROR" => Ok(LogLevel::Error),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_numeric() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Error);
        assert_eq!(LogLevel::Debug as u8, 0);
        assert_eq!(LogLevel::Error as u8, 2);
    }

    #[test]
    fn test_all_is_ascending_by_code() {
        for (code, level) in LogLevel::ALL.iter().enumerate() {
            assert_eq!(*level as usize, code);
            assert_eq!(LogLevel::try_from(code as u8).unwrap(), *level);
        }
    }

    #[test]
    fn test_default_is_info() {
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }

    #[test]
    fn test_labels() {
        assert_eq!(LogLevel::Debug.label(), "DEBUG: ");
        assert_eq!(LogLevel::Info.label(), "INFO:  ");
        assert_eq!(LogLevel::Error.label(), "ERROR: ");
    }

    #[test]
    fn test_parse_names_and_codes() {
        assert_eq!("debug".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("Info".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert_eq!(" 2 ".parse::<LogLevel>().unwrap(), LogLevel::Error);
        assert_eq!(LogLevel::try_from(0).unwrap(), LogLevel::Debug);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "WARN".parse::<LogLevel>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid log level: 'WARN'");
        assert!("3".parse::<LogLevel>().is_err());
        assert!(LogLevel::try_from(7).is_err());
    }

    #[test]
    fn test_from_line() {
        assert_eq!(
            LogLevel::from_line("[2025-01-08 10:30:45] DEBUG: starting"),
            LogLevel::Debug
        );
        assert_eq!(
            LogLevel::from_line("[2025-01-08 10:30:45] ERROR: disk full"),
            LogLevel::Error
        );
        assert_eq!(
            LogLevel::from_line("[2025-01-08 10:30:45] INFO:  ready"),
            LogLevel::Info
        );
        assert_eq!(LogLevel::from_line("garbage"), LogLevel::Info);
    }

    #[test]
    fn test_serde_uses_upper_case_names() {
        let json = serde_json::to_string(&LogLevel::Error).unwrap();
        assert_eq!(json, "\"ERROR\"");
        let level: LogLevel = serde_json::from_str("\"DEBUG\"").unwrap();
        assert_eq!(level, LogLevel::Debug);
    }
}
