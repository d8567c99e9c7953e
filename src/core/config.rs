//! Serializable logger configuration
//!
//! ```json
//! { "level": "DEBUG", "destination": { "type": "socket", "host": "127.0.0.1", "port": 9000 } }
//! ```

use super::error::Result;
use super::log_level::LogLevel;
use super::logger::Logger;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DestinationConfig {
    File { path: PathBuf },
    Socket { host: String, port: u16 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    #[serde(default)]
    pub level: LogLevel,
    pub destination: DestinationConfig,
}

impl LoggerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Open the configured destination and build the Logger
    pub fn build(&self) -> Result<Logger> {
        let builder = Logger::builder().level(self.level);
        let builder = match &self.destination {
            DestinationConfig::File { path } => builder.file(path.clone()),
            DestinationConfig::Socket { host, port } => builder.socket(host.clone(), *port),
        };
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoggerError;
    use tempfile::TempDir;

    #[test]
    fn test_parse_file_config() {
        let config = LoggerConfig::from_json_str(
            r#"{"level": "ERROR", "destination": {"type": "file", "path": "app.log"}}"#,
        )
        .unwrap();

        assert_eq!(config.level, LogLevel::Error);
        assert_eq!(
            config.destination,
            DestinationConfig::File {
                path: PathBuf::from("app.log")
            }
        );
    }

    #[test]
    fn test_level_defaults_to_info() {
        let config = LoggerConfig::from_json_str(
            r#"{"destination": {"type": "socket", "host": "localhost", "port": 9000}}"#,
        )
        .unwrap();

        assert_eq!(config.level, LogLevel::Info);
        assert_eq!(
            config.destination,
            DestinationConfig::Socket {
                host: "localhost".to_string(),
                port: 9000
            }
        );
    }

    #[test]
    fn test_rejects_unknown_destination() {
        let err = LoggerConfig::from_json_str(r#"{"destination": {"type": "syslog"}}"#)
            .err()
            .unwrap();
        assert!(matches!(err, LoggerError::Json(_)));
    }

    #[test]
    fn test_build_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("logger.json");
        let log_path = temp_dir.path().join("configured.log");

        let config = LoggerConfig {
            level: LogLevel::Debug,
            destination: DestinationConfig::File {
                path: log_path.clone(),
            },
        };
        std::fs::write(&config_path, serde_json::to_string(&config).unwrap()).unwrap();

        let loaded = LoggerConfig::from_json_file(&config_path).unwrap();
        assert_eq!(loaded, config);

        let logger = loaded.build().unwrap();
        assert_eq!(logger.level(), LogLevel::Debug);
        logger.debug("configured");
        assert!(std::fs::read_to_string(&log_path)
            .unwrap()
            .ends_with("DEBUG: configured\n"));
    }
}
