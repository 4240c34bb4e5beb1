//! Configuration management for shellkit.
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. Command-line arguments
//! 2. Environment variables
//! 3. Configuration file (JSON)
//! 4. Default values

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cli::Args;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Execution defaults.
    pub execution: ExecutionSection,
    /// Logging configuration.
    pub logging: LoggingSection,
}

/// Execution defaults section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionSection {
    /// Fail on non-zero exit codes.
    pub check: bool,
    /// Discard command output by default.
    pub quiet: bool,
}

impl Default for ExecutionSection {
    fn default() -> Self {
        Self {
            check: true,
            quiet: false,
        }
    }
}

/// Logging configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level (error, warn, info, debug, trace).
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Json)
    }

    /// Apply environment variable overrides.
    pub fn apply_env(&mut self) {
        if let Ok(value) = std::env::var("SHELLKIT_NO_CHECK") {
            if matches!(value.as_str(), "1" | "true" | "yes") {
                self.execution.check = false;
            }
        }

        if let Ok(level) = std::env::var("SHELLKIT_LOG_LEVEL") {
            self.logging.level = level;
        } else if let Ok(level) = std::env::var("RUST_LOG") {
            self.logging.level = level;
        }
    }

    /// Apply CLI argument overrides.
    pub fn apply_args(&mut self, args: &Args) {
        if args.no_check {
            self.execution.check = false;
        }

        if args.quiet {
            self.execution.quiet = true;
        }

        if let Some(ref level) = args.log_level {
            self.logging.level = level.clone();
        }
    }

    /// Load configuration with full priority chain.
    ///
    /// Priority: CLI args > env vars > config file > defaults
    pub fn load(args: &Args) -> Result<Self, ConfigError> {
        // Start with defaults
        let mut config = Config::default();

        // Load from config file if specified
        if let Some(ref path) = args.config {
            config = Config::from_file(path)?;
        }

        // Apply environment variable overrides
        config.apply_env();

        // Apply CLI argument overrides (highest priority)
        config.apply_args(args);

        Ok(config)
    }

    /// Get the log level filter string.
    pub fn log_filter(&self) -> String {
        if self.logging.level.contains('=') {
            self.logging.level.clone()
        } else {
            format!("shellkit={}", self.logging.level)
        }
    }
}

/// Configuration errors.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading config file.
    Io(std::io::Error),
    /// JSON parsing error.
    Json(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read config file: {}", e),
            Self::Json(e) => write!(f, "failed to parse config file: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.execution.check);
        assert!(!config.execution.quiet);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "execution": {
                "check": false,
                "quiet": true
            },
            "logging": {
                "level": "debug"
            }
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert!(!config.execution.check);
        assert!(config.execution.quiet);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_config_partial_json() {
        let json = r#"{
            "logging": {
                "level": "trace"
            }
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert!(config.execution.check); // Default
        assert_eq!(config.logging.level, "trace");
    }

    #[test]
    fn test_apply_args() {
        let mut config = Config::default();
        let args = Args {
            no_check: true,
            quiet: true,
            log_level: Some("debug".to_string()),
            ..Args::default()
        };

        config.apply_args(&args);

        assert!(!config.execution.check);
        assert!(config.execution.quiet);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_log_filter() {
        let config = Config::default();
        assert_eq!(config.log_filter(), "shellkit=info");

        let mut config = Config::default();
        config.logging.level = "shellkit=debug,tokio=warn".to_string();
        assert_eq!(config.log_filter(), "shellkit=debug,tokio=warn");
    }

    #[test]
    fn test_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();

        let result = Config::from_file(file.path());
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        assert!(json.contains("\"check\""));
        assert!(json.contains("\"level\""));
    }
}
