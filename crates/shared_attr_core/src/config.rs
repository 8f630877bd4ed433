//! Runtime configuration for the core crate.
//!
//! # Responsibility
//! - Describe logging settings in one serde-friendly shape.
//! - Load settings from the process environment for the CLI and hosts.

use crate::logging::default_log_level;
use serde::Deserialize;
use std::path::PathBuf;

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "SHARED_ATTR_LOG_LEVEL";
/// Environment variable naming the absolute log directory.
pub const ENV_LOG_DIR: &str = "SHARED_ATTR_LOG_DIR";

/// File logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// One of `trace|debug|info|warn|error`; validated by `init_logging`.
    #[serde(default = "default_level_string")]
    pub level: String,
    /// Must be absolute.
    pub log_dir: PathBuf,
}

impl LoggingConfig {
    pub fn new(level: impl Into<String>, log_dir: impl Into<PathBuf>) -> Self {
        Self {
            level: level.into(),
            log_dir: log_dir.into(),
        }
    }

    /// Reads `SHARED_ATTR_LOG_DIR` and `SHARED_ATTR_LOG_LEVEL`.
    ///
    /// Returns `None` when no directory is configured.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let log_dir = lookup(ENV_LOG_DIR).filter(|value| !value.trim().is_empty())?;
        let level = lookup(ENV_LOG_LEVEL)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(default_level_string);
        Some(Self::new(level, log_dir.trim()))
    }
}

fn default_level_string() -> String {
    default_log_level().to_string()
}
