//! Console logger implementation

use super::traits::{LogLevel, Logger};

/// Environment variable holding the minimum console level
pub const LOG_LEVEL_ENV: &str = "SMARTCHEF_LOG_LEVEL";

/// A logger that writes to stderr, dropping messages below `min_level`
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    prefix: String,
    min_level: LogLevel,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    /// Create a console logger at `Info`
    pub fn new() -> Self {
        Self {
            prefix: "[SmartChef]".to_string(),
            min_level: LogLevel::Info,
        }
    }

    /// Create a console logger whose level comes from `SMARTCHEF_LOG_LEVEL`
    pub fn from_env() -> Self {
        let min_level = std::env::var(LOG_LEVEL_ENV)
            .ok()
            .and_then(|v| LogLevel::parse(&v))
            .unwrap_or(LogLevel::Info);
        Self::new().with_min_level(min_level)
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Whether a message at `level` would be written
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, level: LogLevel, message: &str) {
        if self.enabled(level) {
            eprintln!("{} {}: {}", self.prefix, level, message);
        }
    }
}
