//! Capturing logger for tests

use parking_lot::Mutex;

use super::traits::{LogLevel, Logger};

/// A logger that keeps every record in memory
#[derive(Debug, Default)]
pub struct MemoryLogger {
    records: Mutex<Vec<(LogLevel, String)>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records so far
    pub fn records(&self) -> Vec<(LogLevel, String)> {
        self.records.lock().clone()
    }

    /// Whether any record contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.records.lock().iter().any(|(_, m)| m.contains(needle))
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Logger for MemoryLogger {
    fn log(&self, level: LogLevel, message: &str) {
        self.records.lock().push((level, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_logger_captures() {
        let logger = MemoryLogger::new();
        logger.info("dispatching");
        logger.error("boom");

        let records = logger.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1], (LogLevel::Error, "boom".to_string()));
        assert!(logger.contains("dispatch"));

        logger.clear();
        assert!(logger.records().is_empty());
    }
}
