//! Structured logging for plugins.
//!
//! Provides log levels, structured entries, a named plugin logger with an
//! inspectable buffer, and tracing integration.

use crate::core::{now, Error, Result, Timestamp};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use std::sync::{PoisonError, RwLock};

/// Log level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LogLevel {
    /// Trace level (most verbose)
    Trace = 0,
    /// Debug level
    Debug = 1,
    /// Info level
    Info = 2,
    /// Warning level
    Warn = 3,
    /// Error level
    Error = 4,
}

impl LogLevel {
    /// The matching tracing level.
    pub fn as_tracing(&self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// A structured log entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LogEntry {
    /// Timestamp
    pub timestamp: Timestamp,
    /// Log level
    pub level: LogLevel,
    /// Message
    pub message: String,
    /// Target (logger name)
    pub target: String,
    /// Structured fields
    pub fields: HashMap<String, serde_json::Value>,
}

impl LogEntry {
    /// Create a new log entry.
    pub fn new(level: LogLevel, message: &str) -> Self {
        Self {
            timestamp: now(),
            level,
            message: message.to_string(),
            target: String::new(),
            fields: HashMap::new(),
        }
    }

    /// Set target.
    pub fn with_target(mut self, target: &str) -> Self {
        self.target = target.to_string();
        self
    }

    /// Add a field.
    pub fn with_field(mut self, key: &str, value: impl Serialize) -> Self {
        if let Ok(v) = serde_json::to_value(value) {
            self.fields.insert(key.to_string(), v);
        }
        self
    }

    /// Format as JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Format as text.
    pub fn to_text(&self, timestamps: bool) -> String {
        let fields_str = if self.fields.is_empty() {
            String::new()
        } else {
            let mut pairs: Vec<String> = self
                .fields
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            pairs.sort();
            format!(" {}", pairs.join(" "))
        };

        let prefix = if timestamps {
            format!("{} ", self.timestamp.to_rfc3339())
        } else {
            String::new()
        };

        format!(
            "{}{} [{}] {}{}",
            prefix, self.level, self.target, self.message, fields_str
        )
    }
}

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogFormat {
    /// Plain text
    Text,
    /// JSON
    Json,
}

/// Logger configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Minimum log level
    pub level: LogLevel,
    /// Output format
    pub format: LogFormat,
    /// Include timestamps
    pub timestamps: bool,
    /// Maximum number of buffered entries
    pub buffer_capacity: usize,
}

impl LoggerConfig {
    /// Parse and validate a configuration from JSON.
    ///
    /// Missing keys fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values the logger cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.buffer_capacity == 0 {
            return Err(Error::InvalidConfig(
                "buffer_capacity must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Text,
            timestamps: true,
            buffer_capacity: 1000,
        }
    }
}

/// A named logger handed to a plugin by its host.
///
/// Every accepted entry is kept in a bounded buffer and forwarded to
/// `tracing`. Logging never panics, even if the buffer lock was poisoned.
pub struct Logger {
    /// Logger name, used as the entry target
    name: String,
    /// Configuration
    config: LoggerConfig,
    /// Log buffer (for inspection by the host)
    buffer: RwLock<VecDeque<LogEntry>>,
}

impl Logger {
    /// Create a new logger.
    pub fn new(name: &str, config: LoggerConfig) -> Self {
        Self {
            name: name.to_string(),
            config,
            buffer: RwLock::new(VecDeque::new()),
        }
    }

    /// Create with default config.
    pub fn default_logger(name: &str) -> Self {
        Self::new(name, LoggerConfig::default())
    }

    /// Logger name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current configuration.
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Log an entry.
    pub fn log(&self, entry: LogEntry) {
        if entry.level < self.config.level {
            return;
        }

        let entry = if entry.target.is_empty() {
            entry.with_target(&self.name)
        } else {
            entry
        };

        {
            let mut buffer = self.buffer.write().unwrap_or_else(PoisonError::into_inner);
            if buffer.len() >= self.config.buffer_capacity {
                buffer.pop_front();
            }
            buffer.push_back(entry.clone());
        }

        self.emit(&entry);
    }

    fn emit(&self, entry: &LogEntry) {
        let output = match self.config.format {
            LogFormat::Text => entry.to_text(false),
            LogFormat::Json => entry.to_json(),
        };

        // The tracing subscriber stamps its own time, so text output omits ours.
        match entry.level {
            LogLevel::Trace => tracing::trace!(target: "testplugin", logger = %self.name, "{}", output),
            LogLevel::Debug => tracing::debug!(target: "testplugin", logger = %self.name, "{}", output),
            LogLevel::Info => tracing::info!(target: "testplugin", logger = %self.name, "{}", output),
            LogLevel::Warn => tracing::warn!(target: "testplugin", logger = %self.name, "{}", output),
            LogLevel::Error => tracing::error!(target: "testplugin", logger = %self.name, "{}", output),
        }
    }

    /// Log at trace level.
    pub fn trace(&self, message: &str) {
        self.log(LogEntry::new(LogLevel::Trace, message));
    }

    /// Log at debug level.
    pub fn debug(&self, message: &str) {
        self.log(LogEntry::new(LogLevel::Debug, message));
    }

    /// Log at info level.
    pub fn info(&self, message: &str) {
        self.log(LogEntry::new(LogLevel::Info, message));
    }

    /// Log at warn level.
    pub fn warn(&self, message: &str) {
        self.log(LogEntry::new(LogLevel::Warn, message));
    }

    /// Log at error level.
    pub fn error(&self, message: &str) {
        self.log(LogEntry::new(LogLevel::Error, message));
    }

    /// Get buffered logs, oldest first.
    pub fn get_logs(&self) -> Vec<LogEntry> {
        self.buffer
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    /// Get logs at or above a level.
    pub fn get_logs_at_level(&self, min_level: LogLevel) -> Vec<LogEntry> {
        self.buffer
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|e| e.level >= min_level)
            .cloned()
            .collect()
    }

    /// Number of buffered entries.
    pub fn len(&self) -> usize {
        self.buffer.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether nothing has been logged (or the buffer was cleared).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear the buffer.
    pub fn clear(&self) {
        self.buffer
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Set log level.
    pub fn set_level(&mut self, level: LogLevel) {
        self.config.level = level;
    }
}

/// Install a global `tracing` subscriber for an embedding host.
///
/// Fails if a global subscriber is already set.
pub fn init_tracing(config: &LoggerConfig) -> Result<()> {
    config.validate()?;

    let builder = tracing_subscriber::fmt()
        .with_max_level(config.level.as_tracing())
        .with_target(true);

    let result = if config.timestamps {
        builder.try_init()
    } else {
        builder.without_time().try_init()
    };

    result.map_err(|e| Error::TracingInit(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitoring::capture::count_events;

    #[test]
    fn test_log_entry() {
        let entry = LogEntry::new(LogLevel::Info, "Test message")
            .with_target("test::module")
            .with_field("user_id", "123");

        assert_eq!(entry.level, LogLevel::Info);
        assert_eq!(entry.message, "Test message");
        assert_eq!(entry.target, "test::module");
        assert!(entry.fields.contains_key("user_id"));
    }

    #[test]
    fn test_log_format() {
        let entry = LogEntry::new(LogLevel::Info, "Test").with_target("TestPlugin");

        let json = entry.to_json();
        assert!(json.contains("Info"));

        let text = entry.to_text(false);
        assert_eq!(text, "INFO [TestPlugin] Test");

        let stamped = entry.to_text(true);
        assert!(stamped.ends_with("INFO [TestPlugin] Test"));
        assert!(stamped.len() > text.len());
    }

    #[test]
    fn test_logger() {
        let logger = Logger::default_logger("TestPlugin");
        logger.info("Info message");
        logger.warn("Warning message");
        logger.error("Error message");

        let logs = logger.get_logs();
        assert_eq!(logs.len(), 3);
        assert!(logs.iter().all(|e| e.target == "TestPlugin"));
    }

    #[test]
    fn test_log_level_filtering() {
        let config = LoggerConfig {
            level: LogLevel::Warn,
            ..Default::default()
        };
        let logger = Logger::new("TestPlugin", config);

        logger.info("Should be filtered");
        logger.warn("Should appear");
        logger.error("Should appear");

        assert_eq!(logger.len(), 2);
    }

    #[test]
    fn test_get_logs_at_level() {
        let logger = Logger::default_logger("TestPlugin");
        logger.info("Info");
        logger.warn("Warn");
        logger.error("Error");

        let errors = logger.get_logs_at_level(LogLevel::Error);
        assert_eq!(errors.len(), 1);

        let warnings = logger.get_logs_at_level(LogLevel::Warn);
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn test_buffer_is_bounded() {
        let config = LoggerConfig {
            buffer_capacity: 2,
            ..Default::default()
        };
        let logger = Logger::new("TestPlugin", config);
        logger.info("first");
        logger.info("second");
        logger.info("third");

        let messages: Vec<String> = logger.get_logs().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["second", "third"]);
    }

    #[test]
    fn test_clear() {
        let logger = Logger::default_logger("TestPlugin");
        logger.info("Info");
        assert!(!logger.is_empty());
        logger.clear();
        assert!(logger.is_empty());
    }

    #[test]
    fn test_entries_reach_tracing() {
        let logger = Logger::default_logger("TestPlugin");
        let count = count_events(|| {
            logger.info("one");
            logger.debug("filtered before tracing");
            logger.warn("two");
        });
        assert_eq!(count, 2);
    }

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
        assert_eq!(LogLevel::Info.as_tracing(), tracing::Level::INFO);
    }

    #[test]
    fn test_config_from_json() {
        let config = LoggerConfig::from_json(r#"{"level": "Debug", "format": "Json"}"#).unwrap();
        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.format, LogFormat::Json);
        assert!(config.timestamps);
        assert_eq!(config.buffer_capacity, 1000);
    }

    #[test]
    fn test_config_rejects_zero_capacity() {
        let result = LoggerConfig::from_json(r#"{"buffer_capacity": 0}"#);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));

        let result = LoggerConfig::from_json(r#"{"level": "Loud"}"#);
        assert!(matches!(result, Err(Error::SerializationError(_))));
    }

    #[test]
    fn test_init_tracing_rejects_invalid_config() {
        let config = LoggerConfig {
            buffer_capacity: 0,
            ..Default::default()
        };
        assert!(matches!(init_tracing(&config), Err(Error::InvalidConfig(_))));
    }
}
