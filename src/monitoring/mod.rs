//! Monitoring Module
//!
//! Provides observability for plugins:
//! - Structured logging with an inspectable buffer
//! - Tracing subscriber setup for embedding hosts

pub mod logging;

#[cfg(test)]
pub(crate) mod capture;

pub use logging::{init_tracing, LogEntry, LogFormat, LogLevel, Logger, LoggerConfig};
