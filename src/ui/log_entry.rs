//! A single diagnostic event captured from `tracing`.
use chrono::{DateTime, Utc};
use tracing::Level;

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    /// Last segment of the module path that emitted the event.
    pub module: String,
    pub message: String,
}
