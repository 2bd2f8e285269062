use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a line of output is tagged in the log pane.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Normal,
    Error,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct OutputLine {
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
    pub text: String,
}

impl OutputLine {
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            severity,
            text: text.into(),
        }
    }
}

/// Destination for severity-tagged output produced by commands and actions.
///
/// Implementations must preserve call order: the log pane shows lines in
/// the order `emit` was called.
pub trait OutputSink: Send + Sync {
    fn emit(&self, severity: Severity, text: String);

    fn info(&self, text: &str) {
        self.emit(Severity::Info, text.to_string());
    }

    fn normal(&self, text: &str) {
        self.emit(Severity::Normal, text.to_string());
    }

    fn error(&self, text: &str) {
        self.emit(Severity::Error, text.to_string());
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::{OutputLine, OutputSink, Severity};
    use std::sync::Mutex;

    /// Sink that keeps every line in memory, in order.
    #[derive(Default)]
    pub struct MemorySink {
        lines: Mutex<Vec<OutputLine>>,
    }

    impl MemorySink {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn lines(&self) -> Vec<OutputLine> {
            self.lines.lock().unwrap().clone()
        }

        pub fn texts(&self, severity: Severity) -> Vec<String> {
            self.lines()
                .into_iter()
                .filter(|line| line.severity == severity)
                .map(|line| line.text)
                .collect()
        }
    }

    impl OutputSink for MemorySink {
        fn emit(&self, severity: Severity, text: String) {
            self.lines.lock().unwrap().push(OutputLine::new(severity, text));
        }
    }
}
