//! A `tracing` layer that routes the application's own diagnostics into the
//! TUI instead of the terminal, which the UI owns while it runs.
use std::fmt::Write as _;
use std::sync::Arc;

use chrono::Utc;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

use super::LogBuffer;
use crate::ui::LogEntry;

pub struct TUILogCollector {
    buffer: Arc<LogBuffer>,
}

impl TUILogCollector {
    pub fn new(buffer: Arc<LogBuffer>) -> Self {
        Self { buffer }
    }

    /// Installs the collector as the global subscriber, filtered by `filter`
    /// (an `EnvFilter` directive string).
    ///
    /// # Errors
    ///
    /// Fails if the filter does not parse or a global subscriber is already set.
    pub fn init_subscriber(buffer: Arc<LogBuffer>, filter: &str) -> anyhow::Result<()> {
        let filter = EnvFilter::try_new(filter)?;
        let subscriber =
            tracing_subscriber::registry().with(TUILogCollector::new(buffer).with_filter(filter));

        tracing::subscriber::set_global_default(subscriber)?;
        Ok(())
    }
}

impl<S> Layer<S> for TUILogCollector
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let module = metadata
            .module_path()
            .and_then(|path| path.rsplit("::").next())
            .unwrap_or_else(|| metadata.target())
            .to_string();

        self.buffer.add_entry(LogEntry {
            timestamp: Utc::now(),
            level: *metadata.level(),
            module,
            message: visitor.finish(),
        });
    }
}

/// Flattens an event into `message key=value key=value`.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.fields,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }

    fn push_field(&mut self, name: &str, value: impl std::fmt::Display) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{}={}", name, value);
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.push_field(field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.push_field(field.name(), format_args!("{:?}", value));
        }
    }
}
