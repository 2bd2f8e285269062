//! Batches diagnostic log entries on their way to the UI.
//!
//! `tracing` events can arrive from any thread at any rate. Forwarding each
//! one as its own UI event would make the render loop redraw constantly, so
//! entries are queued here and flushed as a single batch every 100ms.
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{interval, MissedTickBehavior};

use crate::ui::{LogEntry, UIEvent};

const FLUSH_INTERVAL: Duration = Duration::from_millis(100);

pub struct LogBuffer {
    /// Entries not yet delivered, oldest first. Bounded by `max_pending`.
    pending: Arc<Mutex<VecDeque<LogEntry>>>,
    max_pending: usize,
    ui_sender: Arc<Mutex<Option<mpsc::UnboundedSender<UIEvent>>>>,
    flusher_running: Arc<AtomicBool>,
}

impl LogBuffer {
    pub fn new(max_pending: usize) -> Self {
        Self {
            pending: Arc::new(Mutex::new(VecDeque::with_capacity(max_pending.min(1024)))),
            max_pending,
            ui_sender: Arc::new(Mutex::new(None)),
            flusher_running: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Connects the buffer to the UI. Entries queued before this call are
    /// delivered with the first batch.
    pub fn set_ui_sender(&self, sender: mpsc::UnboundedSender<UIEvent>) {
        if let Ok(mut guard) = self.ui_sender.lock() {
            *guard = Some(sender);
        }
        self.start_flusher_if_needed();
    }

    pub fn add_entry(&self, entry: LogEntry) {
        if let Ok(mut pending) = self.pending.lock() {
            if pending.len() >= self.max_pending {
                pending.pop_front();
            }
            pending.push_back(entry);
        }

        self.start_flusher_if_needed();
    }

    pub fn pending_len(&self) -> usize {
        self.pending.lock().map(|p| p.len()).unwrap_or(0)
    }

    fn start_flusher_if_needed(&self) {
        let connected = self
            .ui_sender
            .lock()
            .map(|guard| guard.is_some())
            .unwrap_or(false);
        if !connected {
            return;
        }

        // Events may be recorded outside the runtime (e.g. during shutdown).
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            return;
        };

        if self
            .flusher_running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return;
        }

        let pending = self.pending.clone();
        let ui_sender = self.ui_sender.clone();
        let running = self.flusher_running.clone();

        handle.spawn(async move {
            let mut timer = interval(FLUSH_INTERVAL);
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                timer.tick().await;

                let batch: Vec<LogEntry> = match pending.lock() {
                    Ok(mut pending) if !pending.is_empty() => pending.drain(..).collect(),
                    _ => continue,
                };

                let delivered = match ui_sender.lock() {
                    Ok(guard) => guard
                        .as_ref()
                        .map(|sender| sender.send(UIEvent::DiagnosticsBatch(batch)).is_ok())
                        .unwrap_or(false),
                    Err(_) => false,
                };

                if !delivered {
                    break;
                }
            }

            running.store(false, Ordering::Release);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tracing::Level;

    fn entry(message: &str) -> LogEntry {
        LogEntry {
            timestamp: Utc::now(),
            level: Level::INFO,
            module: "tests".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn keeps_only_the_newest_entries_while_disconnected() {
        let buffer = LogBuffer::new(2);
        buffer.add_entry(entry("a"));
        buffer.add_entry(entry("b"));
        buffer.add_entry(entry("c"));

        assert_eq!(buffer.pending_len(), 2);
    }

    #[tokio::test]
    async fn delivers_queued_entries_as_one_batch() {
        let buffer = LogBuffer::new(100);
        buffer.add_entry(entry("first"));
        buffer.add_entry(entry("second"));

        let (tx, mut rx) = mpsc::unbounded_channel();
        buffer.set_ui_sender(tx);

        let event = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("batch was not flushed")
            .expect("channel closed");

        match event {
            UIEvent::DiagnosticsBatch(batch) => {
                let messages: Vec<_> = batch.iter().map(|e| e.message.as_str()).collect();
                assert_eq!(messages, vec!["first", "second"]);
            }
            other => panic!("unexpected event: {other:?}"),
        }
        assert_eq!(buffer.pending_len(), 0);
    }
}
