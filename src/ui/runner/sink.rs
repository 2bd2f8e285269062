use tokio::sync::mpsc;

use crate::types::{OutputLine, OutputSink, Severity};
use crate::ui::UIEvent;

/// Sends output lines to the UI loop. One channel, so lines arrive in the
/// order they were emitted.
#[derive(Clone)]
pub struct UiSink {
    ui_sender: mpsc::UnboundedSender<UIEvent>,
}

impl UiSink {
    pub fn new(ui_sender: mpsc::UnboundedSender<UIEvent>) -> Self {
        Self { ui_sender }
    }
}

impl OutputSink for UiSink {
    fn emit(&self, severity: Severity, text: String) {
        // The UI may already be gone during shutdown.
        let _ = self
            .ui_sender
            .send(UIEvent::Output(OutputLine::new(severity, text)));
    }
}
