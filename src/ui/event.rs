use crossterm::event::KeyEvent;

use crate::actions::{ActionKind, ActionOutcome};
use crate::types::OutputLine;

use super::log_entry::LogEntry;

#[derive(Debug)]
pub enum UIEvent {
    /// A line for the command output pane.
    Output(OutputLine),
    DiagnosticsBatch(Vec<LogEntry>),
    /// The worker for `kind` has ended.
    ActionFinished {
        kind: ActionKind,
        outcome: ActionOutcome,
    },
    KeyPress(KeyEvent),
    Resize(u16, u16),
}
