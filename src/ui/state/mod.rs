mod diagnostics;
mod form;
mod output;

pub use form::{Field, Focus};

use std::collections::VecDeque;

use tracing::{debug, warn, Level};

use crate::actions::{self, ActionKind, ActionOutcome, FormInput, PreparedAction, Toolchain};
use crate::types::Severity;

use super::{log_entry::LogEntry, mode::UIMode};

/// Rows above the output pane: title, two fields, two rows of action buttons
/// and the pane label.
pub const FORM_HEADER_ROWS: u16 = 6;
/// Status line and help line.
pub const FOOTER_ROWS: u16 = 2;

#[derive(Debug)]
pub struct UIState {
    pub mode: UIMode,
    pub last_diagnostics_mode: Option<UIMode>,
    pub project_id: Field,
    pub public_dir: Field,
    pub focus: Focus,
    /// Command output. Append-only; shown in arrival order.
    output: Vec<crate::types::OutputLine>,
    pub output_scroll_offset: usize,
    pub is_at_bottom_output: bool,
    pub logs: VecDeque<LogEntry>,
    pub log_scroll_offset: usize,
    pub horizontal_scroll_offset: usize,
    pub is_at_bottom_log: bool,
    pub diagnostics_input: Field,
    pub terminal_size: (u16, u16),
    pub max_log_entries: usize,
    /// The action whose worker is in flight, if any.
    running: Option<ActionKind>,
}

impl UIState {
    pub fn new(form: &FormInput) -> Self {
        Self {
            mode: UIMode::default(),
            last_diagnostics_mode: None,
            project_id: Field::new(form.project_id.clone()),
            public_dir: Field::new(form.public_dir.clone()),
            focus: Focus::ProjectId,
            output: Vec::new(),
            output_scroll_offset: 0,
            is_at_bottom_output: true,
            logs: VecDeque::with_capacity(1024),
            log_scroll_offset: 0,
            horizontal_scroll_offset: 0,
            is_at_bottom_log: true,
            diagnostics_input: Field::default(),
            terminal_size: (80, 24),
            max_log_entries: 10000,
            running: None,
        }
    }

    pub fn form_input(&self) -> FormInput {
        FormInput {
            project_id: self.project_id.text().to_string(),
            public_dir: self.public_dir.text().to_string(),
        }
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut Field> {
        match self.focus {
            Focus::ProjectId => Some(&mut self.project_id),
            Focus::PublicDir => Some(&mut self.public_dir),
            _ => None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.running.is_some()
    }

    pub fn running(&self) -> Option<ActionKind> {
        self.running
    }

    /// Fields stay editable while a command runs; buttons do not.
    pub fn is_enabled(&self, focus: Focus) -> bool {
        focus.is_field() || !self.is_busy()
    }

    /// Validates the form for `kind` and, if it passes, marks the action as
    /// running. The caller is expected to hand the result to a worker.
    ///
    /// Returns `None` (and logs why) when nothing should be spawned.
    pub fn request_action(&mut self, kind: ActionKind, tools: &Toolchain) -> Option<PreparedAction> {
        if let Some(current) = self.running {
            debug!("Ignoring {:?}: {:?} is still running", kind, current);
            return None;
        }

        match actions::prepare(kind, &self.form_input(), tools) {
            Ok(prepared) => {
                for warning in prepared.warnings(tools) {
                    self.push_output(Severity::Error, warning);
                }
                self.running = Some(kind);
                Some(prepared)
            }
            Err(e) => {
                warn!("{:?} rejected: {}", kind, e);
                self.push_output(Severity::Error, format!("ERROR: {}", e));
                None
            }
        }
    }

    /// Called once the worker for `kind` has ended, whatever the outcome.
    pub fn finish_action(&mut self, kind: ActionKind, outcome: ActionOutcome) {
        if self.running != Some(kind) {
            warn!("Finished {:?} but {:?} was recorded as running", kind, self.running);
        }
        self.running = None;
        debug!("{:?} worker finished: {:?}", kind, outcome);
        self.push_output(Severity::Info, "INFO: Command task finished.");
    }

    pub fn toggle_diagnostics(&mut self) {
        self.mode = match &self.mode {
            UIMode::Diagnostics { .. } => {
                self.last_diagnostics_mode = Some(self.mode.clone());
                UIMode::Form
            }
            _ => self
                .last_diagnostics_mode
                .clone()
                .unwrap_or(UIMode::Diagnostics {
                    filter: None,
                    level: Level::DEBUG,
                }),
        };

        self.log_scroll_offset = 0;
        self.is_at_bottom_log = true;
    }

    pub fn push_welcome(&mut self) {
        self.push_output(Severity::Info, "Welcome to Firebase Automation Tool!");
        self.push_output(
            Severity::Error,
            "IMPORTANT: For this tool to work, Node.js and npm must be installed, and Firebase CLI (firebase-tools) must be installed globally.",
        );
        self.push_output(
            Severity::Error,
            format!(
                "If 'firebase' command is not recognized, press '{}' (F4).",
                ActionKind::InstallCli.label()
            ),
        );
        self.push_output(Severity::Normal, "");
        self.push_output(Severity::Normal, "1. Log in to Firebase CLI.");
        self.push_output(
            Severity::Normal,
            "2. Initialize Hosting (selects the project and sets the public directory).",
        );
        self.push_output(Severity::Normal, "3. Deploy your project to Firebase Hosting.");
    }

    /// Width and height of the command output pane.
    pub fn output_pane_size(&self) -> (usize, usize) {
        let (width, height) = self.terminal_size;
        (
            width as usize,
            height.saturating_sub(FORM_HEADER_ROWS + FOOTER_ROWS) as usize,
        )
    }
}
