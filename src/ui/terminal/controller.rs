use std::path::PathBuf;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::actions::{FormInput, Toolchain};
use crate::ui::{BrowseMode, DiagnosticsMode, FormMode, UIAction, UIEvent, UIState};

pub struct TerminalUI {
    pub(super) state: UIState,
    pub(super) form_mode: FormMode,
    pub(super) browse_mode: BrowseMode,
    pub(super) diagnostics_mode: DiagnosticsMode,
    pub(super) event_rx: mpsc::UnboundedReceiver<UIEvent>,
    pub(super) action_tx: mpsc::UnboundedSender<UIAction>,
    pub(super) toolchain: Toolchain,
    /// Where the directory browser starts when the field is empty.
    pub(super) cwd: PathBuf,
    pub(super) should_quit: bool,
    /// Set while raw mode and the alternate screen are active.
    pub(super) terminal_active: bool,
}

impl TerminalUI {
    pub fn new(
        event_rx: mpsc::UnboundedReceiver<UIEvent>,
        action_tx: mpsc::UnboundedSender<UIAction>,
        form: &FormInput,
        toolchain: Toolchain,
        cwd: PathBuf,
    ) -> Self {
        Self {
            state: UIState::new(form),
            form_mode: FormMode::new(),
            browse_mode: BrowseMode::new(),
            diagnostics_mode: DiagnosticsMode::new(),
            event_rx,
            action_tx,
            toolchain,
            cwd,
            should_quit: false,
            terminal_active: false,
        }
    }

    pub fn push_welcome(&mut self) {
        self.state.push_welcome();
    }

    pub async fn run(&mut self) -> Result<()> {
        self.initialize_terminal()?;

        debug!("Starting terminal UI loop");
        self.render()?;

        while !self.should_quit {
            let Some(event) = self.event_rx.recv().await else {
                debug!("UI event channel closed");
                break;
            };

            if let Err(e) = self.handle_event(event) {
                error!("Error handling UI event: {}", e);
            }

            // Drain whatever else arrived so bursts of output cost one frame.
            while let Ok(event) = self.event_rx.try_recv() {
                if let Err(e) = self.handle_event(event) {
                    error!("Error handling UI event: {}", e);
                }
            }

            if !self.should_quit {
                self.render()?;
            }
        }

        self.cleanup()
    }
}
