use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, error};

use crate::actions::{ActionKind, ActionOutcome};
use crate::ui::{FormCommand, UIAction, UIEvent, UIMode};

use super::TerminalUI;

impl TerminalUI {
    pub(super) fn handle_event(&mut self, event: UIEvent) -> Result<()> {
        match event {
            UIEvent::Output(line) => {
                self.state.append_output(line);
            }
            UIEvent::DiagnosticsBatch(entries) => {
                self.state.add_log_batch(entries);
            }
            UIEvent::ActionFinished { kind, outcome } => {
                self.state.finish_action(kind, outcome);
            }
            UIEvent::KeyPress(key_event) => {
                self.handle_key_event(key_event);
            }
            UIEvent::Resize(width, height) => {
                self.state.terminal_size = (width, height);
                self.state.clamp_output_scroll();
                self.state.update_log_scroll_state();
            }
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        // Windows reports releases too.
        if key.kind == KeyEventKind::Release {
            return;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                debug!("Exit requested");
                self.should_quit = true;
                let _ = self.action_tx.send(UIAction::Exit);
                return;
            }
            (KeyCode::F(9), _) if !matches!(self.state.mode, UIMode::Browse) => {
                self.state.toggle_diagnostics();
                return;
            }
            _ => {}
        }

        match &self.state.mode {
            UIMode::Form => match self.form_mode.handle_key(&mut self.state, key) {
                FormCommand::Trigger(kind) => self.trigger(kind),
                FormCommand::Browse => self.browse_mode.open(&mut self.state, &self.cwd),
                FormCommand::None => {}
            },
            UIMode::Browse => {
                self.browse_mode.handle_key(&mut self.state, key);
            }
            UIMode::Diagnostics { .. } => {
                self.diagnostics_mode.handle_key(&mut self.state, key);
            }
        }
    }

    /// Validates the form for `kind` and hands it to the dispatcher.
    fn trigger(&mut self, kind: ActionKind) {
        let Some(prepared) = self.state.request_action(kind, &self.toolchain) else {
            return;
        };

        debug!("Dispatching {:?}", prepared);
        if let Err(e) = self.action_tx.send(UIAction::Run(prepared)) {
            error!("Action dispatcher is gone: {}", e);
            self.state.finish_action(kind, ActionOutcome::Failed);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tokio::sync::mpsc;

    use super::*;
    use crate::actions::{FormInput, PreparedAction, Toolchain};
    use crate::types::{OutputLine, Severity};

    fn ui(
        project_id: &str,
        public_dir: &str,
    ) -> (
        TerminalUI,
        mpsc::UnboundedSender<UIEvent>,
        mpsc::UnboundedReceiver<UIAction>,
    ) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let ui = TerminalUI::new(
            event_rx,
            action_tx,
            &FormInput {
                project_id: project_id.to_string(),
                public_dir: public_dir.to_string(),
            },
            Toolchain::default(),
            PathBuf::from("/"),
        );
        (ui, event_tx, action_rx)
    }

    fn key(code: KeyCode) -> UIEvent {
        UIEvent::KeyPress(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn deploy_without_directory_sends_nothing() {
        let (mut ui, _events, mut actions) = ui("demo", "");

        ui.handle_event(key(KeyCode::F(3))).unwrap();

        assert!(actions.try_recv().is_err());
        assert!(!ui.state.is_busy());
        let lines = ui.state.output_lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].severity, Severity::Error);
    }

    #[test]
    fn finished_event_re_enables_buttons() {
        let (mut ui, _events, mut actions) = ui("demo", "public");

        ui.handle_event(key(KeyCode::F(1))).unwrap();
        assert!(matches!(
            actions.try_recv(),
            Ok(UIAction::Run(PreparedAction::Login))
        ));
        assert!(ui.state.is_busy());

        // A second trigger while busy goes nowhere.
        ui.handle_event(key(KeyCode::F(4))).unwrap();
        assert!(actions.try_recv().is_err());

        ui.handle_event(UIEvent::Output(OutputLine::new(Severity::Normal, "ok")))
            .unwrap();
        ui.handle_event(UIEvent::ActionFinished {
            kind: ActionKind::Login,
            outcome: ActionOutcome::Succeeded,
        })
        .unwrap();

        assert!(!ui.state.is_busy());
        let texts: Vec<_> = ui
            .state
            .output_lines()
            .iter()
            .map(|line| line.text.as_str())
            .collect();
        assert_eq!(texts, vec!["ok", "INFO: Command task finished."]);
    }

    #[test]
    fn ctrl_c_requests_exit() {
        let (mut ui, _events, mut actions) = ui("demo", "public");

        ui.handle_event(UIEvent::KeyPress(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )))
        .unwrap();

        assert!(ui.should_quit);
        assert!(matches!(actions.try_recv(), Ok(UIAction::Exit)));
    }

    #[test]
    fn f9_switches_to_diagnostics_and_back() {
        let (mut ui, _events, _actions) = ui("demo", "public");

        ui.handle_event(key(KeyCode::F(9))).unwrap();
        assert!(matches!(ui.state.mode, UIMode::Diagnostics { .. }));

        // Typing goes to the diagnostics prompt, not the form.
        ui.handle_event(key(KeyCode::Char('x'))).unwrap();
        assert_eq!(ui.state.diagnostics_input.text(), "x");
        assert_eq!(ui.state.project_id.text(), "demo");

        ui.handle_event(key(KeyCode::F(9))).unwrap();
        assert_eq!(ui.state.mode, UIMode::Form);
    }

    #[test]
    fn dispatcher_gone_releases_the_buttons() {
        let (mut ui, _events, actions) = ui("demo", "public");
        drop(actions);

        ui.handle_event(key(KeyCode::F(1))).unwrap();

        assert!(!ui.state.is_busy());
        assert_eq!(
            ui.state.output_lines().last().unwrap().text,
            "INFO: Command task finished."
        );
    }
}
