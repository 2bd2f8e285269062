use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use super::UiSink;
use crate::actions::{self, ActionOutcome, PreparedAction, Toolchain};
use crate::firebase::CommandExecutor;
use crate::types::OutputSink;
use crate::ui::{UIAction, UIEvent};

/// Receives requests from the UI loop and starts a worker for each action.
pub async fn handle_ui_actions(
    mut action_rx: mpsc::UnboundedReceiver<UIAction>,
    executor: Arc<dyn CommandExecutor>,
    toolchain: Toolchain,
    ui_sender: mpsc::UnboundedSender<UIEvent>,
) {
    while let Some(action) = action_rx.recv().await {
        match action {
            UIAction::Run(prepared) => {
                spawn_action(prepared, executor.clone(), toolchain.clone(), ui_sender.clone());
            }
            UIAction::Exit => {
                debug!("Action dispatcher stopping");
                break;
            }
        }
    }
}

/// Runs `prepared` on its own task. Output lines are forwarded as they are
/// produced and `UIEvent::ActionFinished` is always the last event sent,
/// even if the action panics.
pub fn spawn_action(
    prepared: PreparedAction,
    executor: Arc<dyn CommandExecutor>,
    toolchain: Toolchain,
    ui_sender: mpsc::UnboundedSender<UIEvent>,
) -> JoinHandle<()> {
    let kind = prepared.kind();
    tokio::spawn(async move {
        info!("Starting {} worker", kind);
        let sink = UiSink::new(ui_sender.clone());
        let worker_sink = sink.clone();

        let worker = tokio::spawn(async move {
            actions::execute(&prepared, executor.as_ref(), &worker_sink, &toolchain).await
        });

        let outcome = match worker.await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("{} worker ended abnormally: {}", kind, e);
                sink.error(&format!(
                    "ERROR: An unexpected error occurred during {}: {}",
                    kind.activity(),
                    e
                ));
                ActionOutcome::Failed
            }
        };

        debug!("{} worker finished with {:?}", kind, outcome);
        let _ = ui_sender.send(UIEvent::ActionFinished { kind, outcome });
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::ActionKind;
    use crate::firebase::fake::{exit_with, RecordingExecutor};

    async fn collect(mut rx: mpsc::UnboundedReceiver<UIEvent>) -> Vec<UIEvent> {
        let mut events = Vec::new();
        while let Some(event) = rx.recv().await {
            let done = matches!(event, UIEvent::ActionFinished { .. });
            events.push(event);
            if done {
                break;
            }
        }
        events
    }

    #[tokio::test]
    async fn finished_is_sent_after_all_output() {
        let (tx, rx) = mpsc::unbounded_channel();
        let executor: Arc<dyn CommandExecutor> = Arc::new(RecordingExecutor::succeeding());

        spawn_action(PreparedAction::Login, executor, Toolchain::default(), tx)
            .await
            .unwrap();
        let events = collect(rx).await;

        let (last, output) = events.split_last().unwrap();
        assert!(matches!(
            last,
            UIEvent::ActionFinished {
                kind: ActionKind::Login,
                outcome: ActionOutcome::Succeeded
            }
        ));
        assert!(!output.is_empty());
        assert!(output.iter().all(|event| matches!(event, UIEvent::Output(_))));
    }

    #[tokio::test]
    async fn failed_action_reports_failed_outcome() {
        let (tx, rx) = mpsc::unbounded_channel();
        let executor: Arc<dyn CommandExecutor> =
            Arc::new(RecordingExecutor::with(|inv| Err(exit_with(inv, 1))));

        spawn_action(PreparedAction::Login, executor, Toolchain::default(), tx)
            .await
            .unwrap();
        let events = collect(rx).await;

        assert!(matches!(
            events.last(),
            Some(UIEvent::ActionFinished {
                outcome: ActionOutcome::Failed,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn dispatcher_stops_on_exit() {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let (ui_tx, mut ui_rx) = mpsc::unbounded_channel();
        let executor: Arc<dyn CommandExecutor> = Arc::new(RecordingExecutor::succeeding());

        action_tx.send(UIAction::Exit).unwrap();
        action_tx.send(UIAction::Run(PreparedAction::Login)).unwrap();
        handle_ui_actions(action_rx, executor, Toolchain::default(), ui_tx).await;

        assert!(ui_rx.try_recv().is_err());
    }
}
