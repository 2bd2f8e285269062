use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tokio::sync::mpsc;
use tracing::{debug, info};

use super::{TerminalUI, UIAction, UIEvent};
use crate::app::Settings;
use crate::firebase::{CommandExecutor, CommandRunner};
use crate::logging::{LogBuffer, TUILogCollector};

mod dispatch;
mod sink;

pub use dispatch::{handle_ui_actions, spawn_action};
pub use sink::UiSink;

pub async fn run_tui(settings: Settings, log_filter: &str) -> Result<()> {
    let log_buffer = Arc::new(LogBuffer::new(10000));

    if let Err(e) = TUILogCollector::init_subscriber(log_buffer.clone(), log_filter) {
        debug!("Failed to initialize TUI log collector: {}", e);
    }

    info!("Starting Firebase Automation TUI");

    let (ui_event_tx, ui_event_rx) = mpsc::unbounded_channel::<UIEvent>();
    let (ui_action_tx, ui_action_rx) = mpsc::unbounded_channel::<UIAction>();

    log_buffer.set_ui_sender(ui_event_tx.clone());

    let toolchain = settings.toolchain();
    let cwd = std::env::current_dir().context("cannot determine the current directory")?;
    let mut terminal_ui = TerminalUI::new(
        ui_event_rx,
        ui_action_tx,
        &settings.form(),
        toolchain.clone(),
        cwd,
    );
    terminal_ui.push_welcome();

    spawn_input_pump(ui_event_tx.clone());

    let executor: Arc<dyn CommandExecutor> = Arc::new(CommandRunner::new());
    tokio::spawn(handle_ui_actions(
        ui_action_rx,
        executor,
        toolchain,
        ui_event_tx,
    ));

    terminal_ui.run().await
}

/// Forwards key presses and resizes until the UI loop goes away.
fn spawn_input_pump(ui_sender: mpsc::UnboundedSender<UIEvent>) {
    tokio::task::spawn_blocking(move || {
        while !ui_sender.is_closed() {
            if !event::poll(Duration::from_millis(100)).unwrap_or(false) {
                continue;
            }
            let forwarded = match event::read() {
                Ok(Event::Key(key_event)) => ui_sender.send(UIEvent::KeyPress(key_event)),
                Ok(Event::Resize(width, height)) => ui_sender.send(UIEvent::Resize(width, height)),
                Ok(_) => Ok(()),
                Err(e) => {
                    debug!("Failed to read terminal event: {}", e);
                    Ok(())
                }
            };
            if forwarded.is_err() {
                break;
            }
        }
        debug!("Input pump stopped");
    });
}
