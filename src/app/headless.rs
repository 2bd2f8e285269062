//! Runs one action straight from the command line, without the TUI.
use anyhow::{bail, Result};
use colored::Colorize;
use tracing::info;

use super::config::Settings;
use crate::actions::{self, ActionKind, ActionOutcome};
use crate::firebase::CommandRunner;
use crate::types::{OutputSink, Severity};

/// Prints output lines to stdout, coloured like the log pane.
pub struct ConsoleSink;

impl OutputSink for ConsoleSink {
    fn emit(&self, severity: Severity, text: String) {
        match severity {
            Severity::Info => println!("{}", text.blue()),
            Severity::Normal => println!("{}", text),
            Severity::Error => println!("{}", text.red().bold()),
        }
    }
}

pub async fn run(kind: ActionKind, settings: &Settings) -> Result<()> {
    let tools = settings.toolchain();
    let sink = ConsoleSink;

    let prepared = match actions::prepare(kind, &settings.form(), &tools) {
        Ok(prepared) => prepared,
        Err(e) => {
            sink.error(&format!("ERROR: {}", e));
            bail!("{} was not started: {}", kind, e);
        }
    };

    for warning in prepared.warnings(&tools) {
        sink.error(&warning);
    }

    info!("Running {:?} headless", kind);
    match actions::execute(&prepared, &CommandRunner::new(), &sink, &tools).await {
        ActionOutcome::Succeeded => Ok(()),
        ActionOutcome::Failed => bail!("{} failed", kind),
    }
}
