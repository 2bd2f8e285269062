//! The main entry point for firebase-automation.
mod actions;
mod app;
mod firebase;
mod logging;
mod types;
mod ui;

use anyhow::Result;

/// Starts the interactive UI, or runs a single action headless when a
/// subcommand is given.
///
/// # Errors
///
/// Returns an error if startup fails, the terminal cannot be driven, or a
/// headless action fails.
#[tokio::main]
async fn main() -> Result<()> {
    app::launch().await
}
