//! Key handling, prompt commands and history for the diagnostics view.
mod commands;
mod history;
mod keys;
