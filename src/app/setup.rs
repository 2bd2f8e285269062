//! Startup: settings, logging and the banner printed before the UI takes over.
use super::args::AppArgs;
use super::config::Settings;
use anyhow::{Context, Result};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

/// Everything `launch` needs to start either mode.
pub struct PreparedApp {
    pub args: AppArgs,
    pub settings: Settings,
    /// `EnvFilter` directives for diagnostics.
    pub log_filter: String,
}

/// Resolves settings and, for headless runs, installs the stderr logger.
///
/// The TUI installs its own collector once the terminal is set up, so
/// interactive runs only get the filter string from here.
///
/// # Errors
///
/// Fails if the working directory is unavailable or the settings file is
/// unreadable or malformed.
pub fn prepare(args: AppArgs) -> Result<PreparedApp> {
    let cwd = std::env::current_dir().context("cannot determine the current directory")?;
    let settings = Settings::resolve(&args, &cwd)?;
    let log_filter = resolve_log_filter(&args, &settings);

    if args.command.is_some() {
        configure_logging(&log_filter);
        print_start_banner(&args, &settings);
    }

    Ok(PreparedApp {
        args,
        settings,
        log_filter,
    })
}

/// `--log-filter`, then `RUST_LOG`, then the settings file.
fn resolve_log_filter(args: &AppArgs, settings: &Settings) -> String {
    args.log_filter
        .clone()
        .or_else(|| std::env::var("RUST_LOG").ok())
        .filter(|filter| !filter.trim().is_empty())
        .unwrap_or_else(|| settings.log_filter.clone())
}

fn configure_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn print_start_banner(args: &AppArgs, settings: &Settings) {
    println!("{}", "🔥 Firebase Automation Tool".bold());
    if let Some(command) = args.command {
        println!("Action: {}", command.action().label());
    }
    println!("Project ID: {}", settings.project_id);
    println!("Public directory: {}", settings.public_dir);
    println!("Firebase CLI: {}", settings.firebase_bin);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn flag_beats_settings_for_log_filter() {
        let args = AppArgs::try_parse_from(["firebase-automation", "--log-filter", "trace"]).unwrap();
        assert_eq!(resolve_log_filter(&args, &Settings::default()), "trace");
    }
}
