use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::actions::ActionKind;

#[derive(Parser, Debug, Clone)]
#[command(name = "firebase-automation")]
#[command(about = "Terminal front-end for Firebase Hosting login, init and deploy")]
pub struct AppArgs {
    #[arg(long, help = "Settings file path (JSON)")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Firebase project ID")]
    pub project: Option<String>,

    #[arg(long = "public-dir", help = "Directory with the files to host")]
    pub public_dir: Option<String>,

    #[arg(long = "firebase-bin", help = "Firebase CLI executable")]
    pub firebase_bin: Option<String>,

    #[arg(long = "npm-bin", help = "npm executable used to install the Firebase CLI")]
    pub npm_bin: Option<String>,

    #[arg(
        long = "log-filter",
        help = "Diagnostics filter, e.g. 'info,firebase_automation=debug' (or set RUST_LOG)"
    )]
    pub log_filter: Option<String>,

    /// Run a single action without the interactive UI.
    #[command(subcommand)]
    pub command: Option<HeadlessCommand>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlessCommand {
    /// Log in to the Firebase CLI
    Login,
    /// Select the project and initialize Hosting
    Init,
    /// Deploy Hosting
    Deploy,
    /// Install firebase-tools globally with npm
    Install,
}

impl HeadlessCommand {
    pub fn action(self) -> ActionKind {
        match self {
            HeadlessCommand::Login => ActionKind::Login,
            HeadlessCommand::Init => ActionKind::InitHosting,
            HeadlessCommand::Deploy => ActionKind::Deploy,
            HeadlessCommand::Install => ActionKind::InstallCli,
        }
    }
}

impl AppArgs {
    pub fn from_cli() -> Self {
        <Self as Parser>::parse()
    }
}
