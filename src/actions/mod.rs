//! The four user-triggered actions and how they drive the Firebase CLI.
//!
//! Each action is split in two phases. `prepare` runs on the UI side, checks
//! the form and decides everything that can be decided without spawning a
//! process. `execute` runs in the background and reports every step to an
//! `OutputSink`.
mod hosting;
mod install;
mod invocations;
mod login;
mod prepare;
mod project;
mod report;

pub use prepare::{prepare, PreparedAction, ValidationError};
pub use project::{infer_project_root, ProjectRoot};

use std::fmt;

use tracing::{debug, info};

use crate::firebase::CommandExecutor;
use crate::types::OutputSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Login,
    InitHosting,
    Deploy,
    InstallCli,
}

impl ActionKind {
    pub const ALL: [ActionKind; 4] = [
        ActionKind::Login,
        ActionKind::InitHosting,
        ActionKind::Deploy,
        ActionKind::InstallCli,
    ];

    /// Button label, numbered in the order a new user runs them.
    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::Login => "1. Firebase Login",
            ActionKind::InitHosting => "2. Init Hosting",
            ActionKind::Deploy => "3. Deploy Hosting",
            ActionKind::InstallCli => "4. Install Firebase CLI",
        }
    }

    /// Noun used in "an unexpected error occurred during ..." messages.
    pub(crate) fn activity(&self) -> &'static str {
        match self {
            ActionKind::Login => "login",
            ActionKind::InitHosting => "initialization",
            ActionKind::Deploy => "deployment",
            ActionKind::InstallCli => "installation",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.activity())
    }
}

/// External programs and files the actions rely on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    pub firebase: String,
    pub npm: String,
    /// File whose presence marks an initialized project root.
    pub marker_file: String,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            firebase: "firebase".to_string(),
            npm: "npm".to_string(),
            marker_file: "firebase.json".to_string(),
        }
    }
}

/// Current values of the form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub project_id: String,
    pub public_dir: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Succeeded,
    Failed,
}

/// Runs a prepared action to completion, reporting progress to `sink`.
///
/// Errors never escape: every failure is written to the sink and turned
/// into `ActionOutcome::Failed`.
pub async fn execute(
    action: &PreparedAction,
    executor: &dyn CommandExecutor,
    sink: &dyn OutputSink,
    tools: &Toolchain,
) -> ActionOutcome {
    let kind = action.kind();
    debug!("Executing {:?}", kind);

    let outcome = match action {
        PreparedAction::Login => login::run(executor, sink, tools).await,
        PreparedAction::InitHosting {
            project_id,
            public_dir,
        } => hosting::init(executor, sink, tools, project_id, public_dir).await,
        PreparedAction::Deploy {
            project_id,
            root,
        } => hosting::deploy(executor, sink, tools, project_id.as_deref(), &root.path).await,
        PreparedAction::InstallCli => install::run(executor, sink, tools).await,
    };

    info!("{} finished: {:?}", kind, outcome);
    outcome
}
