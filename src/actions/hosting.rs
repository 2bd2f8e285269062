//! Hosting initialization and deployment.
use std::path::Path;

use super::{invocations, report, ActionKind, ActionOutcome, Toolchain};
use crate::firebase::{CommandExecutor, RunError};
use crate::types::OutputSink;

pub(super) async fn init(
    executor: &dyn CommandExecutor,
    sink: &dyn OutputSink,
    tools: &Toolchain,
    project_id: &str,
    public_dir: &str,
) -> ActionOutcome {
    sink.info(&format!(
        "INFO: Initializing Firebase Hosting for project '{}' in directory '{}'...",
        project_id, public_dir
    ));
    sink.info("NOTE: Some prompts (single-page app, GitHub setup) may still need answering; --confirm accepts the defaults.");

    match run_init(executor, sink, tools, project_id, public_dir).await {
        Ok(()) => {
            sink.info("INFO: Firebase Hosting initialization process completed.");
            sink.info(&format!(
                "Review {} and the public directory before deploying.",
                tools.marker_file
            ));
            ActionOutcome::Succeeded
        }
        Err(err) => report::firebase_failure(sink, tools, ActionKind::InitHosting, &err, |code| {
            format!(
                "ERROR: Firebase Hosting initialization failed with exit code {}.",
                code
            )
        }),
    }
}

async fn run_init(
    executor: &dyn CommandExecutor,
    sink: &dyn OutputSink,
    tools: &Toolchain,
    project_id: &str,
    public_dir: &str,
) -> Result<(), RunError> {
    executor
        .stream(&invocations::use_project(tools, project_id), sink)
        .await?;
    executor
        .stream(
            &invocations::init_hosting(tools, project_id, public_dir),
            sink,
        )
        .await?;
    Ok(())
}

pub(super) async fn deploy(
    executor: &dyn CommandExecutor,
    sink: &dyn OutputSink,
    tools: &Toolchain,
    project_id: Option<&str>,
    root: &Path,
) -> ActionOutcome {
    sink.info("INFO: Deploying to Firebase Hosting...");
    match project_id {
        Some(id) => sink.info(&format!("INFO: Deploying to explicit project: {}", id)),
        None => sink.info("INFO: Deploying to project linked in .firebaserc (current directory)."),
    }

    let invocation = invocations::deploy(tools, project_id, root);
    match executor.stream(&invocation, sink).await {
        Ok(_) => {
            sink.info("INFO: Deployment to Firebase Hosting successful!");
            ActionOutcome::Succeeded
        }
        Err(err) => report::firebase_failure(sink, tools, ActionKind::Deploy, &err, |code| {
            format!(
                "ERROR: Firebase deployment failed with exit code {}. Ensure 'firebase init' was run in the project directory and you are logged in.",
                code
            )
        }),
    }
}
