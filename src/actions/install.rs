use tracing::warn;

use super::report::{self, CLI_INSTALL_GUIDE};
use super::{invocations, ActionKind, ActionOutcome, Toolchain};
use crate::firebase::{CommandExecutor, RunError};
use crate::types::OutputSink;

const NODE_DOWNLOAD: &str = "https://nodejs.org/";

pub(super) async fn run(
    executor: &dyn CommandExecutor,
    sink: &dyn OutputSink,
    tools: &Toolchain,
) -> ActionOutcome {
    sink.info("INFO: Attempting to install Firebase CLI globally via npm...");
    sink.info("NOTE: This requires Node.js and npm to be installed and accessible in your PATH.");
    sink.info("You might need to run this tool with administrator/root privileges if installation fails due to permissions.");

    // The probe is captured, not streamed: a missing npm must produce a
    // single error line.
    match executor.capture(&invocations::npm_version(tools)).await {
        Ok(captured) => {
            let version = captured.stdout.trim();
            if version.is_empty() {
                sink.info("INFO: npm found. Proceeding with Firebase CLI installation.");
            } else {
                sink.info(&format!(
                    "INFO: npm {} found. Proceeding with Firebase CLI installation.",
                    version
                ));
            }
        }
        Err(err) => return install_failure(sink, tools, &err),
    }

    match executor.stream(&invocations::install_cli(tools), sink).await {
        Ok(_) => {
            sink.info("INFO: Firebase CLI installation completed successfully!");
            sink.info("Restart this application or your terminal if npm asked you to update PATH.");
            ActionOutcome::Succeeded
        }
        Err(err) => install_failure(sink, tools, &err),
    }
}

fn install_failure(sink: &dyn OutputSink, tools: &Toolchain, err: &RunError) -> ActionOutcome {
    warn!("Firebase CLI installation failed: {}", err);

    if err.is_tool_missing() {
        sink.error(&format!(
            "ERROR: '{}' command not found. Please install Node.js (which includes npm) from {} and ensure it's in your PATH.",
            tools.npm, NODE_DOWNLOAD
        ));
    } else if let RunError::Failed { code, .. } = err {
        sink.error(&format!(
            "ERROR: Firebase CLI installation failed with exit code {}.",
            crate::firebase::describe_code(code)
        ));
        sink.error("This often indicates a permissions issue even when running as administrator. Please try the following:");
        sink.error("  1. Open a NEW command prompt/terminal AS ADMINISTRATOR/ROOT.");
        sink.error(&format!("  2. Manually run: {} install -g firebase-tools", tools.npm));
        sink.error(&format!(
            "  3. If that fails, try clearing npm cache: {} cache clean --force",
            tools.npm
        ));
        sink.error(&format!(
            "  4. Then retry '{} install -g firebase-tools'.",
            tools.npm
        ));
        sink.error(&format!(
            "  5. Refer to Firebase CLI installation guide for more details: {}",
            CLI_INSTALL_GUIDE
        ));
    } else {
        report::unexpected(sink, ActionKind::InstallCli, err);
    }

    ActionOutcome::Failed
}
