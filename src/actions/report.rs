use tracing::warn;

use super::{ActionKind, ActionOutcome, Toolchain};
use crate::firebase::RunError;
use crate::types::OutputSink;

pub(super) const CLI_INSTALL_GUIDE: &str =
    "https://firebase.google.com/docs/cli#install_the_firebase_cli";

/// Writes the user-facing explanation for a failed Firebase command.
///
/// `failure` renders the action-specific line for a non-zero exit.
pub(super) fn firebase_failure(
    sink: &dyn OutputSink,
    tools: &Toolchain,
    kind: ActionKind,
    err: &RunError,
    failure: impl FnOnce(&str) -> String,
) -> ActionOutcome {
    warn!("{} failed: {}", kind, err);

    if err.is_tool_missing() {
        sink.error(&format!(
            "ERROR: '{}' command not found. Please ensure Firebase CLI is installed and added to your system's PATH.",
            tools.firebase
        ));
        sink.error(&format!(
            "Consider pressing '{}' (F4) if Node.js/npm is already installed.",
            ActionKind::InstallCli.label()
        ));
        sink.error(&format!(
            "Refer to Firebase CLI installation guide: {}",
            CLI_INSTALL_GUIDE
        ));
    } else if let RunError::Failed { code, .. } = err {
        sink.error(&failure(&crate::firebase::describe_code(code)));
    } else {
        unexpected(sink, kind, err);
    }

    ActionOutcome::Failed
}

pub(super) fn unexpected(sink: &dyn OutputSink, kind: ActionKind, err: &RunError) {
    sink.error(&format!(
        "ERROR: An unexpected error occurred during {}: {}",
        kind.activity(),
        err
    ));
}
