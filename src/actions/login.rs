use super::{invocations, report, ActionKind, ActionOutcome, Toolchain};
use crate::firebase::CommandExecutor;
use crate::types::OutputSink;

pub(super) async fn run(
    executor: &dyn CommandExecutor,
    sink: &dyn OutputSink,
    tools: &Toolchain,
) -> ActionOutcome {
    sink.info("INFO: Attempting Firebase login. Please follow browser prompts.");

    match executor.stream(&invocations::login(tools), sink).await {
        Ok(_) => {
            sink.info("INFO: Firebase login successful!");
            ActionOutcome::Succeeded
        }
        Err(err) => report::firebase_failure(sink, tools, ActionKind::Login, &err, |code| {
            format!("ERROR: Firebase login failed with exit code {}.", code)
        }),
    }
}
