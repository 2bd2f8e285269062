use std::path::PathBuf;

use thiserror::Error;

/// Output fragments the shell prints when it cannot find a program.
///
/// On Windows tools are launched through `cmd /C`, so a missing `firebase`
/// shows up as a failed command rather than a spawn error.
const MISSING_TOOL_MARKERS: [&str; 2] = [
    "not recognized as an internal or external command",
    "command not found",
];

#[derive(Debug, Error)]
pub enum RunError {
    #[error("'{program}' was not found. Is it installed and on your PATH?")]
    ToolNotFound { program: String },

    #[error("working directory '{}' does not exist", .path.display())]
    MissingDirectory { path: PathBuf },

    #[error("command '{command}' failed with exit code {}", describe_code(.code))]
    Failed {
        command: String,
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    #[error("failed to run '{command}': {source}")]
    Io {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

impl RunError {
    pub fn is_tool_missing(&self) -> bool {
        match self {
            RunError::ToolNotFound { .. } => true,
            RunError::Failed { stdout, stderr, .. } => MISSING_TOOL_MARKERS
                .iter()
                .any(|marker| stdout.contains(marker) || stderr.contains(marker)),
            _ => false,
        }
    }

    /// Exit code of a failed command, if it exited normally.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            RunError::Failed { code, .. } => *code,
            _ => None,
        }
    }
}

/// Renders an exit code; `None` means the process was killed by a signal.
pub(crate) fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "<terminated by signal>".to_string(),
    }
}
