use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWriteExt, BufReader, Split};
use tokio::process::{Child, Command};
use tracing::{debug, warn};

use super::error::describe_code;
use super::{Invocation, RunError};
use crate::types::{OutputSink, Severity};

/// Output collected from a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captured {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Something that can run an `Invocation`.
///
/// `CommandRunner` is the real implementation; action handlers only see
/// this trait.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Runs the command, forwarding every output line to `sink` as it arrives.
    async fn stream(
        &self,
        invocation: &Invocation,
        sink: &dyn OutputSink,
    ) -> Result<Captured, RunError>;

    /// Runs the command quietly and returns what it printed.
    async fn capture(&self, invocation: &Invocation) -> Result<Captured, RunError>;
}

/// Spawns invocations as child processes.
#[derive(Debug, Clone)]
pub struct CommandRunner {
    /// Launch through `cmd /C` so `.cmd` shims such as `firebase.cmd` resolve.
    through_shell: bool,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            through_shell: cfg!(target_os = "windows"),
        }
    }

    fn command(&self, invocation: &Invocation) -> Command {
        let mut cmd = if self.through_shell {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(invocation.program());
            cmd
        } else {
            Command::new(invocation.program())
        };

        cmd.args(invocation.arguments())
            .stdin(if invocation.input().is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(false);

        if let Some(dir) = invocation.working_dir() {
            cmd.current_dir(dir);
        }

        apply_creation_flags(&mut cmd);
        cmd
    }

    fn spawn(&self, invocation: &Invocation) -> Result<Child, RunError> {
        // A missing cwd also surfaces as NotFound from spawn; keep it apart
        // from a missing program.
        if let Some(dir) = invocation.working_dir() {
            if !dir.is_dir() {
                return Err(RunError::MissingDirectory {
                    path: dir.to_path_buf(),
                });
            }
        }

        debug!("Spawning '{}'", invocation);

        let mut child = self.command(invocation).spawn().map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                RunError::ToolNotFound {
                    program: invocation.program().to_string(),
                }
            } else {
                RunError::Io {
                    command: invocation.to_string(),
                    source,
                }
            }
        })?;

        if let Some(input) = invocation.input() {
            if let Some(mut stdin) = child.stdin.take() {
                let payload = input.to_string();
                tokio::spawn(async move {
                    if let Err(e) = stdin.write_all(payload.as_bytes()).await {
                        warn!("Failed to write to child stdin: {}", e);
                    }
                    let _ = stdin.shutdown().await;
                });
            }
        }

        Ok(child)
    }

    fn io_error(invocation: &Invocation, source: std::io::Error) -> RunError {
        RunError::Io {
            command: invocation.to_string(),
            source,
        }
    }
}

#[async_trait]
impl CommandExecutor for CommandRunner {
    async fn stream(
        &self,
        invocation: &Invocation,
        sink: &dyn OutputSink,
    ) -> Result<Captured, RunError> {
        sink.info(&format!("--- Running command: {} ---", invocation));

        let mut child = self.spawn(invocation)?;

        let mut stdout_lines = child
            .stdout
            .take()
            .map(|stdout| BufReader::new(stdout).split(b'\n'));
        let mut stderr_lines = child
            .stderr
            .take()
            .map(|stderr| BufReader::new(stderr).split(b'\n'));

        let mut captured = Captured::default();

        while stdout_lines.is_some() || stderr_lines.is_some() {
            let next = tokio::select! {
                line = next_line(&mut stdout_lines) => StreamLine::Stdout(line),
                line = next_line(&mut stderr_lines) => StreamLine::Stderr(line),
            };

            match next {
                StreamLine::Stdout(line) => {
                    match line.map_err(|e| Self::io_error(invocation, e))? {
                        Some(line) => {
                            push_line(&mut captured.stdout, &line);
                            sink.emit(Severity::Normal, line);
                        }
                        None => stdout_lines = None,
                    }
                }
                StreamLine::Stderr(line) => {
                    match line.map_err(|e| Self::io_error(invocation, e))? {
                        Some(line) => {
                            push_line(&mut captured.stderr, &line);
                            sink.emit(Severity::Error, line);
                        }
                        None => stderr_lines = None,
                    }
                }
            }
        }

        let status = child
            .wait()
            .await
            .map_err(|e| Self::io_error(invocation, e))?;
        captured.code = status.code();

        debug!("'{}' exited with {}", invocation, status);

        if invocation.checks_exit_code() && !status.success() {
            sink.error(&format!(
                "ERROR: Command '{}' failed with exit code {}.\nSTDOUT:\n{}\nSTDERR:\n{}",
                invocation,
                describe_code(&captured.code),
                captured.stdout.trim_end(),
                captured.stderr.trim_end()
            ));
            return Err(RunError::Failed {
                command: invocation.to_string(),
                code: captured.code,
                stdout: captured.stdout,
                stderr: captured.stderr,
            });
        }

        sink.info(&format!(
            "INFO: Command '{}' completed with exit code {}.",
            invocation,
            describe_code(&captured.code)
        ));

        Ok(captured)
    }

    async fn capture(&self, invocation: &Invocation) -> Result<Captured, RunError> {
        let child = self.spawn(invocation)?;
        let output = child
            .wait_with_output()
            .await
            .map_err(|e| Self::io_error(invocation, e))?;

        let captured = Captured {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        if invocation.checks_exit_code() && !output.status.success() {
            return Err(RunError::Failed {
                command: invocation.to_string(),
                code: captured.code,
                stdout: captured.stdout,
                stderr: captured.stderr,
            });
        }

        Ok(captured)
    }
}

enum StreamLine {
    Stdout(std::io::Result<Option<String>>),
    Stderr(std::io::Result<Option<String>>),
}

/// Reads the next line from an open stream; never resolves once the stream is closed.
async fn next_line<R>(lines: &mut Option<Split<BufReader<R>>>) -> std::io::Result<Option<String>>
where
    R: AsyncRead + Unpin,
{
    match lines {
        Some(lines) => Ok(lines.next_segment().await?.map(|bytes| {
            let mut line = String::from_utf8_lossy(&bytes).into_owned();
            if line.ends_with('\r') {
                line.pop();
            }
            line
        })),
        None => std::future::pending().await,
    }
}

fn push_line(buffer: &mut String, line: &str) {
    buffer.push_str(line);
    buffer.push('\n');
}

#[cfg(target_os = "windows")]
fn apply_creation_flags(cmd: &mut Command) -> &mut Command {
    const CREATE_NO_WINDOW: u32 = 0x08000000;
    cmd.creation_flags(CREATE_NO_WINDOW)
}

#[cfg(not(target_os = "windows"))]
fn apply_creation_flags(cmd: &mut Command) -> &mut Command {
    cmd
}
