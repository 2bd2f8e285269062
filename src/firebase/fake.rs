//! Test double for `CommandExecutor` that never spawns anything.
use std::sync::Mutex;

use async_trait::async_trait;

use super::{Captured, CommandExecutor, Invocation, RunError};
use crate::types::OutputSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallMode {
    Stream,
    Capture,
}

type Responder = Box<dyn Fn(&Invocation) -> Result<Captured, RunError> + Send + Sync>;

pub struct RecordingExecutor {
    calls: Mutex<Vec<(CallMode, Invocation)>>,
    respond: Responder,
}

impl RecordingExecutor {
    /// Every invocation succeeds with empty output.
    pub fn succeeding() -> Self {
        Self::with(|_| {
            Ok(Captured {
                code: Some(0),
                ..Captured::default()
            })
        })
    }

    pub fn with<F>(respond: F) -> Self
    where
        F: Fn(&Invocation) -> Result<Captured, RunError> + Send + Sync + 'static,
    {
        Self {
            calls: Mutex::new(Vec::new()),
            respond: Box::new(respond),
        }
    }

    pub fn calls(&self) -> Vec<(CallMode, Invocation)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn argvs(&self) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .map(|(_, invocation)| invocation.argv().into_iter().map(String::from).collect())
            .collect()
    }

    fn record(&self, mode: CallMode, invocation: &Invocation) -> Result<Captured, RunError> {
        self.calls.lock().unwrap().push((mode, invocation.clone()));
        (self.respond)(invocation)
    }
}

#[async_trait]
impl CommandExecutor for RecordingExecutor {
    async fn stream(
        &self,
        invocation: &Invocation,
        _sink: &dyn OutputSink,
    ) -> Result<Captured, RunError> {
        self.record(CallMode::Stream, invocation)
    }

    async fn capture(&self, invocation: &Invocation) -> Result<Captured, RunError> {
        self.record(CallMode::Capture, invocation)
    }
}

pub fn not_found(invocation: &Invocation) -> RunError {
    RunError::ToolNotFound {
        program: invocation.program().to_string(),
    }
}

pub fn exit_with(invocation: &Invocation, code: i32) -> RunError {
    RunError::Failed {
        command: invocation.to_string(),
        code: Some(code),
        stdout: String::new(),
        stderr: String::new(),
    }
}
