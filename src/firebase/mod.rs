//! Running external tools (the Firebase CLI, npm) as subprocesses.
//!
//! Everything the application actually does is delegated to these tools.
//! This module spawns them, streams their output into an `OutputSink` and
//! turns spawn failures and non-zero exits into typed errors.
mod error;
mod invocation;
mod runner;

pub(crate) use error::describe_code;
pub use error::RunError;
pub use invocation::Invocation;
pub use runner::{Captured, CommandExecutor, CommandRunner};

#[cfg(test)]
pub(crate) mod fake;
