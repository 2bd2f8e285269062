//! Requests from the UI loop to the background dispatcher.
use crate::actions::PreparedAction;

#[derive(Debug)]
pub enum UIAction {
    /// Runs a validated action on a worker task.
    Run(PreparedAction),
    /// Stops the dispatcher. Workers already running are left alone.
    Exit,
}
