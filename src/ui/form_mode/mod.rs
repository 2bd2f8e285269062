//! The main screen: project fields, action buttons and the command output.
use crate::actions::ActionKind;

mod input;
mod render;

/// What the terminal loop should do after a key press in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormCommand {
    None,
    Trigger(ActionKind),
    Browse,
}

#[derive(Debug, Default)]
pub struct FormMode;

impl FormMode {
    pub fn new() -> Self {
        Self
    }
}
