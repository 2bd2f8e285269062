//! Terminal front-end: the project form, the directory browser and the
//! diagnostics viewer.
pub mod action;
pub mod browse_mode;
pub mod diagnostics_mode;
pub mod event;
pub mod form_mode;
pub mod log_entry;
pub mod mode;
pub mod runner;
pub mod state;
pub mod terminal;
pub mod wrap;

pub use action::UIAction;
pub use browse_mode::BrowseMode;
pub use diagnostics_mode::DiagnosticsMode;
pub use event::UIEvent;
pub use form_mode::{FormCommand, FormMode};
pub use log_entry::LogEntry;
pub use mode::UIMode;
pub use runner::run_tui;
pub use state::UIState;
pub use terminal::TerminalUI;
