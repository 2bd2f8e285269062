//! Diagnostics for the application itself.
//!
//! In the TUI a `tracing` layer collects events into a buffer that feeds the
//! diagnostics view. Headless runs log to stderr with the stock formatter.
pub mod buffer;
pub mod collector;

pub use buffer::LogBuffer;
pub use collector::TUILogCollector;
