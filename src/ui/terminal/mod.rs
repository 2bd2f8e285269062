//! The terminal front-end: owns the UI state and drives the event loop.
mod controller;
mod events;
mod lifecycle;
mod render;

pub use controller::TerminalUI;
