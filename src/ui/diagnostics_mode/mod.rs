//! Viewer for the application's own `tracing` output.
use tracing::Level;

mod input;
mod render;

/// Keeps the command history of the diagnostics prompt.
#[derive(Debug, Default)]
pub struct DiagnosticsMode {
    input_history: Vec<String>,
    history_index: Option<usize>,
}

impl DiagnosticsMode {
    pub fn new() -> Self {
        Self::default()
    }
}

const LEVELS: [Level; 5] = [
    Level::ERROR,
    Level::WARN,
    Level::INFO,
    Level::DEBUG,
    Level::TRACE,
];

/// One step more (`more == true`) or less verbose than `level`.
pub(crate) fn step_level(level: Level, more: bool) -> Level {
    let idx = LEVELS.iter().position(|l| *l == level).unwrap_or(3);
    let idx = if more {
        (idx + 1).min(LEVELS.len() - 1)
    } else {
        idx.saturating_sub(1)
    };
    LEVELS[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_steps_saturate() {
        assert_eq!(step_level(Level::INFO, true), Level::DEBUG);
        assert_eq!(step_level(Level::TRACE, true), Level::TRACE);
        assert_eq!(step_level(Level::WARN, false), Level::ERROR);
        assert_eq!(step_level(Level::ERROR, false), Level::ERROR);
    }
}
