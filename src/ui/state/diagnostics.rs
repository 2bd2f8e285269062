use crate::ui::{log_entry::LogEntry, mode::UIMode};

use super::{UIState, FOOTER_ROWS};

impl UIState {
    pub fn add_log_batch(&mut self, entries: Vec<LogEntry>) {
        let new_entries_count = entries.len();

        for entry in entries {
            if self.logs.len() >= self.max_log_entries {
                self.logs.pop_front();
            }
            self.logs.push_back(entry);
        }

        if matches!(self.mode, UIMode::Diagnostics { .. }) && !self.is_at_bottom_log {
            self.log_scroll_offset = self.log_scroll_offset.saturating_add(new_entries_count);
            self.update_log_scroll_state();
        }
    }

    /// Rows available to the diagnostics list (everything but the footer
    /// and the command input line).
    pub fn diagnostics_visible_rows(&self) -> usize {
        self.terminal_size.1.saturating_sub(FOOTER_ROWS + 1) as usize
    }

    pub fn update_log_scroll_state(&mut self) {
        let total_logs = self.filtered_logs().len();
        let max_scroll = total_logs.saturating_sub(self.diagnostics_visible_rows());

        self.log_scroll_offset = self.log_scroll_offset.min(max_scroll);
        self.is_at_bottom_log = self.log_scroll_offset == 0;
    }

    pub fn jump_to_bottom_log(&mut self) {
        self.log_scroll_offset = 0;
        self.is_at_bottom_log = true;
    }

    pub fn filtered_logs(&self) -> Vec<&LogEntry> {
        match &self.mode {
            UIMode::Diagnostics { filter, level } => self
                .logs
                .iter()
                .filter(|entry| {
                    entry.level <= *level
                        && filter
                            .as_ref()
                            .map(|f| match f.strip_prefix('-') {
                                Some(exclusion) => !entry.module.contains(exclusion),
                                None => entry.module.contains(f) || entry.message.contains(f),
                            })
                            .unwrap_or(true)
                })
                .collect(),
            _ => self.logs.iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use tracing::Level;

    use crate::actions::FormInput;
    use crate::ui::log_entry::LogEntry;
    use crate::ui::mode::UIMode;
    use crate::ui::state::UIState;

    fn entry(level: Level, module: &str, message: &str) -> LogEntry {
        LogEntry {
            timestamp: Utc::now(),
            level,
            module: module.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn filters_by_level_and_module() {
        let mut state = UIState::new(&FormInput::default());
        state.add_log_batch(vec![
            entry(Level::DEBUG, "runner", "spawning firebase"),
            entry(Level::WARN, "install", "npm missing"),
            entry(Level::ERROR, "runner", "io failure"),
        ]);

        state.mode = UIMode::Diagnostics {
            filter: None,
            level: Level::WARN,
        };
        assert_eq!(state.filtered_logs().len(), 2);

        state.mode = UIMode::Diagnostics {
            filter: Some("-runner".to_string()),
            level: Level::TRACE,
        };
        let kept: Vec<_> = state.filtered_logs().iter().map(|e| e.module.as_str()).collect();
        assert_eq!(kept, vec!["install"]);

        state.mode = UIMode::Diagnostics {
            filter: Some("firebase".to_string()),
            level: Level::TRACE,
        };
        assert_eq!(state.filtered_logs().len(), 1);
    }

    #[test]
    fn log_ring_is_bounded() {
        let mut state = UIState::new(&FormInput::default());
        state.max_log_entries = 3;
        state.add_log_batch(
            (0..5)
                .map(|i| entry(Level::INFO, "tests", &i.to_string()))
                .collect(),
        );

        let messages: Vec<_> = state.logs.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["2", "3", "4"]);
    }
}
