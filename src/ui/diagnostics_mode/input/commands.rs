use tracing::{debug, Level};

use crate::ui::diagnostics_mode::DiagnosticsMode;
use crate::ui::mode::UIMode;
use crate::ui::state::UIState;

impl DiagnosticsMode {
    pub(crate) fn execute_command(&self, input: &str, state: &mut UIState) {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let Some(command) = parts.first() else {
            return;
        };

        match *command {
            "level" => {
                let Some(requested) = parts.get(1) else {
                    debug!("Usage: level <trace|debug|info|warn|error>");
                    return;
                };
                let Ok(new_level) = requested.parse::<Level>() else {
                    debug!(
                        "Invalid log level: {}. Use trace/debug/info/warn/error",
                        requested
                    );
                    return;
                };

                if let UIMode::Diagnostics { filter, .. } = state.mode.clone() {
                    state.mode = UIMode::Diagnostics {
                        filter,
                        level: new_level,
                    };
                }
                state.update_log_scroll_state();
                debug!("Log level set to: {:?}", new_level);
            }
            "filter" => {
                let filter = (parts.len() >= 2).then(|| parts[1..].join(" "));
                if let UIMode::Diagnostics { level, .. } = state.mode.clone() {
                    state.mode = UIMode::Diagnostics {
                        filter: filter.clone(),
                        level,
                    };
                }
                state.update_log_scroll_state();
                match filter {
                    Some(filter) => debug!("Log filter set to: {}", filter),
                    None => debug!("Log filter cleared"),
                }
            }
            "clear" => {
                state.logs.clear();
                state.jump_to_bottom_log();
                debug!("Log buffer cleared");
            }
            "tail" => match parts.get(1).and_then(|n| n.parse::<usize>().ok()) {
                Some(count) => {
                    let keep_count = count.min(state.logs.len());
                    let remove_count = state.logs.len() - keep_count;
                    state.logs.drain(..remove_count);
                    state.jump_to_bottom_log();
                    debug!("Showing last {} log entries", keep_count);
                }
                None => debug!("Usage: tail <number>"),
            },
            "help" => {
                debug!("Diagnostics commands: level <level>, filter <text>, clear, tail <n>");
            }
            other => {
                debug!(
                    "Unknown diagnostics command: {}. Type 'help' for available commands.",
                    other
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::FormInput;
    use crate::ui::log_entry::LogEntry;
    use chrono::Utc;

    fn state_with_logs(count: usize) -> UIState {
        let mut state = UIState::new(&FormInput::default());
        state.toggle_diagnostics();
        state.add_log_batch(
            (0..count)
                .map(|i| LogEntry {
                    timestamp: Utc::now(),
                    level: Level::INFO,
                    module: "tests".to_string(),
                    message: i.to_string(),
                })
                .collect(),
        );
        state
    }

    #[test]
    fn level_accepts_any_case() {
        let mode = DiagnosticsMode::new();
        let mut state = state_with_logs(0);

        mode.execute_command("level WARN", &mut state);
        assert!(matches!(
            state.mode,
            UIMode::Diagnostics { level: Level::WARN, .. }
        ));

        mode.execute_command("level loud", &mut state);
        assert!(matches!(
            state.mode,
            UIMode::Diagnostics { level: Level::WARN, .. }
        ));
    }

    #[test]
    fn bare_filter_clears_it() {
        let mode = DiagnosticsMode::new();
        let mut state = state_with_logs(0);

        mode.execute_command("filter deploy hosting", &mut state);
        assert!(matches!(
            &state.mode,
            UIMode::Diagnostics { filter: Some(f), .. } if f == "deploy hosting"
        ));

        mode.execute_command("filter", &mut state);
        assert!(matches!(state.mode, UIMode::Diagnostics { filter: None, .. }));
    }

    #[test]
    fn tail_keeps_the_newest_entries() {
        let mode = DiagnosticsMode::new();
        let mut state = state_with_logs(5);

        mode.execute_command("tail 2", &mut state);
        let kept: Vec<_> = state.logs.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(kept, vec!["3", "4"]);

        mode.execute_command("clear", &mut state);
        assert!(state.logs.is_empty());
    }
}
