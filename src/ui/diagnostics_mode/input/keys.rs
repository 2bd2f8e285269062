use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::diagnostics_mode::{step_level, DiagnosticsMode};
use crate::ui::mode::UIMode;
use crate::ui::state::UIState;

impl DiagnosticsMode {
    /// Handles a key event in the diagnostics view.
    ///
    /// Typing goes to the prompt; `+`/`-` on an empty prompt change the
    /// level; arrows and page keys scroll.
    pub fn handle_key(&mut self, state: &mut UIState, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                let input = state.diagnostics_input.text().trim().to_string();
                if !input.is_empty() {
                    self.input_history.push(input.clone());
                    self.history_index = None;

                    self.execute_command(&input, state);

                    state.diagnostics_input.clear();
                }
            }
            KeyCode::Char(c @ ('+' | '-')) if state.diagnostics_input.text().is_empty() => {
                if let UIMode::Diagnostics { filter, level } = state.mode.clone() {
                    state.mode = UIMode::Diagnostics {
                        filter,
                        level: step_level(level, c == '+'),
                    };
                    state.update_log_scroll_state();
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                state.diagnostics_input.insert_char(c);
                self.history_index = None;
            }
            KeyCode::Backspace => {
                if state.diagnostics_input.remove_char_before() {
                    self.history_index = None;
                }
            }
            KeyCode::Delete => {
                state.diagnostics_input.remove_char_at();
            }
            KeyCode::Left => state.diagnostics_input.cursor_left(),
            KeyCode::Right => state.diagnostics_input.cursor_right(),
            KeyCode::Home => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    state.horizontal_scroll_offset =
                        state.horizontal_scroll_offset.saturating_sub(10);
                } else {
                    state.diagnostics_input.cursor_home();
                }
            }
            KeyCode::End => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    state.horizontal_scroll_offset =
                        state.horizontal_scroll_offset.saturating_add(10);
                } else {
                    state.diagnostics_input.cursor_end();
                }
            }
            KeyCode::Up => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    self.navigate_history(state, true);
                } else {
                    state.log_scroll_offset = state.log_scroll_offset.saturating_add(1);
                    state.update_log_scroll_state();
                }
            }
            KeyCode::Down => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    self.navigate_history(state, false);
                } else {
                    state.log_scroll_offset = state.log_scroll_offset.saturating_sub(1);
                    state.update_log_scroll_state();
                }
            }
            KeyCode::PageUp => {
                state.log_scroll_offset = state.log_scroll_offset.saturating_add(10);
                state.update_log_scroll_state();
            }
            KeyCode::PageDown => {
                state.log_scroll_offset = state.log_scroll_offset.saturating_sub(10);
                state.update_log_scroll_state();
            }
            KeyCode::Esc => state.jump_to_bottom_log(),
            _ => {}
        }
    }
}
