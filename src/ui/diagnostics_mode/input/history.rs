use crate::ui::diagnostics_mode::DiagnosticsMode;
use crate::ui::state::UIState;

impl DiagnosticsMode {
    pub(crate) fn navigate_history(&mut self, state: &mut UIState, up: bool) {
        if self.input_history.is_empty() {
            return;
        }

        let new_index = if up {
            match self.history_index {
                None => Some(self.input_history.len() - 1),
                Some(0) => Some(0),
                Some(i) => Some(i - 1),
            }
        } else {
            match self.history_index {
                None => None,
                Some(i) if i + 1 >= self.input_history.len() => None,
                Some(i) => Some(i + 1),
            }
        };

        self.history_index = new_index;

        match new_index {
            Some(index) => state.diagnostics_input.set(self.input_history[index].clone()),
            None => state.diagnostics_input.clear(),
        }
    }
}
