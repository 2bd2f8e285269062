use crate::types::{OutputLine, Severity};
use crate::ui::wrap::wrap_text;

use super::UIState;

impl UIState {
    pub fn output_lines(&self) -> &[OutputLine] {
        &self.output
    }

    /// Appends a line to the command output. Lines are never removed or
    /// reordered.
    pub fn append_output(&mut self, line: OutputLine) {
        let (width, _) = self.output_pane_size();
        let added_rows = wrap_text(&line.text, width).len();
        self.output.push(line);

        // Keep a scrolled-back view anchored on what the user is reading.
        if !self.is_at_bottom_output {
            self.output_scroll_offset = self.output_scroll_offset.saturating_add(added_rows);
            self.clamp_output_scroll();
        }
    }

    pub fn push_output(&mut self, severity: Severity, text: impl Into<String>) {
        self.append_output(OutputLine::new(severity, text));
    }

    /// Display rows of the output pane at the current width, oldest first.
    pub fn output_rows(&self) -> Vec<(Severity, String)> {
        let (width, _) = self.output_pane_size();
        self.output
            .iter()
            .flat_map(|line| {
                wrap_text(&line.text, width)
                    .into_iter()
                    .map(move |row| (line.severity, row))
            })
            .collect()
    }

    pub fn scroll_output_up(&mut self, rows: usize) {
        self.output_scroll_offset = self.output_scroll_offset.saturating_add(rows);
        self.clamp_output_scroll();
    }

    pub fn scroll_output_down(&mut self, rows: usize) {
        self.output_scroll_offset = self.output_scroll_offset.saturating_sub(rows);
        self.clamp_output_scroll();
    }

    pub fn jump_to_bottom_output(&mut self) {
        self.output_scroll_offset = 0;
        self.is_at_bottom_output = true;
    }

    pub fn clamp_output_scroll(&mut self) {
        let (_, visible) = self.output_pane_size();
        let total = self.output_rows().len();
        let max_scroll = total.saturating_sub(visible);

        self.output_scroll_offset = self.output_scroll_offset.min(max_scroll);
        self.is_at_bottom_output = self.output_scroll_offset == 0;
    }
}

#[cfg(test)]
mod tests {
    use crate::actions::FormInput;
    use crate::types::Severity;
    use crate::ui::state::UIState;

    fn state_with_rows(rows: usize) -> UIState {
        let mut state = UIState::new(&FormInput::default());
        state.terminal_size = (40, 18); // 10 output rows
        for i in 0..rows {
            state.push_output(Severity::Normal, format!("line {i}"));
        }
        state
    }

    #[test]
    fn output_keeps_arrival_order() {
        let mut state = state_with_rows(0);
        state.push_output(Severity::Info, "a");
        state.push_output(Severity::Error, "b");
        state.push_output(Severity::Normal, "c");

        let texts: Vec<_> = state.output_lines().iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn scrolling_is_clamped_to_history() {
        let mut state = state_with_rows(25);

        state.scroll_output_up(100);
        assert_eq!(state.output_scroll_offset, 15);
        assert!(!state.is_at_bottom_output);

        state.scroll_output_down(100);
        assert_eq!(state.output_scroll_offset, 0);
        assert!(state.is_at_bottom_output);
    }

    #[test]
    fn new_output_does_not_move_a_scrolled_view() {
        let mut state = state_with_rows(25);
        state.scroll_output_up(5);

        state.push_output(Severity::Normal, "first\nsecond");

        assert_eq!(state.output_scroll_offset, 7);
    }

    #[test]
    fn multi_line_records_expand_to_rows() {
        let mut state = state_with_rows(0);
        state.push_output(Severity::Error, "ERROR: failed\nSTDOUT:\n\nSTDERR:\nboom");

        let rows = state.output_rows();
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|(severity, _)| *severity == Severity::Error));
        assert_eq!(rows[4].1, "boom");
    }
}
