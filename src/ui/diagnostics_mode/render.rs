//! Rendering of the diagnostics view.
use std::io::Write;

use anyhow::Result;
use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use tracing::Level;
use unicode_width::UnicodeWidthChar;

use super::DiagnosticsMode;
use crate::ui::state::UIState;
use crate::ui::wrap::truncate;

const PROMPT: &str = "log> ";

impl DiagnosticsMode {
    /// Renders filtered log entries into `area`, newest at the bottom, with
    /// the command prompt on the row below it.
    ///
    /// Returns where the text cursor belongs.
    pub fn render(
        &self,
        stdout: &mut impl Write,
        state: &UIState,
        area: (u16, u16, u16, u16),
    ) -> Result<Option<(u16, u16)>> {
        let (x, y, width, height) = area;
        let list_height = height.saturating_sub(1);

        let filtered_logs = state.filtered_logs();
        let total_logs = filtered_logs.len();
        let visible_lines = list_height as usize;

        let end_idx = total_logs.saturating_sub(state.log_scroll_offset);
        let start_idx = end_idx.saturating_sub(visible_lines);

        for (line_idx, log_entry) in filtered_logs[start_idx..end_idx].iter().enumerate() {
            queue!(stdout, cursor::MoveTo(x, y + line_idx as u16))?;

            let timestamp = log_entry
                .timestamp
                .with_timezone(&chrono::Local)
                .format("%H:%M:%S%.3f");

            let level_color = match log_entry.level {
                Level::ERROR => Color::Red,
                Level::WARN => Color::Yellow,
                Level::INFO => Color::Blue,
                Level::DEBUG => Color::White,
                Level::TRACE => Color::DarkGrey,
            };

            let log_line = format!(
                "{} {:5} [{}] {}",
                timestamp,
                log_entry.level.as_str(),
                log_entry.module,
                log_entry.message
            );

            let scrolled_line: String = log_line
                .chars()
                .skip(state.horizontal_scroll_offset)
                .collect();

            queue!(
                stdout,
                SetForegroundColor(level_color),
                Print(truncate(&scrolled_line, width as usize)),
                ResetColor
            )?;
        }

        if state.log_scroll_offset > 0 && width > 15 {
            queue!(
                stdout,
                cursor::MoveTo(x + width - 15, y),
                SetForegroundColor(Color::Yellow),
                Print(format!("↑ +{} more logs", state.log_scroll_offset)),
                ResetColor
            )?;
        }

        if state.horizontal_scroll_offset > 0 {
            queue!(
                stdout,
                cursor::MoveTo(x, y),
                SetForegroundColor(Color::Yellow),
                Print(format!("← +{}", state.horizontal_scroll_offset)),
                ResetColor
            )?;
        }

        let prompt_row = y + list_height;
        queue!(
            stdout,
            cursor::MoveTo(x, prompt_row),
            SetForegroundColor(Color::Cyan),
            Print(PROMPT),
            ResetColor,
            Print(state.diagnostics_input.text())
        )?;

        let input_width: usize = state
            .diagnostics_input
            .text()
            .chars()
            .take(state.diagnostics_input.cursor())
            .map(|c| UnicodeWidthChar::width(c).unwrap_or(0))
            .sum();
        let cursor_x = PROMPT.len() + input_width;

        Ok((cursor_x < width as usize).then_some((x + cursor_x as u16, prompt_row)))
    }
}
