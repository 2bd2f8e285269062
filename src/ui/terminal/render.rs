use anyhow::Result;
use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::{stdout, Write};
use unicode_width::UnicodeWidthStr;

use crate::ui::state::FOOTER_ROWS;
use crate::ui::wrap::truncate;
use crate::ui::UIMode;

use super::TerminalUI;

impl TerminalUI {
    pub(super) fn render(&mut self) -> Result<()> {
        let mut stdout = stdout();

        queue!(stdout, Clear(ClearType::All), cursor::MoveTo(0, 0))?;

        let (width, height) = self.state.terminal_size;
        let body_height = height.saturating_sub(FOOTER_ROWS);
        let status_line_row = body_height;

        let cursor_at = match &self.state.mode {
            UIMode::Form => {
                self.form_mode
                    .render(&mut stdout, &self.state, (0, 0, width, body_height))?
            }
            UIMode::Browse => {
                self.browse_mode.render(&mut stdout, (0, 0, width, body_height))?;
                None
            }
            UIMode::Diagnostics { .. } => self.diagnostics_mode.render(
                &mut stdout,
                &self.state,
                (0, 0, width, body_height),
            )?,
        };

        self.render_status_line(&mut stdout, status_line_row, width)?;
        self.render_help_line(&mut stdout, status_line_row + 1, width)?;

        match cursor_at {
            Some((x, y)) => queue!(stdout, cursor::MoveTo(x, y), cursor::Show)?,
            None => queue!(stdout, cursor::Hide)?,
        }

        stdout.flush()?;
        Ok(())
    }

    fn status_text(&self) -> String {
        match &self.state.mode {
            UIMode::Form => {
                let activity = match self.state.running() {
                    Some(kind) => format!("Running {}", kind),
                    None => "Ready".to_string(),
                };
                format!(
                    " Status: {} | Project: {} | Output lines: {} | F9: Diagnostics | Ctrl+C: Exit",
                    activity,
                    self.state.project_id.text().trim(),
                    self.state.output_lines().len()
                )
            }
            UIMode::Browse => {
                let current = self
                    .browse_mode
                    .browser()
                    .map(|b| b.current().display().to_string())
                    .unwrap_or_default();
                format!(" Status: Selecting public directory | {}", current)
            }
            UIMode::Diagnostics { filter, level } => {
                let filter_text = filter
                    .as_ref()
                    .map(|f| format!(" | Filter: {}", f))
                    .unwrap_or_default();
                format!(
                    " Status: Diagnostics | Level: {}{} | Entries: {} | F9: Form",
                    level,
                    filter_text,
                    self.state.logs.len()
                )
            }
        }
    }

    fn render_status_line(&self, stdout: &mut impl Write, row: u16, width: u16) -> Result<()> {
        queue!(
            stdout,
            cursor::MoveTo(0, row),
            SetBackgroundColor(Color::DarkGrey),
            SetForegroundColor(Color::White)
        )?;

        let display_text = truncate(&self.status_text(), width as usize);
        queue!(stdout, Print(&display_text))?;

        let padding = (width as usize).saturating_sub(display_text.width());
        if padding > 0 {
            queue!(stdout, Print(" ".repeat(padding)))?;
        }

        queue!(stdout, ResetColor)?;
        Ok(())
    }

    fn render_help_line(&self, stdout: &mut impl Write, row: u16, width: u16) -> Result<()> {
        let help_text = match &self.state.mode {
            UIMode::Form => {
                " Tab/Shift+Tab: focus | Enter: activate | F1-F4: actions | Ctrl+O: browse | PgUp/PgDn: scroll | Esc: bottom"
            }
            UIMode::Browse => {
                " ↑↓: move | Enter: open | Backspace: parent | s/Space: select | Esc: cancel"
            }
            UIMode::Diagnostics { .. } => {
                " level <lvl> | filter <text> | +/-: level | ↑↓/PgUp/PgDn: scroll | Ctrl+Home/End: H-scroll | F9: form"
            }
        };

        queue!(
            stdout,
            cursor::MoveTo(0, row),
            SetForegroundColor(Color::DarkGrey),
            Print(truncate(help_text, width as usize)),
            ResetColor
        )?;
        Ok(())
    }
}
