use std::io::Write;

use anyhow::Result;
use crossterm::{
    cursor, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::FormMode;
use crate::actions::ActionKind;
use crate::types::Severity;
use crate::ui::state::{Field, Focus, UIState};
use crate::ui::wrap::truncate;

const PROJECT_LABEL: &str = "Firebase Project ID: ";
const PUBLIC_DIR_LABEL: &str = "Public Directory:    ";
const BROWSE_LABEL: &str = "Browse...";

impl FormMode {
    /// Draws the form into `area` (x, y, width, height).
    ///
    /// The first rows hold the title, both fields and the button row; the
    /// rest is the output pane. Returns the screen position of the text
    /// cursor when a field has focus.
    pub fn render(
        &self,
        stdout: &mut impl Write,
        state: &UIState,
        area: (u16, u16, u16, u16),
    ) -> Result<Option<(u16, u16)>> {
        let (x, y, width, height) = area;

        queue!(
            stdout,
            cursor::MoveTo(x, y),
            SetAttribute(Attribute::Bold),
            SetForegroundColor(Color::Yellow),
            Print(truncate(" Firebase Automation Tool", width as usize)),
            ResetColor,
            SetAttribute(Attribute::Reset)
        )?;

        let browse_width = BROWSE_LABEL.len() as u16 + 4;
        let mut cursor_at = None;
        for (row, label, field, focus, room) in [
            (1, PROJECT_LABEL, &state.project_id, Focus::ProjectId, width),
            (
                2,
                PUBLIC_DIR_LABEL,
                &state.public_dir,
                Focus::PublicDir,
                width.saturating_sub(browse_width + 1),
            ),
        ] {
            if let Some(pos) = render_field(stdout, state, (x, y + row, room), label, field, focus)? {
                cursor_at = Some(pos);
            }
        }

        render_button(
            stdout,
            state,
            (x + width.saturating_sub(browse_width), y + 2),
            BROWSE_LABEL,
            Focus::Browse,
        )?;

        // Action buttons flow over two rows on narrow terminals.
        let (mut button_x, mut button_y) = (x, y + 3);
        for kind in ActionKind::ALL {
            let label = kind.label();
            let button_width = label.width() as u16 + 4;
            if button_x > x && button_x + button_width > x + width {
                if button_y == y + 4 {
                    break;
                }
                button_x = x;
                button_y += 1;
            }
            render_button(stdout, state, (button_x, button_y), label, Focus::Action(kind))?;
            button_x += button_width + 1;
        }

        let pane_label = match state.running() {
            Some(kind) => format!("── Output ── running {} ...", kind),
            None => "── Output ──".to_string(),
        };
        queue!(
            stdout,
            cursor::MoveTo(x, y + 5),
            SetForegroundColor(Color::DarkGrey),
            Print(truncate(&pane_label, width as usize)),
            ResetColor
        )?;

        let pane_top = y + 6;
        let pane_height = height.saturating_sub(6) as usize;
        self.render_output(stdout, state, (x, pane_top, width, pane_height as u16))?;

        Ok(cursor_at)
    }

    fn render_output(
        &self,
        stdout: &mut impl Write,
        state: &UIState,
        area: (u16, u16, u16, u16),
    ) -> Result<()> {
        let (x, y, width, height) = area;
        let rows = state.output_rows();
        let visible = height as usize;

        let end = rows.len().saturating_sub(state.output_scroll_offset);
        let start = end.saturating_sub(visible);

        for (line_idx, (severity, text)) in rows[start..end].iter().enumerate() {
            queue!(stdout, cursor::MoveTo(x, y + line_idx as u16))?;
            match severity {
                Severity::Info => queue!(stdout, SetForegroundColor(Color::Blue), Print(text))?,
                Severity::Normal => queue!(stdout, ResetColor, Print(text))?,
                Severity::Error => queue!(stdout, SetForegroundColor(Color::Red), Print(text))?,
            }
            queue!(stdout, ResetColor)?;
        }

        if state.output_scroll_offset > 0 && width > 20 {
            queue!(
                stdout,
                cursor::MoveTo(x + width - 20, y),
                SetForegroundColor(Color::Yellow),
                Print(format!("↓ +{} more lines", state.output_scroll_offset)),
                ResetColor
            )?;
        }

        Ok(())
    }
}

fn render_field(
    stdout: &mut impl Write,
    state: &UIState,
    at: (u16, u16, u16),
    label: &str,
    field: &Field,
    focus: Focus,
) -> Result<Option<(u16, u16)>> {
    let (x, y, width) = at;
    let focused = state.focus == focus;

    queue!(stdout, cursor::MoveTo(x, y))?;
    if focused {
        queue!(stdout, SetForegroundColor(Color::Cyan))?;
    }
    queue!(stdout, Print(label), ResetColor)?;

    let room = (width as usize).saturating_sub(label.len());
    queue!(stdout, Print(truncate(field.text(), room)))?;

    if !focused {
        return Ok(None);
    }

    let before_cursor: usize = field
        .text()
        .chars()
        .take(field.cursor())
        .map(|c| UnicodeWidthChar::width(c).unwrap_or(0))
        .sum();
    let cursor_x = label.len() + before_cursor;
    Ok((cursor_x < width as usize).then_some((x + cursor_x as u16, y)))
}

fn render_button(
    stdout: &mut impl Write,
    state: &UIState,
    at: (u16, u16),
    label: &str,
    focus: Focus,
) -> Result<()> {
    let (x, y) = at;
    let color = if state.is_enabled(focus) {
        Color::White
    } else {
        Color::DarkGrey
    };

    queue!(stdout, cursor::MoveTo(x, y))?;
    if state.focus == focus && state.is_enabled(focus) {
        queue!(stdout, SetAttribute(Attribute::Reverse))?;
    }
    queue!(
        stdout,
        SetForegroundColor(color),
        Print(format!("[ {} ]", label)),
        ResetColor,
        SetAttribute(Attribute::Reset)
    )?;
    Ok(())
}
