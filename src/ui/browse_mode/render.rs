use std::io::Write;

use anyhow::Result;
use crossterm::{
    cursor, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};

use super::{BrowseEntry, BrowseMode};
use crate::ui::wrap::truncate;

impl BrowseMode {
    pub fn render(&self, stdout: &mut impl Write, area: (u16, u16, u16, u16)) -> Result<()> {
        let (x, y, width, height) = area;
        let Some(browser) = self.browser() else {
            return Ok(());
        };

        queue!(
            stdout,
            cursor::MoveTo(x, y),
            SetAttribute(Attribute::Bold),
            Print(truncate(" Select Public Directory", width as usize)),
            SetAttribute(Attribute::Reset),
            cursor::MoveTo(x, y + 1),
            SetForegroundColor(Color::Cyan),
            Print(truncate(
                &format!(" {}", browser.current().display()),
                width as usize
            )),
            ResetColor
        )?;

        let list_top = y + 3;
        let visible = height.saturating_sub(3) as usize;
        if visible == 0 {
            return Ok(());
        }

        // Keep the highlighted row on screen.
        let first = browser.selected().saturating_sub(visible - 1);
        for (row, (idx, entry)) in browser
            .entries()
            .iter()
            .enumerate()
            .skip(first)
            .take(visible)
            .enumerate()
        {
            let text = match entry {
                BrowseEntry::Dir(name) => format!("  {}/", name),
                other => format!("  {}", other.label()),
            };

            queue!(stdout, cursor::MoveTo(x, list_top + row as u16))?;
            if idx == browser.selected() {
                queue!(stdout, SetAttribute(Attribute::Reverse))?;
            }
            queue!(
                stdout,
                Print(truncate(&text, width as usize)),
                SetAttribute(Attribute::Reset)
            )?;
        }

        Ok(())
    }
}
