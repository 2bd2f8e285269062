use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use super::{FormCommand, FormMode};
use crate::actions::ActionKind;
use crate::ui::state::{Focus, UIState};

impl FormMode {
    /// Handles a key press while the form is shown.
    ///
    /// Field edits and scrolling are applied to `state` directly. Anything
    /// that needs the rest of the application (running an action, opening
    /// the directory browser) is returned as a [`FormCommand`]. Buttons that
    /// are disabled yield [`FormCommand::None`].
    pub fn handle_key(&mut self, state: &mut UIState, key: KeyEvent) -> FormCommand {
        let command = match (key.code, key.modifiers) {
            (KeyCode::Tab, _) | (KeyCode::Down, _) => {
                state.focus = state.focus.next();
                FormCommand::None
            }
            (KeyCode::BackTab, _) | (KeyCode::Up, _) => {
                state.focus = state.focus.prev();
                FormCommand::None
            }
            (KeyCode::F(n @ 1..=4), _) => FormCommand::Trigger(ActionKind::ALL[n as usize - 1]),
            (KeyCode::Char('o'), KeyModifiers::CONTROL) => FormCommand::Browse,
            (KeyCode::PageUp, _) => {
                let (_, rows) = state.output_pane_size();
                state.scroll_output_up(rows.max(1));
                FormCommand::None
            }
            (KeyCode::PageDown, _) => {
                let (_, rows) = state.output_pane_size();
                state.scroll_output_down(rows.max(1));
                FormCommand::None
            }
            (KeyCode::Esc, _) => {
                state.jump_to_bottom_output();
                FormCommand::None
            }
            (KeyCode::Enter, _) => match state.focus {
                Focus::ProjectId | Focus::PublicDir => {
                    state.focus = state.focus.next();
                    FormCommand::None
                }
                Focus::Browse => FormCommand::Browse,
                Focus::Action(kind) => FormCommand::Trigger(kind),
            },
            (KeyCode::Char(' '), _) if state.focus.is_button() => match state.focus {
                Focus::Action(kind) => FormCommand::Trigger(kind),
                _ => FormCommand::Browse,
            },
            _ => {
                edit_field(state, key);
                FormCommand::None
            }
        };

        match command {
            FormCommand::Trigger(kind) if !state.is_enabled(Focus::Action(kind)) => {
                debug!("{} button is disabled; ignoring", kind);
                FormCommand::None
            }
            FormCommand::Browse if !state.is_enabled(Focus::Browse) => {
                debug!("Browse button is disabled; ignoring");
                FormCommand::None
            }
            other => other,
        }
    }
}

fn edit_field(state: &mut UIState, key: KeyEvent) {
    let Some(field) = state.focused_field_mut() else {
        return;
    };

    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => field.insert_char(c),
        KeyCode::Backspace => {
            field.remove_char_before();
        }
        KeyCode::Delete => {
            field.remove_char_at();
        }
        KeyCode::Left => field.cursor_left(),
        KeyCode::Right => field.cursor_right(),
        KeyCode::Home => field.cursor_home(),
        KeyCode::End => field.cursor_end(),
        _ => {}
    }
}
