use std::path::Path;

use crossterm::event::{KeyCode, KeyEvent};
use tracing::info;

use super::{BrowseMode, BrowseOutcome, DirectoryBrowser};
use crate::types::Severity;
use crate::ui::mode::UIMode;
use crate::ui::state::UIState;

const PAGE: usize = 10;

impl BrowseMode {
    /// Switches `state` into browse mode, starting from the current public
    /// directory.
    pub fn open(&mut self, state: &mut UIState, cwd: &Path) {
        self.browser = Some(DirectoryBrowser::open(state.public_dir.text(), cwd));
        state.mode = UIMode::Browse;
    }

    pub fn handle_key(&mut self, state: &mut UIState, key: KeyEvent) -> BrowseOutcome {
        let Some(browser) = self.browser.as_mut() else {
            state.mode = UIMode::Form;
            return BrowseOutcome::Cancelled;
        };

        let outcome = match key.code {
            KeyCode::Up => {
                browser.move_up(1);
                BrowseOutcome::Continue
            }
            KeyCode::Down => {
                browser.move_down(1);
                BrowseOutcome::Continue
            }
            KeyCode::PageUp => {
                browser.move_up(PAGE);
                BrowseOutcome::Continue
            }
            KeyCode::PageDown => {
                browser.move_down(PAGE);
                BrowseOutcome::Continue
            }
            KeyCode::Enter => {
                browser.descend();
                BrowseOutcome::Continue
            }
            KeyCode::Backspace => {
                browser.ascend();
                BrowseOutcome::Continue
            }
            KeyCode::Char('s') | KeyCode::Char(' ') => {
                BrowseOutcome::Selected(browser.highlighted_path())
            }
            KeyCode::Esc => BrowseOutcome::Cancelled,
            _ => BrowseOutcome::Continue,
        };

        match &outcome {
            BrowseOutcome::Selected(path) => {
                let path = path.display().to_string();
                info!("Public directory set to {}", path);
                state.push_output(
                    Severity::Info,
                    format!("INFO: Public directory selected: {}", path),
                );
                state.public_dir.set(path);
                self.close(state);
            }
            BrowseOutcome::Cancelled => {
                state.push_output(Severity::Info, "INFO: Public directory selection cancelled.");
                self.close(state);
            }
            BrowseOutcome::Continue => {}
        }

        outcome
    }

    fn close(&mut self, state: &mut UIState) {
        self.browser = None;
        state.mode = UIMode::Form;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::FormInput;
    use crossterm::event::KeyModifiers;
    use std::fs;
    use tempfile::TempDir;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn setup() -> (TempDir, UIState, BrowseMode) {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("site").join("dist")).unwrap();
        let state = UIState::new(&FormInput {
            project_id: "demo".to_string(),
            public_dir: "site".to_string(),
        });
        (tmp, state, BrowseMode::new())
    }

    #[test]
    fn selecting_a_subdirectory_updates_the_field() {
        let (tmp, mut state, mut browse) = setup();
        browse.open(&mut state, tmp.path());
        assert_eq!(state.mode, UIMode::Browse);

        browse.handle_key(&mut state, key(KeyCode::Down));
        browse.handle_key(&mut state, key(KeyCode::Down));
        let outcome = browse.handle_key(&mut state, key(KeyCode::Char('s')));

        let expected = tmp.path().join("site").join("dist");
        assert_eq!(outcome, BrowseOutcome::Selected(expected.clone()));
        assert_eq!(state.mode, UIMode::Form);
        assert_eq!(state.public_dir.text(), expected.display().to_string());
        assert_eq!(
            state.output_lines().last().unwrap().text,
            format!("INFO: Public directory selected: {}", expected.display())
        );
        assert!(browse.browser().is_none());
    }

    #[test]
    fn cancelling_keeps_the_field() {
        let (tmp, mut state, mut browse) = setup();
        browse.open(&mut state, tmp.path());
        browse.handle_key(&mut state, key(KeyCode::Backspace));

        assert_eq!(
            browse.handle_key(&mut state, key(KeyCode::Esc)),
            BrowseOutcome::Cancelled
        );
        assert_eq!(state.public_dir.text(), "site");
        assert_eq!(state.mode, UIMode::Form);
        assert_eq!(
            state.output_lines().last().unwrap().text,
            "INFO: Public directory selection cancelled."
        );
    }

    #[test]
    fn space_on_dot_selects_the_listed_directory() {
        let (tmp, mut state, mut browse) = setup();
        browse.open(&mut state, tmp.path());

        let outcome = browse.handle_key(&mut state, key(KeyCode::Char(' ')));
        assert_eq!(outcome, BrowseOutcome::Selected(tmp.path().join("site")));
    }
}
