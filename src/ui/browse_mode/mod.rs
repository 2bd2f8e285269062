//! In-terminal directory picker for the public directory.
mod browser;
mod input;
mod render;

pub use browser::{BrowseEntry, BrowseOutcome, DirectoryBrowser};

/// Holds the open browser, if any, between key presses.
#[derive(Debug, Default)]
pub struct BrowseMode {
    browser: Option<DirectoryBrowser>,
}

impl BrowseMode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn browser(&self) -> Option<&DirectoryBrowser> {
        self.browser.as_ref()
    }
}
