use std::path::{Path, PathBuf};

use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseEntry {
    /// `.`: the directory being listed.
    Current,
    /// `..`
    Parent,
    Dir(String),
}

impl BrowseEntry {
    pub fn label(&self) -> &str {
        match self {
            BrowseEntry::Current => ".",
            BrowseEntry::Parent => "..",
            BrowseEntry::Dir(name) => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseOutcome {
    Continue,
    Selected(PathBuf),
    Cancelled,
}

/// A listing of one directory's subdirectories with a highlighted row.
#[derive(Debug, Clone)]
pub struct DirectoryBrowser {
    current: PathBuf,
    entries: Vec<BrowseEntry>,
    selected: usize,
}

impl DirectoryBrowser {
    /// Opens at `start`, resolved against `cwd` when relative. Falls back to
    /// `cwd` when `start` is empty or not a directory.
    pub fn open(start: &str, cwd: &Path) -> Self {
        let start = start.trim();
        let candidate = cwd.join(start);
        let current = if !start.is_empty() && candidate.is_dir() {
            candidate
        } else {
            cwd.to_path_buf()
        };

        let mut browser = Self {
            current,
            entries: vec![BrowseEntry::Current],
            selected: 0,
        };
        if let Some(entries) = list_directory(&browser.current) {
            browser.entries = entries;
        }
        browser
    }

    pub fn current(&self) -> &Path {
        &self.current
    }

    pub fn entries(&self) -> &[BrowseEntry] {
        &self.entries
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn move_up(&mut self, rows: usize) {
        self.selected = self.selected.saturating_sub(rows);
    }

    pub fn move_down(&mut self, rows: usize) {
        self.selected = (self.selected + rows).min(self.entries.len().saturating_sub(1));
    }

    /// Path the highlighted row stands for.
    pub fn highlighted_path(&self) -> PathBuf {
        match self.entries.get(self.selected) {
            Some(BrowseEntry::Dir(name)) => self.current.join(name),
            Some(BrowseEntry::Parent) => self
                .current
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| self.current.clone()),
            _ => self.current.clone(),
        }
    }

    /// Enters the highlighted directory. Returns false if the listing did
    /// not change.
    pub fn descend(&mut self) -> bool {
        match self.entries.get(self.selected) {
            Some(BrowseEntry::Dir(_)) | Some(BrowseEntry::Parent) => {
                let target = self.highlighted_path();
                self.change_to(target)
            }
            _ => false,
        }
    }

    pub fn ascend(&mut self) -> bool {
        match self.current.parent() {
            Some(parent) => {
                let parent = parent.to_path_buf();
                self.change_to(parent)
            }
            None => false,
        }
    }

    fn change_to(&mut self, target: PathBuf) -> bool {
        match list_directory(&target) {
            Some(entries) => {
                debug!("Browsing {}", target.display());
                self.current = target;
                self.entries = entries;
                self.selected = 0;
                true
            }
            None => false,
        }
    }
}

/// `.`, `..` (unless at a root) and subdirectories sorted case-insensitively.
fn list_directory(dir: &Path) -> Option<Vec<BrowseEntry>> {
    let read = match std::fs::read_dir(dir) {
        Ok(read) => read,
        Err(e) => {
            warn!("Cannot list {}: {}", dir.display(), e);
            return None;
        }
    };

    let mut names: Vec<String> = read
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort_by_key(|name| name.to_lowercase());

    let mut entries = vec![BrowseEntry::Current];
    if dir.parent().is_some() {
        entries.push(BrowseEntry::Parent);
    }
    entries.extend(names.into_iter().map(BrowseEntry::Dir));
    Some(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn tree() -> TempDir {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("public")).unwrap();
        fs::create_dir(tmp.path().join("Assets")).unwrap();
        fs::create_dir(tmp.path().join("public").join("img")).unwrap();
        fs::write(tmp.path().join("firebase.json"), "{}").unwrap();
        tmp
    }

    fn labels(browser: &DirectoryBrowser) -> Vec<&str> {
        browser.entries().iter().map(BrowseEntry::label).collect()
    }

    #[test]
    fn lists_only_directories_sorted_case_insensitively() {
        let tmp = tree();
        let browser = DirectoryBrowser::open("", tmp.path());

        assert_eq!(browser.current(), tmp.path());
        assert_eq!(labels(&browser), vec![".", "..", "Assets", "public"]);
    }

    #[test]
    fn relative_start_is_resolved_against_cwd() {
        let tmp = tree();
        let browser = DirectoryBrowser::open("public", tmp.path());

        assert_eq!(browser.current(), tmp.path().join("public"));
        assert_eq!(labels(&browser), vec![".", "..", "img"]);
    }

    #[test]
    fn missing_start_falls_back_to_cwd() {
        let tmp = tree();
        let browser = DirectoryBrowser::open("does-not-exist", tmp.path());
        assert_eq!(browser.current(), tmp.path());
    }

    #[test]
    fn descend_and_ascend() {
        let tmp = tree();
        let mut browser = DirectoryBrowser::open("", tmp.path());

        browser.move_down(3);
        assert_eq!(browser.highlighted_path(), tmp.path().join("public"));
        assert!(browser.descend());
        assert_eq!(browser.current(), tmp.path().join("public"));
        assert_eq!(browser.selected(), 0);

        assert!(browser.ascend());
        assert_eq!(browser.current(), tmp.path());
    }

    #[test]
    fn descending_into_current_does_nothing() {
        let tmp = tree();
        let mut browser = DirectoryBrowser::open("", tmp.path());
        assert!(!browser.descend());
        assert_eq!(browser.highlighted_path(), tmp.path());
    }

    #[test]
    fn vanished_directory_leaves_listing_unchanged() {
        let tmp = tree();
        let mut browser = DirectoryBrowser::open("", tmp.path());
        browser.move_down(2);
        fs::remove_dir(tmp.path().join("Assets")).unwrap();

        assert!(!browser.descend());
        assert_eq!(browser.current(), tmp.path());
        assert_eq!(labels(&browser), vec![".", "..", "Assets", "public"]);
    }

    #[test]
    fn selection_is_clamped() {
        let tmp = tree();
        let mut browser = DirectoryBrowser::open("", tmp.path());
        browser.move_down(100);
        assert_eq!(browser.selected(), 3);
        browser.move_up(100);
        assert_eq!(browser.selected(), 0);
    }
}
