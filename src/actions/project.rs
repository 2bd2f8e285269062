use std::path::{Path, PathBuf};

use tracing::debug;

/// Directory the deploy command runs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRoot {
    pub path: PathBuf,
    /// Whether the marker file exists in `path`.
    pub has_marker: bool,
}

/// Picks the directory to deploy from.
///
/// An absolute public directory whose parent holds the marker file means
/// the parent is the project root. Anything else falls back to `cwd`.
pub fn infer_project_root(public_dir: &Path, marker_file: &str, cwd: &Path) -> ProjectRoot {
    let candidate = public_dir
        .is_absolute()
        .then(|| public_dir.parent())
        .flatten()
        .filter(|parent| parent.join(marker_file).is_file());

    let path = match candidate {
        Some(parent) => parent.to_path_buf(),
        None => cwd.to_path_buf(),
    };
    let has_marker = path.join(marker_file).is_file();

    debug!(
        "Inferred project root {} (marker present: {})",
        path.display(),
        has_marker
    );

    ProjectRoot { path, has_marker }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_dir_with_marked_parent_uses_parent() {
        let project = tempfile::tempdir().unwrap();
        std::fs::write(project.path().join("firebase.json"), "{}").unwrap();
        let cwd = tempfile::tempdir().unwrap();

        let root = infer_project_root(
            &project.path().join("public"),
            "firebase.json",
            cwd.path(),
        );

        assert_eq!(root.path, project.path());
        assert!(root.has_marker);
    }

    #[test]
    fn absolute_dir_without_marker_falls_back_to_cwd() {
        let project = tempfile::tempdir().unwrap();
        let cwd = tempfile::tempdir().unwrap();

        let root = infer_project_root(
            &project.path().join("public"),
            "firebase.json",
            cwd.path(),
        );

        assert_eq!(root.path, cwd.path());
        assert!(!root.has_marker);
    }

    #[test]
    fn relative_dir_uses_cwd_and_checks_its_marker() {
        let cwd = tempfile::tempdir().unwrap();
        std::fs::write(cwd.path().join("firebase.json"), "{}").unwrap();

        let root = infer_project_root(Path::new("public"), "firebase.json", cwd.path());

        assert_eq!(root.path, cwd.path());
        assert!(root.has_marker);
    }

    #[test]
    fn missing_parent_is_not_an_error() {
        let cwd = tempfile::tempdir().unwrap();
        let gone = cwd.path().join("a").join("b").join("public");

        let root = infer_project_root(&gone, "firebase.json", cwd.path());

        assert_eq!(root.path, cwd.path());
    }
}
