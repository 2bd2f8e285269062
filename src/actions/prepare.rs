use std::path::Path;

use thiserror::Error;

use super::project::{infer_project_root, ProjectRoot};
use super::{ActionKind, FormInput, Toolchain};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Firebase Project ID not provided for initialization.")]
    MissingProjectId,
    #[error("Public Directory not provided for initialization.")]
    MissingPublicDir,
    #[error("Public Directory not specified for deployment.")]
    MissingDeploySource,
    #[error("could not determine the current directory: {0}")]
    CurrentDir(String),
}

/// An action whose inputs have been checked and resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreparedAction {
    Login,
    InitHosting {
        project_id: String,
        public_dir: String,
    },
    Deploy {
        /// `None` deploys to the project linked in `.firebaserc`.
        project_id: Option<String>,
        root: ProjectRoot,
    },
    InstallCli,
}

impl PreparedAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            PreparedAction::Login => ActionKind::Login,
            PreparedAction::InitHosting { .. } => ActionKind::InitHosting,
            PreparedAction::Deploy { .. } => ActionKind::Deploy,
            PreparedAction::InstallCli => ActionKind::InstallCli,
        }
    }

    /// Non-fatal problems found while preparing.
    pub fn warnings(&self, tools: &Toolchain) -> Vec<String> {
        match self {
            PreparedAction::Deploy { root, .. } if !root.has_marker => vec![format!(
                "WARNING: {} not found in inferred project root ({}). Deployment might fail. Ensure 'firebase init' was run correctly.",
                tools.marker_file,
                root.path.display()
            )],
            _ => Vec::new(),
        }
    }
}

/// Validates the form for `kind` without touching any external tool.
pub fn prepare(
    kind: ActionKind,
    form: &FormInput,
    tools: &Toolchain,
) -> Result<PreparedAction, ValidationError> {
    let project_id = form.project_id.trim();
    let public_dir = form.public_dir.trim();

    match kind {
        ActionKind::Login => Ok(PreparedAction::Login),
        ActionKind::InstallCli => Ok(PreparedAction::InstallCli),
        ActionKind::InitHosting => {
            if project_id.is_empty() {
                return Err(ValidationError::MissingProjectId);
            }
            if public_dir.is_empty() {
                return Err(ValidationError::MissingPublicDir);
            }
            Ok(PreparedAction::InitHosting {
                project_id: project_id.to_string(),
                public_dir: public_dir.to_string(),
            })
        }
        ActionKind::Deploy => {
            if public_dir.is_empty() {
                return Err(ValidationError::MissingDeploySource);
            }
            let cwd = std::env::current_dir()
                .map_err(|e| ValidationError::CurrentDir(e.to_string()))?;
            let root = infer_project_root(Path::new(public_dir), &tools.marker_file, &cwd);
            Ok(PreparedAction::Deploy {
                project_id: (!project_id.is_empty()).then(|| project_id.to_string()),
                root,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(project_id: &str, public_dir: &str) -> FormInput {
        FormInput {
            project_id: project_id.to_string(),
            public_dir: public_dir.to_string(),
        }
    }

    #[test]
    fn init_requires_project_and_directory() {
        let tools = Toolchain::default();

        assert_eq!(
            prepare(ActionKind::InitHosting, &form("   ", "public"), &tools),
            Err(ValidationError::MissingProjectId)
        );
        assert_eq!(
            prepare(ActionKind::InitHosting, &form("demo", ""), &tools),
            Err(ValidationError::MissingPublicDir)
        );
    }

    #[test]
    fn deploy_requires_directory_only() {
        let tools = Toolchain::default();

        assert_eq!(
            prepare(ActionKind::Deploy, &form("demo", "  "), &tools),
            Err(ValidationError::MissingDeploySource)
        );

        match prepare(ActionKind::Deploy, &form("", "public"), &tools).unwrap() {
            PreparedAction::Deploy { project_id, .. } => assert_eq!(project_id, None),
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn login_and_install_need_no_input() {
        let tools = Toolchain::default();
        assert_eq!(
            prepare(ActionKind::Login, &form("", ""), &tools),
            Ok(PreparedAction::Login)
        );
        assert_eq!(
            prepare(ActionKind::InstallCli, &form("", ""), &tools),
            Ok(PreparedAction::InstallCli)
        );
    }

    #[test]
    fn missing_marker_produces_warning() {
        let dir = tempfile::tempdir().unwrap();
        let tools = Toolchain::default();
        let action = PreparedAction::Deploy {
            project_id: None,
            root: ProjectRoot {
                path: dir.path().to_path_buf(),
                has_marker: false,
            },
        };

        let warnings = action.warnings(&tools);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("WARNING: firebase.json not found"));

        let marked = PreparedAction::Deploy {
            project_id: None,
            root: ProjectRoot {
                path: dir.path().to_path_buf(),
                has_marker: true,
            },
        };
        assert!(marked.warnings(&tools).is_empty());
    }
}
