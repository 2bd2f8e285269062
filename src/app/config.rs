//! Settings: built-in defaults, an optional JSON file, then CLI flags.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::args::AppArgs;
use crate::actions::{FormInput, Toolchain};

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_SETTINGS_FILE: &str = "firebase-automation.json";

pub const DEFAULT_LOG_FILTER: &str = "info,firebase_automation=debug";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub project_id: String,
    pub public_dir: String,
    pub firebase_bin: String,
    pub npm_bin: String,
    pub marker_file: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        let tools = Toolchain::default();
        Self {
            project_id: "your-firebase-project-id".to_string(),
            public_dir: "public".to_string(),
            firebase_bin: tools.firebase,
            npm_bin: tools.npm,
            marker_file: tools.marker_file,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Builds the effective settings for this run.
    ///
    /// An explicit `--config` must exist. The default file is optional.
    pub fn resolve(args: &AppArgs, cwd: &Path) -> Result<Self, ConfigError> {
        let mut settings = match &args.config {
            Some(path) => Self::load(path)?,
            None => {
                let default_path = cwd.join(DEFAULT_SETTINGS_FILE);
                if default_path.is_file() {
                    Self::load(&default_path)?
                } else {
                    Self::default()
                }
            }
        };

        settings.apply_overrides(args);
        Ok(settings)
    }

    pub fn apply_overrides(&mut self, args: &AppArgs) {
        if let Some(project) = &args.project {
            self.project_id = project.clone();
        }
        if let Some(public_dir) = &args.public_dir {
            self.public_dir = public_dir.clone();
        }
        if let Some(firebase_bin) = &args.firebase_bin {
            self.firebase_bin = firebase_bin.clone();
        }
        if let Some(npm_bin) = &args.npm_bin {
            self.npm_bin = npm_bin.clone();
        }
    }

    pub fn toolchain(&self) -> Toolchain {
        Toolchain {
            firebase: self.firebase_bin.clone(),
            npm: self.npm_bin.clone(),
            marker_file: self.marker_file.clone(),
        }
    }

    pub fn form(&self) -> FormInput {
        FormInput {
            project_id: self.project_id.clone(),
            public_dir: self.public_dir.clone(),
        }
    }
}
