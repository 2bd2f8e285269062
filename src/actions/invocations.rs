//! Fixed argument vectors for every external command the actions run.
use std::path::Path;

use super::Toolchain;
use crate::firebase::Invocation;

pub(super) fn login(tools: &Toolchain) -> Invocation {
    Invocation::new(&tools.firebase).arg("login")
}

pub(super) fn use_project(tools: &Toolchain, project_id: &str) -> Invocation {
    Invocation::new(&tools.firebase).args(["use", project_id])
}

pub(super) fn init_hosting(tools: &Toolchain, project_id: &str, public_dir: &str) -> Invocation {
    Invocation::new(&tools.firebase).args([
        "init",
        "hosting",
        "--project",
        project_id,
        "--public",
        public_dir,
        "--confirm",
    ])
}

pub(super) fn deploy(tools: &Toolchain, project_id: Option<&str>, root: &Path) -> Invocation {
    let invocation = Invocation::new(&tools.firebase).args(["deploy", "--only", "hosting"]);
    let invocation = match project_id {
        Some(id) => invocation.args(["--project", id]),
        None => invocation,
    };
    invocation.current_dir(root)
}

pub(super) fn npm_version(tools: &Toolchain) -> Invocation {
    Invocation::new(&tools.npm).arg("--version")
}

pub(super) fn install_cli(tools: &Toolchain) -> Invocation {
    Invocation::new(&tools.npm).args(["install", "-g", "firebase-tools"])
}
