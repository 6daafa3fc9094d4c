//! Module installers
//!
//! Each installer layers one optional capability onto an already-generated
//! project: it pins a dependency in the manifest, runs the install, patches
//! the env-validation file, and writes its template files. There is no
//! rollback: a failure partway leaves the project partially configured,
//! which the orchestrator reports rather than hides.

pub mod auth;
pub mod prisma;

use crate::project::{Module, ProjectDescriptor};
use anyhow::{Context, Result};
use std::path::Path;

/// Install command shared by both modules. `--legacy-peer-deps` matches
/// the boilerplate's own install instructions.
pub(crate) const INSTALL_COMMAND: &str = "npm install --legacy-peer-deps";

/// Run the installer for one selected module
pub async fn install(module: Module, project: &ProjectDescriptor) -> Result<()> {
    match module {
        Module::Authentication => auth::install(project).await,
        Module::Prisma => prisma::install(project).await,
    }
}

/// Write a template file at a fixed relative path, creating parent
/// directories and overwriting unconditionally
pub(crate) fn write_template(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write {}", path.display()))
}
