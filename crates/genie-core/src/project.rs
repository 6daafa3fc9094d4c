//! Project descriptor and input validation

use crate::error::SetupError;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Optional capabilities that can be layered onto a generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Module {
    Authentication,
    Prisma,
}

impl Module {
    pub fn display_name(&self) -> &'static str {
        match self {
            Module::Authentication => "Authentication",
            Module::Prisma => "Prisma",
        }
    }

    /// Parse a module name as given on the command line
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "authentication" | "auth" => Ok(Module::Authentication),
            "prisma" | "data-layer" => Ok(Module::Prisma),
            other => Err(SetupError::BadRequest(format!("Unknown module: {}", other)).into()),
        }
    }
}

/// Everything known about the project being created, fixed at the start of
/// a run. The directory itself is created by the generator.
#[derive(Debug, Clone)]
pub struct ProjectDescriptor {
    pub name: String,
    pub root: PathBuf,
    pub modules: Vec<Module>,
}

impl ProjectDescriptor {
    pub fn new(name: String, modules: Vec<Module>) -> Result<Self> {
        let root = std::env::current_dir()
            .context("failed to resolve current directory")?
            .join(&name);
        Ok(Self {
            name,
            root,
            modules,
        })
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join("package.json")
    }

    pub fn env_file_path(&self) -> PathBuf {
        self.root.join("env.js")
    }
}

/// Validate and normalize a project name: trimmed, non-empty, and limited
/// to letters, numbers, hyphens, and underscores
pub fn validate_project_name(input: &str) -> Result<String> {
    let name = input.trim();

    if name.is_empty() {
        return Err(SetupError::validation("Project name cannot be empty", "appName").into());
    }

    let valid = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        return Err(SetupError::validation(
            "Project name can only contain letters, numbers, hyphens, and underscores",
            "appName",
        )
        .into());
    }

    Ok(name.to_string())
}
