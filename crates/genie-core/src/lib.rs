//! Genie Core - Shared library for the next-genie project bootstrapper
//!
//! This library provides the machinery behind the `next-genie` CLI: it
//! scaffolds a Next.js project from a boilerplate template via
//! `create-next-app`, then optionally wires authentication (next-auth)
//! and a database ORM (Prisma) into the generated tree.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Package-manager detection, runtime
//!   version checks, shell execution, the env-file patcher, and the
//!   package manifest model
//! - **Layer 2: Workflow** - The project generator and per-module
//!   installers that compose the core operations
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts
//!   (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompt module

pub mod error;
pub mod generator;
pub mod manifest;
pub mod modules;
pub mod patch;
pub mod pm;
pub mod project;
pub mod runtime;
pub mod shell;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::{ErrorEnvelope, SetupError};
pub use manifest::PackageManifest;
pub use patch::EnvVarPatch;
pub use pm::PackageManager;
pub use project::{Module, ProjectDescriptor};

#[cfg(feature = "tui")]
pub use tui::run;
