//! Version verification for Node.js and npm
//!
//! Each check shells out for the tool's version string and compares it
//! against a hard-coded minimum using semver precedence. Any subprocess
//! failure is reported uniformly as "<tool> Not Found" rather than
//! surfacing raw stderr; an installed-but-too-old tool keeps the detailed
//! expected/found message.

use crate::error::SetupError;
use crate::shell;
use anyhow::Result;
use semver::Version;

const NODE_MIN: Version = Version::new(22, 12, 0);
const NPM_MIN: Version = Version::new(10, 9, 0);

/// A verified runtime tool
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Version,
}

fn not_found(tool: &str) -> SetupError {
    SetupError::RequirementNotMet(format!("{} Not Found", tool))
}

/// Parse a raw `--version` output, stripping any leading non-numeric
/// prefix (`v22.12.0` -> `22.12.0`)
fn parse_installed(raw: &str) -> Option<Version> {
    let cleaned = raw.trim().trim_start_matches(|c: char| !c.is_ascii_digit());
    Version::parse(cleaned).ok()
}

/// Validate a captured version string against a required minimum
fn ensure_min_version(tool: &'static str, raw: &str, required: &Version) -> Result<Version> {
    if raw.trim().is_empty() {
        return Err(not_found(tool).into());
    }

    let installed = parse_installed(raw).ok_or_else(|| not_found(tool))?;

    if installed < *required {
        return Err(SetupError::RequirementNotMet(format!(
            "Expected {} version {}, but found {}",
            tool, required, installed
        ))
        .into());
    }

    Ok(installed)
}

/// Verify that Node.js is installed at version 22.12.0 or newer
pub async fn verify_node() -> Result<RuntimeInfo> {
    let stdout = shell::run_shell("node -v")
        .await
        .map_err(|_| not_found("NodeJS"))?;
    let version = ensure_min_version("NodeJS", &stdout, &NODE_MIN)?;
    Ok(RuntimeInfo {
        name: "NodeJS",
        version,
    })
}

/// Verify that npm is installed at version 10.9.0 or newer
pub async fn verify_npm() -> Result<RuntimeInfo> {
    let stdout = shell::run_shell("npm -v")
        .await
        .map_err(|_| not_found("NPM"))?;
    let version = ensure_min_version("NPM", &stdout, &NPM_MIN)?;
    Ok(RuntimeInfo {
        name: "NPM",
        version,
    })
}

/// Run both runtime checks sequentially, failing on the first unmet one
pub async fn verify_runtimes() -> Result<Vec<RuntimeInfo>> {
    Ok(vec![verify_node().await?, verify_npm().await?])
}
