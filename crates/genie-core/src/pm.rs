//! Package-manager detection
//!
//! Infers which package manager launched the tool by scanning the invoking
//! command line for indicator substrings, in fixed priority order. This is
//! a heuristic: a command line where one package manager shells out to
//! another resolves to whichever indicator matches first.

use crate::error::SetupError;
use anyhow::Result;
use std::fmt;

/// Supported package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

/// Indicator substrings checked in priority order; first match wins
const INDICATORS: &[(&str, PackageManager)] = &[
    ("npx", PackageManager::Npm),
    ("yarn", PackageManager::Yarn),
    ("pnpm", PackageManager::Pnpm),
    ("bun", PackageManager::Bun),
];

impl PackageManager {
    pub fn name(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }

    /// The one-shot executor prefix used to run packages without a
    /// permanent install (e.g. `npx create-next-app`)
    pub fn exec_prefix(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npx",
            PackageManager::Yarn => "yarn dlx",
            PackageManager::Pnpm => "pnpm dlx",
            PackageManager::Bun => "bunx",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Detect the package manager from the current process invocation
pub fn detect() -> Result<PackageManager> {
    let command_line = std::env::args().collect::<Vec<_>>().join(" ");
    detect_from(&command_line)
}

/// Detect the package manager from a full command line
pub fn detect_from(command_line: &str) -> Result<PackageManager> {
    if command_line.is_empty() {
        return Err(SetupError::RequirementNotMet("Can not identify package manager".into()).into());
    }

    for (indicator, pm) in INDICATORS {
        if command_line.contains(indicator) {
            return Ok(*pm);
        }
    }

    anyhow::bail!("Could not determine the package manager.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SetupError;

    #[test]
    fn test_detect_each_indicator() {
        assert_eq!(
            detect_from("npx next-genie").unwrap(),
            PackageManager::Npm
        );
        assert_eq!(
            detect_from("yarn dlx next-genie").unwrap(),
            PackageManager::Yarn
        );
        assert_eq!(
            detect_from("pnpm dlx next-genie").unwrap(),
            PackageManager::Pnpm
        );
        assert_eq!(
            detect_from("bunx next-genie").unwrap(),
            PackageManager::Bun
        );
    }

    #[test]
    fn test_indicator_anywhere_in_command_line() {
        assert_eq!(
            detect_from("/usr/local/bin/node /tmp/npx-cache/next-genie").unwrap(),
            PackageManager::Npm
        );
    }

    #[test]
    fn test_priority_order_when_multiple_match() {
        // npx beats everything
        assert_eq!(
            detect_from("yarn exec npx next-genie").unwrap(),
            PackageManager::Npm
        );
        // yarn beats pnpm and bun
        assert_eq!(
            detect_from("pnpm run yarn next-genie").unwrap(),
            PackageManager::Yarn
        );
    }

    #[test]
    fn test_empty_command_line_is_requirement_not_met() {
        let err = detect_from("").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SetupError>(),
            Some(SetupError::RequirementNotMet(_))
        ));
    }

    #[test]
    fn test_unknown_command_line_is_generic_failure() {
        let err = detect_from("cargo run next-genie").unwrap_err();
        assert!(err.downcast_ref::<SetupError>().is_none());
    }

    #[test]
    fn test_exec_prefixes() {
        assert_eq!(PackageManager::Npm.exec_prefix(), "npx");
        assert_eq!(PackageManager::Yarn.exec_prefix(), "yarn dlx");
        assert_eq!(PackageManager::Pnpm.exec_prefix(), "pnpm dlx");
        assert_eq!(PackageManager::Bun.exec_prefix(), "bunx");
    }
}
