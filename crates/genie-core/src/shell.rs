//! Shell execution wrapper
//!
//! Every external tool (node, npm, create-next-app, prisma) is invoked
//! through `sh -c` with captured stdout/stderr. A non-zero exit becomes an
//! error whose text includes the command and trimmed stderr, which the
//! generator relies on for conflict detection.

use anyhow::{Context, Result};
use std::path::Path;
use tokio::process::Command;

async fn run(command: &str, dir: Option<&Path>) -> Result<String> {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    if let Some(dir) = dir {
        cmd.current_dir(dir);
    }

    let output = cmd
        .output()
        .await
        .with_context(|| format!("failed to run `{}`", command))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!(
            "`{}` failed ({}): {}",
            command,
            output.status,
            stderr.trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Run a shell command in the current working directory, returning stdout
pub async fn run_shell(command: &str) -> Result<String> {
    run(command, None).await
}

/// Run a shell command inside `dir`, returning stdout
pub async fn run_shell_in(dir: &Path, command: &str) -> Result<String> {
    run(command, Some(dir)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_captures_stdout() {
        let out = run_shell("printf hello").await.unwrap();
        assert_eq!(out, "hello");
    }

    #[tokio::test]
    async fn test_nonzero_exit_is_error_with_stderr() {
        let err = run_shell("printf oops >&2; exit 3").await.unwrap_err();
        let text = err.to_string();
        assert!(text.contains("oops"));
        assert!(text.contains("exit"));
    }

    #[tokio::test]
    async fn test_runs_in_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = run_shell_in(dir.path(), "pwd").await.unwrap();
        // Canonicalize both sides; temp dirs are often symlinked on macOS
        let reported = std::fs::canonicalize(out.trim()).unwrap();
        let expected = std::fs::canonicalize(dir.path()).unwrap();
        assert_eq!(reported, expected);
    }
}
