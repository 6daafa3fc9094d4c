//! Idempotent anchor-based patching of the generated env-validation file
//!
//! The boilerplate ships an `env.js` declaring two parallel blocks: a zod
//! server schema and a process-env mapping. Module installers add variables
//! to both blocks by inserting lines immediately after fixed anchor
//! substrings. Each insertion is guarded by a substring-presence check, so
//! applying the same patch set twice is a no-op. A missing anchor leaves
//! that entry untouched rather than failing.
//!
//! This is deliberately not syntax-aware: the anchors are literal text and
//! the result is never re-parsed.

use anyhow::{Context, Result};
use std::path::Path;

/// Start of the server schema declaration block
pub const SERVER_SCHEMA_ANCHOR: &str = "const server = z.object({";

/// Start of the process-env mapping declaration block
pub const PROCESS_ENV_ANCHOR: &str = "const processEnv = {";

/// One environment variable to add to both blocks of the env file
#[derive(Debug, Clone, Copy)]
pub struct EnvVarPatch {
    /// Variable name, e.g. `DATABASE_URL`
    pub key: &'static str,
    /// zod validator expression, e.g. `z.string().min(1)`
    pub schema: &'static str,
}

impl EnvVarPatch {
    pub const fn new(key: &'static str, schema: &'static str) -> Self {
        Self { key, schema }
    }

    fn schema_line(&self) -> String {
        format!("\t{}: {},", self.key, self.schema)
    }

    /// The exact token whose presence marks the mapping as already patched
    fn mapping_guard(&self) -> String {
        format!("{}: process.env.{}", self.key, self.key)
    }

    fn mapping_line(&self) -> String {
        format!("\t{}: process.env.{},", self.key, self.key)
    }
}

/// Insert `line` on a new line immediately after the first occurrence of
/// `anchor`. If the anchor is absent the text is returned unchanged.
fn insert_after_anchor(text: &str, anchor: &str, line: &str) -> String {
    match text.find(anchor) {
        Some(pos) => {
            let end = pos + anchor.len();
            format!("{}\n{}{}", &text[..end], line, &text[end..])
        }
        None => text.to_string(),
    }
}

/// Apply a set of patches to the env file's full text.
///
/// Pure function: idempotent with respect to repeated application, and a
/// no-op for entries whose key is already present or whose anchor is
/// missing.
pub fn apply(text: &str, patches: &[EnvVarPatch]) -> String {
    let mut out = text.to_string();

    for patch in patches {
        if !out.contains(patch.key) {
            out = insert_after_anchor(&out, SERVER_SCHEMA_ANCHOR, &patch.schema_line());
        }
        if !out.contains(&patch.mapping_guard()) {
            out = insert_after_anchor(&out, PROCESS_ENV_ANCHOR, &patch.mapping_line());
        }
    }

    out
}

/// Read, patch, and rewrite an env-validation file in place
pub fn patch_env_file(path: &Path, patches: &[EnvVarPatch]) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let patched = apply(&text, patches);
    std::fs::write(path, patched)
        .with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENV_FILE: &str = "\
import { z } from \"zod\";

const server = z.object({
\tNODE_ENV: z.enum([\"development\", \"test\", \"production\"]),
});

const processEnv = {
\tNODE_ENV: process.env.NODE_ENV,
};
";

    const PATCHES: &[EnvVarPatch] = &[
        EnvVarPatch::new("DATABASE_URL", "z.string()"),
        EnvVarPatch::new("AUTH_GOOGLE_CLIENT_ID", "z.string().min(1)"),
    ];

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn test_inserts_into_both_blocks() {
        let patched = apply(ENV_FILE, PATCHES);

        assert!(patched.contains("\tDATABASE_URL: z.string(),"));
        assert!(patched.contains("\tDATABASE_URL: process.env.DATABASE_URL,"));
        assert!(patched.contains("\tAUTH_GOOGLE_CLIENT_ID: z.string().min(1),"));
        assert!(patched.contains("\tAUTH_GOOGLE_CLIENT_ID: process.env.AUTH_GOOGLE_CLIENT_ID,"));
        // Untouched content survives
        assert!(patched.contains("NODE_ENV: process.env.NODE_ENV,"));
    }

    #[test]
    fn test_entries_inserted_exactly_once() {
        let patched = apply(ENV_FILE, PATCHES);
        assert_eq!(count(&patched, "AUTH_GOOGLE_CLIENT_ID: z.string()"), 1);
        assert_eq!(
            count(&patched, "AUTH_GOOGLE_CLIENT_ID: process.env.AUTH_GOOGLE_CLIENT_ID"),
            1
        );
    }

    #[test]
    fn test_double_application_is_noop() {
        let once = apply(ENV_FILE, PATCHES);
        let twice = apply(&once, PATCHES);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_missing_anchor_leaves_text_unchanged() {
        let input = "export const nothing = true;\n";
        assert_eq!(apply(input, PATCHES), input);
    }

    #[test]
    fn test_missing_mapping_anchor_still_patches_schema() {
        let input = "const server = z.object({\n});\n";
        let patched = apply(input, PATCHES);
        assert!(patched.contains("DATABASE_URL: z.string(),"));
        assert!(!patched.contains("process.env.DATABASE_URL"));
    }

    #[test]
    fn test_present_key_is_not_duplicated() {
        let pre_patched = apply(ENV_FILE, &[EnvVarPatch::new("DATABASE_URL", "z.string()")]);
        let patched = apply(&pre_patched, PATCHES);
        assert_eq!(count(&patched, "DATABASE_URL: z.string()"), 1);
    }

    #[test]
    fn test_patch_env_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("env.js");
        std::fs::write(&path, ENV_FILE).unwrap();

        patch_env_file(&path, PATCHES).unwrap();
        patch_env_file(&path, PATCHES).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(count(&text, "DATABASE_URL: z.string()"), 1);
        assert_eq!(count(&text, "DATABASE_URL: process.env.DATABASE_URL"), 1);
    }
}
