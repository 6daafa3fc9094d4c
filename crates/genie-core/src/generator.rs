//! Project generation via `create-next-app`
//!
//! Resolves the Next.js version pinned by the boilerplate (with a
//! hard-coded fallback when the network is unavailable), shells out to
//! `create-next-app` through the detected package manager, then rewrites
//! the generated manifest name and issue-template placeholders.

use crate::error::SetupError;
use crate::manifest::PackageManifest;
use crate::pm;
use crate::project::ProjectDescriptor;
use crate::shell;
use anyhow::{Context, Result};
use serde::Deserialize;
use url::Url;

const BOILERPLATE_MANIFEST_URL: &str =
    "https://raw.githubusercontent.com/0xsarwagya/next-boilerplate/refs/heads/base/package.json";
const BOILERPLATE_TEMPLATE_URL: &str = "https://github.com/0xsarwagya/next-boilerplate/tree/base";

/// Used when the boilerplate manifest cannot be fetched
const FALLBACK_NEXT_VERSION: &str = "15.1.1";

/// Substring of the create-next-app error emitted when the target
/// directory already has files. Coupled to the tool's exact wording.
const CONFLICT_MARKER: &str = "contains files that could conflict";

const ISSUE_TEMPLATE_CONFIG: &str = ".github/ISSUE_TEMPLATE/config.yml";
const NAME_PLACEHOLDER: &str = "__PROJECT_NAME__";

const USER_AGENT: &str = "next-genie";

#[derive(Debug, Deserialize)]
struct BoilerplateManifest {
    dependencies: BoilerplateDependencies,
}

#[derive(Debug, Deserialize)]
struct BoilerplateDependencies {
    next: String,
}

/// Build the HTTP client used for the version lookup
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

async fn try_fetch_next_version(client: &reqwest::Client) -> Result<String> {
    let url = Url::parse(BOILERPLATE_MANIFEST_URL).context("Invalid boilerplate manifest URL")?;
    let response = client.get(url).send().await?.error_for_status()?;
    let manifest: BoilerplateManifest = response.json().await?;
    Ok(manifest.dependencies.next)
}

/// Resolve the Next.js version to scaffold with. Network unavailability is
/// expected and non-fatal: any failure falls back to the pinned default.
pub async fn fetch_next_version(client: &reqwest::Client) -> String {
    match try_fetch_next_version(client).await {
        Ok(version) => version,
        Err(_) => FALLBACK_NEXT_VERSION.to_string(),
    }
}

/// Translate a generator failure: a directory-conflict message becomes
/// `AlreadyExists`, anything else passes through unchanged
fn translate_generator_error(err: anyhow::Error) -> anyhow::Error {
    if format!("{:#}", err).contains(CONFLICT_MARKER) {
        SetupError::AlreadyExists("A project with that name already exists".into()).into()
    } else {
        err
    }
}

/// Scaffold the project directory from the boilerplate template
pub async fn create_next_app(client: &reqwest::Client, project: &ProjectDescriptor) -> Result<()> {
    let next_version = fetch_next_version(client).await;
    let package_manager = pm::detect()?;

    let command = format!(
        "{} create-next-app@{} {} -e {}",
        package_manager.exec_prefix(),
        next_version,
        project.name,
        BOILERPLATE_TEMPLATE_URL
    );

    shell::run_shell(&command)
        .await
        .map_err(translate_generator_error)?;

    // The boilerplate ships its own name; stamp the user's choice in
    let manifest_path = project.manifest_path();
    let mut manifest = PackageManifest::load(&manifest_path)?;
    manifest.name = project.name.clone();
    manifest.save(&manifest_path)?;

    rewrite_issue_template(project)?;

    Ok(())
}

/// Replace every `__PROJECT_NAME__` placeholder in the generated
/// issue-template config with the project name
fn rewrite_issue_template(project: &ProjectDescriptor) -> Result<()> {
    let path = project.root.join(ISSUE_TEMPLATE_CONFIG);
    let config = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    std::fs::write(&path, config.replace(NAME_PLACEHOLDER, &project.name))
        .with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_message_becomes_already_exists() {
        let raw = anyhow::anyhow!(
            "`npx create-next-app` failed (exit status: 1): The directory my-app \
             contains files that could conflict: README.md"
        );
        let translated = translate_generator_error(raw);
        match translated.downcast_ref::<SetupError>() {
            Some(SetupError::AlreadyExists(msg)) => {
                assert_eq!(msg, "A project with that name already exists");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_conflict_marker_found_in_context_chain() {
        use anyhow::Context;
        let raw = anyhow::anyhow!("contains files that could conflict")
            .context("while running create-next-app");
        let translated = translate_generator_error(raw);
        assert!(matches!(
            translated.downcast_ref::<SetupError>(),
            Some(SetupError::AlreadyExists(_))
        ));
    }

    #[test]
    fn test_other_errors_pass_through() {
        let raw = anyhow::anyhow!("network unreachable");
        let translated = translate_generator_error(raw);
        assert!(translated.downcast_ref::<SetupError>().is_none());
        assert!(translated.to_string().contains("network unreachable"));
    }

    #[test]
    fn test_boilerplate_manifest_shape() {
        let manifest: BoilerplateManifest = serde_json::from_str(
            r#"{ "name": "next-boilerplate", "dependencies": { "next": "15.1.1", "react": "19" } }"#,
        )
        .unwrap();
        assert_eq!(manifest.dependencies.next, "15.1.1");
    }
}
