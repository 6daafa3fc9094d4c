//! Authentication installer: next-auth with a Google provider

use super::{write_template, INSTALL_COMMAND};
use crate::manifest::PackageManifest;
use crate::patch::{self, EnvVarPatch};
use crate::project::ProjectDescriptor;
use crate::shell;
use anyhow::Result;

const NEXT_AUTH_VERSION: &str = "4.24.11";

const ENV_PATCHES: &[EnvVarPatch] = &[
    EnvVarPatch::new("NEXTAUTH_URL", "z.string().url()"),
    EnvVarPatch::new("NEXTAUTH_SECRET", "z.string().min(1)"),
    EnvVarPatch::new("AUTH_GOOGLE_CLIENT_ID", "z.string().min(1)"),
    EnvVarPatch::new("AUTH_GOOGLE_CLIENT_SECRET", "z.string().min(1)"),
];

const AUTH_CONFIG_TEMPLATE: &str = r#"import type { AuthOptions } from "next-auth";
import Google from "next-auth/providers/google";
import { env } from "@/env.mjs";

export const authOptions: AuthOptions = {
	providers: [
		Google({
			clientId: env.AUTH_GOOGLE_CLIENT_ID,
			clientSecret: env.AUTH_GOOGLE_CLIENT_SECRET,
		}),
	],
};
"#;

const AUTH_ROUTE_TEMPLATE: &str = r#"import { authOptions } from "@/lib/auth.config";
import NextAuth from "next-auth";

const handler = NextAuth(authOptions);

export { handler as GET, handler as POST };
"#;

pub async fn install(project: &ProjectDescriptor) -> Result<()> {
    let manifest_path = project.manifest_path();
    let mut manifest = PackageManifest::load(&manifest_path)?;
    manifest.add_dependency("next-auth", NEXT_AUTH_VERSION);
    manifest.save(&manifest_path)?;

    shell::run_shell_in(&project.root, INSTALL_COMMAND).await?;

    patch::patch_env_file(&project.env_file_path(), ENV_PATCHES)?;

    write_template(&project.root.join("lib/auth.config.ts"), AUTH_CONFIG_TEMPLATE)?;
    write_template(
        &project.root.join("app/api/auth/[...nextauth]/route.ts"),
        AUTH_ROUTE_TEMPLATE,
    )?;

    Ok(())
}
