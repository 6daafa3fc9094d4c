//! Prisma installer: ORM client bootstrap and schema init

use super::{write_template, INSTALL_COMMAND};
use crate::manifest::PackageManifest;
use crate::patch::{self, EnvVarPatch};
use crate::pm;
use crate::project::ProjectDescriptor;
use crate::shell;
use anyhow::Result;

const PRISMA_VERSION: &str = "6.0.1";

const ENV_PATCHES: &[EnvVarPatch] = &[EnvVarPatch::new("DATABASE_URL", "z.string()")];

const PRISMA_CLIENT_TEMPLATE: &str = r#"import { PrismaClient } from "@prisma/client";

const globalForPrisma = globalThis as unknown as { prisma: PrismaClient };

export const prisma = globalForPrisma.prisma || new PrismaClient();

if (process.env.NODE_ENV !== "production") globalForPrisma.prisma = prisma;
"#;

pub async fn install(project: &ProjectDescriptor) -> Result<()> {
    let manifest_path = project.manifest_path();
    let mut manifest = PackageManifest::load(&manifest_path)?;
    manifest.add_dependency("prisma", PRISMA_VERSION);
    manifest.save(&manifest_path)?;

    shell::run_shell_in(&project.root, INSTALL_COMMAND).await?;

    // Sub-generator: creates prisma/schema.prisma and a starter .env
    let package_manager = pm::detect()?;
    let init_command = format!("{} prisma init", package_manager.exec_prefix());
    shell::run_shell_in(&project.root, &init_command).await?;

    patch::patch_env_file(&project.env_file_path(), ENV_PATCHES)?;

    let mut manifest = PackageManifest::load(&manifest_path)?;
    manifest.add_script("postinstall", "prisma generate");
    manifest.save(&manifest_path)?;

    write_template(&project.root.join("lib/prisma.ts"), PRISMA_CLIENT_TEMPLATE)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch;

    #[test]
    fn test_database_url_patched_into_both_blocks() {
        let env_file = "const server = z.object({\n});\n\nconst processEnv = {\n};\n";
        let patched = patch::apply(env_file, ENV_PATCHES);

        assert!(patched.contains("\tDATABASE_URL: z.string(),"));
        assert!(patched.contains("\tDATABASE_URL: process.env.DATABASE_URL,"));
    }

    #[test]
    fn test_client_template_guards_global_in_production() {
        assert!(PRISMA_CLIENT_TEMPLATE.contains("process.env.NODE_ENV !== \"production\""));
    }
}
