//! Charm-style CLI prompts using cliclack
//!
//! The full setup flow lives here: gather and validate input, gate on the
//! runtime checks, generate the project, then run each selected module
//! installer in order. Failures propagate untranslated; the binary owns
//! the envelope rendering.

use crate::generator;
use crate::modules;
use crate::project::{self, Module, ProjectDescriptor};
use crate::runtime;
use anyhow::Result;
use colored::Colorize;

/// CLI arguments for the create flow
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name (prompted when absent)
    pub name: Option<String>,

    /// Modules to set up (prompted when absent)
    pub modules: Option<Vec<String>>,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Run the CLI with interactive prompts
pub async fn run(args: CreateArgs) -> Result<()> {
    cliclack::intro("next-genie")?;

    // Step 1: Project name - validated before anything shells out
    let name = resolve_name(&args)?;

    // Step 2: Module selection
    let selected_modules = resolve_modules(&args)?;

    let project = ProjectDescriptor::new(name, selected_modules)?;

    // Step 3: Runtime requirement gate
    check_runtimes().await?;

    // Step 4: Generate the project
    generate(&project).await?;

    // Step 5: Layer on each selected module
    for module in &project.modules {
        install_module(*module, &project).await?;
    }

    // Step 6: Show next steps
    print_next_steps(&project)?;

    cliclack::outro("Setup completed successfully!")?;

    Ok(())
}

fn resolve_name(args: &CreateArgs) -> Result<String> {
    if let Some(name) = &args.name {
        let name = project::validate_project_name(name)?;
        cliclack::log::info(format!("Project name: {}", name))?;
        return Ok(name);
    }

    let input: String = cliclack::input("Please name the app.")
        .validate(|input: &String| {
            project::validate_project_name(input)
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact()?;

    // Re-validate to pick up trimming
    project::validate_project_name(&input)
}

fn resolve_modules(args: &CreateArgs) -> Result<Vec<Module>> {
    if let Some(names) = &args.modules {
        let mut selected = Vec::new();
        for name in names {
            let module = Module::parse(name)?;
            if !selected.contains(&module) {
                selected.push(module);
            }
        }
        return Ok(selected);
    }

    if args.yes {
        cliclack::log::info("No modules selected (--yes mode)")?;
        return Ok(Vec::new());
    }

    let selected: Vec<Module> = cliclack::multiselect("What tools would you like to set up?")
        .item(
            Module::Authentication,
            "Authentication",
            "next-auth with Google sign-in",
        )
        .item(Module::Prisma, "Prisma", "database ORM")
        .required(false)
        .interact()?;

    Ok(selected)
}

async fn check_runtimes() -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Checking runtimes...");

    match runtime::verify_runtimes().await {
        Ok(runtimes) => {
            let info: Vec<String> = runtimes
                .iter()
                .map(|r| format!("{} ({})", r.name, r.version))
                .collect();
            spinner.stop(format!("Detected runtimes: {}", info.join(", ")));
            Ok(())
        }
        Err(e) => {
            spinner.stop("Runtime requirements not met");
            Err(e)
        }
    }
}

async fn generate(project: &ProjectDescriptor) -> Result<()> {
    let client = generator::http_client();

    let spinner = cliclack::spinner();
    spinner.start(format!("Creating {}...", project.name));

    match generator::create_next_app(&client, project).await {
        Ok(()) => {
            spinner.stop(format!("Created {}", project.root.display()));
            Ok(())
        }
        Err(e) => {
            spinner.stop(format!("Failed to create {}", project.name));
            Err(e)
        }
    }
}

async fn install_module(module: Module, project: &ProjectDescriptor) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start(format!("Setting up {}...", module.display_name()));

    match modules::install(module, project).await {
        Ok(()) => {
            spinner.stop(format!("{} setup complete", module.display_name()));
            Ok(())
        }
        Err(e) => {
            spinner.stop(format!("{} setup failed", module.display_name()));
            Err(e)
        }
    }
}

fn print_next_steps(project: &ProjectDescriptor) -> Result<()> {
    let mut steps = vec![format!("cd {}", project.name)];

    if project.modules.contains(&Module::Authentication) {
        steps.push(
            "Set NEXTAUTH_URL, NEXTAUTH_SECRET, AUTH_GOOGLE_CLIENT_ID and \
             AUTH_GOOGLE_CLIENT_SECRET in .env"
                .to_string(),
        );
    }

    if project.modules.contains(&Module::Prisma) {
        steps.push("Set DATABASE_URL in .env".to_string());
        steps.push("npx prisma migrate dev".to_string());
    }

    steps.push("npm run dev".to_string());

    println!();
    println!("  {}", "Next steps".bold());
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    Ok(())
}
