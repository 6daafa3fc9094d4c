//! next-genie CLI - Next.js project bootstrapper

use clap::Parser;
use genie_core::tui::CreateArgs;
use genie_core::ErrorEnvelope;

#[derive(Parser, Debug)]
#[command(name = "next-genie")]
#[command(about = "Bootstrap a Next.js project with optional authentication and Prisma")]
#[command(version)]
pub struct Args {
    /// Project name (prompted when omitted)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Modules to set up (comma-separated: authentication,prisma)
    #[arg(short, long, value_delimiter = ',')]
    pub modules: Option<Vec<String>>,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let create_args = CreateArgs {
        name: args.name,
        modules: args.modules,
        yes: args.yes,
    };

    let result = genie_core::tui::run(create_args).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(err) = result {
        let envelope = ErrorEnvelope::capture(&err);
        let _ = cliclack::log::error(envelope.render());
        std::process::exit(1);
    }
}
