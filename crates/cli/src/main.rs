//! Navmenu CLI - Role-aware navigation header in the terminal
//!
//! Usage:
//!   navmenu                         - Start interactive mode
//!   navmenu role get|set|list|select
//!   navmenu render --width 1280     - Render the open menu
//!   navmenu catalog [--all]         - List links visible to the current role

use clap::{Parser, Subcommand};
use cli::commands::{CatalogCommand, RenderCommand, RoleCommand};
use cli::context::{AppContext, GlobalOptions};
use cli::interactive::InteractiveCli;
use shared::Role;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "navmenu")]
#[command(about = "Role-aware navigation menu simulator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file (JSON or YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// File backing the persisted role
    #[arg(short, long, global = true)]
    storage: Option<PathBuf>,

    /// Simulate a role without persisting it
    #[arg(short, long, global = true)]
    role: Option<Role>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Viewport width for interactive mode
    #[arg(long, default_value_t = 1280)]
    width: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect or change the simulated role
    Role(RoleCommand),
    /// Render the open menu
    Render(RenderCommand),
    /// List catalog links
    Catalog(CatalogCommand),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = GlobalOptions {
        config: cli.config,
        storage: cli.storage,
        role: cli.role,
        json: cli.json,
    };
    let mut ctx = AppContext::load(&options)?;

    match cli.command {
        Some(Commands::Role(cmd)) => cmd.run(&ctx),
        Some(Commands::Render(cmd)) => cmd.run(&ctx),
        Some(Commands::Catalog(cmd)) => cmd.run(&ctx),
        None => {
            // No subcommand - start interactive mode
            if let Err(e) = ctx.watch_storage() {
                tracing::warn!(error = %e, "Role changes from other processes will not be shown");
            }
            let mut interactive = InteractiveCli::new(ctx.nav_bar(cli.width));
            interactive.run()
        }
    }
}
