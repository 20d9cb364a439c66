//! navmenu role command

use crate::context::AppContext;
use crate::render::render_roles;
use clap::{Args, Subcommand};
use console::style;
use dialoguer::{theme::ColorfulTheme, Select};
use shared::Role;

#[derive(Debug, Args)]
pub struct RoleCommand {
    #[command(subcommand)]
    pub command: RoleSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum RoleSubcommand {
    /// Show the current role
    Get,
    /// Persist a new role
    Set {
        /// Role tag (guest, architect, admin, editor, authUser, subscriber, customer, apiUser)
        role: String,
    },
    /// List all roles
    List,
    /// Pick a role interactively
    Select,
}

impl RoleCommand {
    pub fn run(&self, ctx: &AppContext) -> anyhow::Result<()> {
        match &self.command {
            RoleSubcommand::Get => {
                let role = ctx.store.get_role();
                if ctx.json {
                    println!("{}", serde_json::json!({ "role": role, "label": role.label() }));
                } else {
                    println!("{} ({})", role.label(), role);
                }
            }
            RoleSubcommand::Set { role } => {
                let role: Role = role.parse()?;
                switch_role(ctx, role)?;
            }
            RoleSubcommand::List => {
                let current = ctx.store.get_role();
                if ctx.json {
                    let roles: Vec<_> = Role::ALL
                        .iter()
                        .map(|r| serde_json::json!({ "role": r, "label": r.label(), "current": *r == current }))
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&roles)?);
                } else {
                    print!("{}", render_roles(current));
                }
            }
            RoleSubcommand::Select => {
                let current = ctx.store.get_role();
                let labels: Vec<&str> = Role::ALL.iter().map(Role::label).collect();
                let default = Role::ALL.iter().position(|r| *r == current).unwrap_or(0);

                let index = Select::with_theme(&ColorfulTheme::default())
                    .with_prompt("Switch role (simulation)")
                    .items(&labels)
                    .default(default)
                    .interact()?;
                switch_role(ctx, Role::ALL[index])?;
            }
        }
        Ok(())
    }
}

fn switch_role(ctx: &AppContext, role: Role) -> anyhow::Result<()> {
    ctx.store.set_role(role)?;
    println!("{} Your current role: {}", style("ℹ").blue(), style(role.label()).bold());
    Ok(())
}
