//! navmenu catalog command

use crate::context::AppContext;
use crate::render::render_categories;
use clap::Args;
use rbac::filter_catalog;

#[derive(Debug, Args)]
pub struct CatalogCommand {
    /// Show every link regardless of role
    #[arg(long)]
    pub all: bool,
}

impl CatalogCommand {
    pub fn run(&self, ctx: &AppContext) -> anyhow::Result<()> {
        let categories = if self.all {
            ctx.catalog.categories.clone()
        } else {
            filter_catalog(&ctx.catalog, ctx.store.get_role())
        };

        if ctx.json {
            println!("{}", serde_json::to_string_pretty(&categories)?);
        } else {
            print!("{}", render_categories(&categories));
        }
        Ok(())
    }
}
