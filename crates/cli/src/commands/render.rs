//! navmenu render command

use crate::context::AppContext;
use crate::render::render_nav_bar;
use clap::{Args, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum VariantArg {
    Wide,
    Compact,
}

#[derive(Debug, Args)]
pub struct RenderCommand {
    /// Viewport width in pixels
    #[arg(short, long, default_value_t = 1280)]
    pub width: u32,

    /// Force a variant instead of deriving it from the width
    #[arg(long, value_enum)]
    pub variant: Option<VariantArg>,

    /// Drill into a category (wide menu)
    #[arg(long)]
    pub category: Option<String>,

    /// Expand an accordion item (compact menu)
    #[arg(short, long)]
    pub expand: Option<String>,

    /// Hover a link by its hover key (`<name>-<index>`)
    #[arg(long)]
    pub hover: Option<String>,
}

impl RenderCommand {
    fn effective_width(&self, breakpoint: u32) -> u32 {
        match self.variant {
            Some(VariantArg::Wide) => self.width.max(breakpoint),
            Some(VariantArg::Compact) => self.width.min(breakpoint.saturating_sub(1)),
            None => self.width,
        }
    }

    pub fn run(&self, ctx: &AppContext) -> anyhow::Result<()> {
        let width = self.effective_width(ctx.config.large_screen_breakpoint);
        let mut bar = ctx.nav_bar(width);
        bar.open();

        if let Some(title) = &self.category {
            if !bar.activate_category(title)? {
                tracing::warn!(category = %title, "--category only applies to the wide menu");
            }
        }
        if let Some(title) = &self.expand {
            if !bar.toggle_section(title)? {
                tracing::warn!(category = %title, "--expand only applies to the compact menu");
            }
        }
        if let Some(key) = &self.hover {
            bar.hover(key.clone());
        }

        if ctx.json {
            println!("{}", serde_json::to_string_pretty(&bar.view())?);
        } else {
            print!("{}", render_nav_bar(&bar));
        }
        Ok(())
    }
}
