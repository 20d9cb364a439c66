//! Interactive REPL mode: drive the header like a browser tab

use crate::render::{render_nav_bar, render_roles};
use menu::NavBar;
use shared::Role;
use std::io::{self, Write};

/// Interactive shell over a [`NavBar`]
pub struct InteractiveCli {
    bar: NavBar,
}

impl InteractiveCli {
    pub fn new(bar: NavBar) -> Self {
        Self { bar }
    }

    pub fn bar(&self) -> &NavBar {
        &self.bar
    }

    /// Run the interactive REPL
    pub fn run(&mut self) -> anyhow::Result<()> {
        println!("Navmenu Interactive Mode");
        println!("Type /help for commands, /quit to exit");
        println!();

        loop {
            if self.bar.sync_role() {
                println!("Role changed elsewhere: {}", self.bar.role().label());
            }

            print!("[{}] > ", self.bar.role());
            io::stdout().flush()?;

            let mut input = String::new();
            if io::stdin().read_line(&mut input)? == 0 {
                break;
            }
            let input = input.trim();

            if input.is_empty() {
                continue;
            }

            match self.handle_command(input) {
                Ok(true) => break,
                Ok(false) => {}
                Err(e) => println!("Error: {}", e),
            }
        }

        Ok(())
    }

    fn handle_command(&mut self, input: &str) -> anyhow::Result<bool> {
        let (cmd, arg) = match input.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (input, ""),
        };

        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Goodbye!");
                return Ok(true);
            }
            "/help" | "/h" => {
                println!("Commands:");
                println!("  /role [tag]        - Show roles or switch role");
                println!("  /toggle            - Open or close the menu");
                println!("  /open, /close      - Open or close the menu");
                println!("  /overlay           - Click the backdrop");
                println!("  /category <title>  - Drill into a category (wide)");
                println!("  /expand <title>    - Toggle an accordion item (compact)");
                println!("  /hover [key]       - Hover a link, or clear hover");
                println!("  /resize <width>    - Change viewport width");
                println!("  /show              - Render the header");
                println!("  /status            - Show current state");
                println!("  /quit              - Exit");
            }
            "/role" => {
                if arg.is_empty() {
                    print!("{}", render_roles(self.bar.role()));
                } else {
                    let role: Role = arg.parse()?;
                    self.bar.select_role(role)?;
                    println!("Your current role: {}", role.label());
                }
            }
            "/toggle" => {
                self.bar.toggle();
                print!("{}", render_nav_bar(&self.bar));
            }
            "/open" => {
                self.bar.open();
                print!("{}", render_nav_bar(&self.bar));
            }
            "/close" => {
                self.bar.close();
                print!("{}", render_nav_bar(&self.bar));
            }
            "/overlay" => {
                self.bar.overlay_click();
                print!("{}", render_nav_bar(&self.bar));
            }
            "/category" => {
                if self.bar.activate_category(arg)? {
                    print!("{}", render_nav_bar(&self.bar));
                } else {
                    println!("Open the wide menu first");
                }
            }
            "/expand" => {
                if self.bar.toggle_section(arg)? {
                    print!("{}", render_nav_bar(&self.bar));
                } else {
                    println!("Open the compact menu first");
                }
            }
            "/hover" => {
                if arg.is_empty() {
                    self.bar.unhover();
                } else {
                    self.bar.hover(arg);
                }
                print!("{}", render_nav_bar(&self.bar));
            }
            "/resize" => {
                let width: u32 = arg.parse()?;
                let variant = self.bar.resize(width);
                println!("Viewport {}px: {:?} menu", width, variant);
            }
            "/show" => {
                print!("{}", render_nav_bar(&self.bar));
            }
            "/status" => {
                println!("Status:");
                println!("  Role: {} ({})", self.bar.role().label(), self.bar.role());
                println!("  Variant: {:?}", self.bar.variant());
                println!("  Open: {}", self.bar.is_open());
                println!("  Active category: {}", self.bar.wide().active_category().unwrap_or("-"));
                println!("  Visible links: {}", self.bar.visibility().visible_link_count());
            }
            _ => {
                println!("Unknown command: {}", cmd);
            }
        }

        Ok(false)
    }
}
