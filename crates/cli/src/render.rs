//! Plain-text rendering of the header

use console::style;
use menu::{MenuVariant, MenuView, NavBar, Trailing};
use shared::{MenuCategory, Role};
use std::fmt::Write;

/// Header bar line: toggle control, variant and role
pub fn render_header(bar: &NavBar) -> String {
    let control = match bar.variant() {
        MenuVariant::Wide => format!(
            "[{} {}]",
            bar.toggle_label(),
            if bar.is_open() { "▲" } else { "▼" }
        ),
        MenuVariant::Compact => "[⋮]".to_string(),
    };
    format!(
        "{}  role: {}",
        style(control).bold(),
        style(bar.role().label()).cyan()
    )
}

/// Header plus the open menu, if any
pub fn render_nav_bar(bar: &NavBar) -> String {
    let mut out = render_header(bar);
    out.push('\n');

    match bar.view() {
        MenuView::Closed => {}
        MenuView::Wide { columns, categories } => {
            for (index, column) in columns.iter().enumerate() {
                let _ = writeln!(out, "\n{}", style(format!("── column {} ──", index + 1)).dim());
                for (i, section) in column.sections.iter().enumerate() {
                    if i > 0 {
                        let _ = writeln!(out, "  {}", style("· · ·").dim());
                    }
                    if let Some(label) = section.label() {
                        let _ = writeln!(out, "{}", style(label).bold());
                    }
                    for link in bar.wide().link_views(section) {
                        let trailing = match link.trailing {
                            Trailing::None => String::new(),
                            Trailing::Badge(badge) => format!("  [{}]", style(badge).green()),
                            Trailing::Arrow => "  →".to_string(),
                        };
                        let _ = writeln!(out, "  • {} ({}){}", link.name, link.href, trailing);
                    }
                }
            }

            let _ = writeln!(out, "\n{}", style("CATEGORIES").bold());
            for card in categories {
                let marker = if card.active { ">" } else { " " };
                let _ = writeln!(out, "{} {}", marker, card.title);
            }
        }
        MenuView::Compact { sections } => {
            for section in sections {
                let marker = if section.expanded { "▾" } else { "▸" };
                let _ = writeln!(out, "{} {}", marker, style(&section.title).bold());
                if section.expanded {
                    for link in section.links {
                        match link.badge {
                            Some(badge) => {
                                let _ = writeln!(out, "    • {} [{}]", link.name, style(badge).green());
                            }
                            None => {
                                let _ = writeln!(out, "    • {}", link.name);
                            }
                        }
                    }
                }
            }
        }
    }

    out
}

/// Flat listing of categories and their links
pub fn render_categories(categories: &[MenuCategory]) -> String {
    let mut out = String::new();
    for category in categories {
        let _ = writeln!(out, "{} ({})", style(&category.title).bold(), category.len());
        for link in &category.links {
            let roles: Vec<&str> = link.roles.iter().map(Role::as_str).collect();
            let badge = link.badge.map(|b| format!(" [{}]", b)).unwrap_or_default();
            let _ = writeln!(
                out,
                "  • {} ({}){}  {}",
                link.name,
                link.href_or_default(),
                badge,
                style(roles.join(", ")).dim()
            );
        }
    }
    out
}

/// Role list with the current one marked
pub fn render_roles(current: Role) -> String {
    let mut out = String::new();
    for role in Role::ALL {
        let marker = if role == current { "●" } else { "○" };
        let _ = writeln!(out, "{} {:<12} {}", marker, role.as_str(), role.label());
    }
    out
}
