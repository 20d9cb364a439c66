//! Wide (desktop) menu layout
//!
//! By default every visible category gets a column, except that two
//! consecutive small categories share one. Activating a category replaces
//! the columns with that category's links spread over as many columns as
//! needed.

use serde::Serialize;
use shared::{Badge, CategoryNotFoundError, LayoutLimits, MenuCategory, MenuLink};

/// One labelled block of links inside a column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSection {
    /// Category title; continuation columns of an active category have none
    pub title: Option<String>,
    /// Links displayed in the label count
    pub shown: usize,
    /// Visible links of the category
    pub total: usize,
    pub links: Vec<MenuLink>,
}

impl ColumnSection {
    /// `TITLE (shown/total)`
    pub fn label(&self) -> Option<String> {
        self.title
            .as_ref()
            .map(|t| format!("{} ({}/{})", t, self.shown, self.total))
    }
}

/// A fixed-width column; consecutive sections are separated visually
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WideColumn {
    pub sections: Vec<ColumnSection>,
}

impl WideColumn {
    pub fn is_shared(&self) -> bool {
        self.sections.len() > 1
    }
}

/// What follows a link name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "badge")]
pub enum Trailing {
    None,
    Badge(Badge),
    /// Shown instead of the badge while hovered
    Arrow,
}

/// A link as displayed in a column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkView {
    pub name: String,
    pub href: String,
    pub hover_key: String,
    pub trailing: Trailing,
}

/// Entry of the category sidebar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCard {
    pub title: String,
    pub active: bool,
}

fn section(category: &MenuCategory, max_links: usize) -> ColumnSection {
    ColumnSection {
        title: Some(category.title.clone()),
        shown: category.len().min(max_links),
        total: category.len(),
        links: category.links.iter().take(max_links).cloned().collect(),
    }
}

/// Columns for the default (no active category) view
pub fn default_columns(categories: &[MenuCategory], limits: &LayoutLimits) -> Vec<WideColumn> {
    let max = limits.max_links_per_column.max(1);
    let mut columns = Vec::new();
    let mut i = 0;

    while i < categories.len() {
        let current = &categories[i];
        match categories.get(i + 1) {
            Some(next) if current.is_small(limits) && next.is_small(limits) => {
                columns.push(WideColumn {
                    sections: vec![section(current, max), section(next, max)],
                });
                i += 2;
            }
            _ => {
                columns.push(WideColumn {
                    sections: vec![section(current, max)],
                });
                i += 1;
            }
        }
    }

    columns
}

/// Columns for a single active category; only the first carries the label
pub fn active_columns(category: &MenuCategory, limits: &LayoutLimits) -> Vec<WideColumn> {
    // Unvalidated limits can carry zero; a column always holds at least one link.
    let max = limits.max_links_per_active_column.max(1);
    let total = category.len();

    category
        .links
        .chunks(max)
        .enumerate()
        .map(|(index, chunk)| WideColumn {
            sections: vec![ColumnSection {
                title: (index == 0).then(|| category.title.clone()),
                shown: total.min(max),
                total,
                links: chunk.to_vec(),
            }],
        })
        .collect()
}

/// Interaction state of the wide menu
#[derive(Debug, Clone, Default)]
pub struct WideMenu {
    limits: LayoutLimits,
    active_category: Option<String>,
    hovered_link: Option<String>,
}

impl WideMenu {
    pub fn new(limits: LayoutLimits) -> Self {
        Self {
            limits,
            active_category: None,
            hovered_link: None,
        }
    }

    /// Drill down into one of the visible categories
    pub fn activate(
        &mut self,
        title: &str,
        visible: &[MenuCategory],
    ) -> Result<(), CategoryNotFoundError> {
        if !visible.iter().any(|c| c.title == title) {
            return Err(CategoryNotFoundError {
                title: title.to_string(),
                available: visible.iter().map(|c| c.title.clone()).collect(),
            });
        }
        self.active_category = Some(title.to_string());
        self.hovered_link = None;
        Ok(())
    }

    pub fn active_category(&self) -> Option<&str> {
        self.active_category.as_deref()
    }

    pub fn hover(&mut self, key: impl Into<String>) {
        self.hovered_link = Some(key.into());
    }

    pub fn unhover(&mut self) {
        self.hovered_link = None;
    }

    pub fn hovered_link(&self) -> Option<&str> {
        self.hovered_link.as_deref()
    }

    /// Clear drill-down and hover; called whenever the menu closes
    pub fn reset(&mut self) {
        self.active_category = None;
        self.hovered_link = None;
    }

    /// Columns for the current state
    ///
    /// An active category no longer visible (e.g. after a role change) falls
    /// back to the default view.
    pub fn columns(&self, visible: &[MenuCategory]) -> Vec<WideColumn> {
        let active = self
            .active_category
            .as_deref()
            .and_then(|t| visible.iter().find(|c| c.title == t));

        match active {
            Some(category) => active_columns(category, &self.limits),
            None => default_columns(visible, &self.limits),
        }
    }

    pub fn category_cards(&self, visible: &[MenuCategory]) -> Vec<CategoryCard> {
        visible
            .iter()
            .map(|c| CategoryCard {
                title: c.title.clone(),
                active: self.active_category.as_deref() == Some(c.title.as_str()),
            })
            .collect()
    }

    /// Display form of a section's links, honoring hover
    pub fn link_views(&self, section: &ColumnSection) -> Vec<LinkView> {
        section
            .links
            .iter()
            .enumerate()
            .map(|(idx, link)| {
                let hover_key = format!("{}-{}", link.name, idx);
                let trailing = if self.hovered_link.as_deref() == Some(hover_key.as_str()) {
                    Trailing::Arrow
                } else {
                    link.badge.map_or(Trailing::None, Trailing::Badge)
                };
                LinkView {
                    name: link.name.clone(),
                    href: link.href_or_default().to_string(),
                    hover_key,
                    trailing,
                }
            })
            .collect()
    }
}
