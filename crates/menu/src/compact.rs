//! Compact (mobile) menu: a single-select, collapsible accordion

use serde::Serialize;
use shared::{Badge, CategoryNotFoundError, MenuCategory};

/// A link row with its badge shown inline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompactLink {
    pub name: String,
    pub href: String,
    pub badge: Option<Badge>,
}

/// One accordion item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccordionSection {
    pub title: String,
    pub expanded: bool,
    /// Every visible link; the accordion does not paginate
    pub links: Vec<CompactLink>,
}

#[derive(Debug, Clone, Default)]
pub struct CompactMenu {
    expanded: Option<String>,
}

impl CompactMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand `title`, collapsing any other; toggling the open item collapses it
    pub fn toggle(
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

        if self.expanded.as_deref() == Some(title) {
            self.expanded = None;
        } else {
            self.expanded = Some(title.to_string());
        }
        Ok(())
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }

    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    pub fn sections(&self, visible: &[MenuCategory]) -> Vec<AccordionSection> {
        visible
            .iter()
            .map(|c| AccordionSection {
                title: c.title.clone(),
                expanded: self.expanded.as_deref() == Some(c.title.as_str()),
                links: c
                    .links
                    .iter()
                    .map(|l| CompactLink {
                        name: l.name.clone(),
                        href: l.href_or_default().to_string(),
                        badge: l.badge,
                    })
                    .collect(),
            })
            .collect()
    }
}
