//! Menu catalog types

use crate::config::LayoutLimits;
use crate::error::{CategoryNotFoundError, NavError, Result};
use crate::role::Role;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fmt;

/// Links per category at or below which a category counts as small
pub const SMALL_CATEGORY_MAX: usize = 5;

/// Small visual tag on a link, independent of role filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Badge {
    New,
    Ad,
    Updated,
    Important,
    Recommendation,
}

impl Badge {
    pub fn as_str(&self) -> &'static str {
        match self {
            Badge::New => "NEW",
            Badge::Ad => "AD",
            Badge::Updated => "UPDATED",
            Badge::Important => "IMPORTANT",
            Badge::Recommendation => "RECOMMENDATION",
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// File representation of a link; badges follow the `hasBadge` + `badgeName` pair
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMenuLink {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    href: Option<String>,
    roles: Vec<Role>,
    #[serde(default)]
    has_badge: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    badge_name: Option<Badge>,
}

impl From<RawMenuLink> for MenuLink {
    fn from(raw: RawMenuLink) -> Self {
        Self {
            name: raw.name,
            href: raw.href,
            roles: raw.roles.into_iter().collect(),
            badge: if raw.has_badge { raw.badge_name } else { None },
        }
    }
}

impl From<MenuLink> for RawMenuLink {
    fn from(link: MenuLink) -> Self {
        Self {
            name: link.name,
            href: link.href,
            roles: link.roles.into_iter().collect(),
            has_badge: link.badge.is_some(),
            badge_name: link.badge,
        }
    }
}

/// A single navigation link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawMenuLink", into = "RawMenuLink")]
pub struct MenuLink {
    pub name: String,
    pub href: Option<String>,
    /// Roles allowed to see this link
    pub roles: BTreeSet<Role>,
    pub badge: Option<Badge>,
}

impl MenuLink {
    /// Create a link visible to guests only
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: None,
            roles: BTreeSet::from([Role::Guest]),
            badge: None,
        }
    }

    /// Link visible to guests plus one elevated role
    pub fn for_role(name: impl Into<String>, href: impl Into<String>, role: Role) -> Self {
        Self::new(name).with_href(href).with_roles([role])
    }

    /// Builder: set target
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Builder: add roles (guest is always kept)
    pub fn with_roles(mut self, roles: impl IntoIterator<Item = Role>) -> Self {
        self.roles.extend(roles);
        self
    }

    /// Builder: set badge
    pub fn with_badge(mut self, badge: Badge) -> Self {
        self.badge = Some(badge);
        self
    }

    /// Target, or `#` when the link has none
    pub fn href_or_default(&self) -> &str {
        self.href.as_deref().unwrap_or("#")
    }

    /// A link is visible iff the role is in its role set
    pub fn is_visible_to(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Whether `key` names this link, by target or by display name
    pub fn matches(&self, key: &str) -> bool {
        self.href.as_deref() == Some(key) || self.name == key
    }
}

/// Named grouping of links
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub title: String,
    #[serde(default)]
    pub links: Vec<MenuLink>,
}

impl MenuCategory {
    pub fn new(title: impl Into<String>, links: Vec<MenuLink>) -> Self {
        Self {
            title: title.into(),
            links,
        }
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Small categories can share a column in the wide layout
    pub fn is_small(&self, limits: &LayoutLimits) -> bool {
        self.links.len() <= limits.small_category_max
    }
}

/// Fixed ordered sequence of categories
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<MenuCategory>,
}

impl Catalog {
    pub fn new(categories: Vec<MenuCategory>) -> Self {
        Self { categories }
    }

    /// Look up a category by exact title
    pub fn category(&self, title: &str) -> std::result::Result<&MenuCategory, CategoryNotFoundError> {
        self.categories
            .iter()
            .find(|c| c.title == title)
            .ok_or_else(|| CategoryNotFoundError {
                title: title.to_string(),
                available: self.titles(),
            })
    }

    pub fn titles(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.title.clone()).collect()
    }

    /// Total number of links across all categories
    pub fn link_count(&self) -> usize {
        self.categories.iter().map(MenuCategory::len).sum()
    }

    /// Check structural rules: unique non-empty titles, every link visible to guests
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for category in &self.categories {
            if category.title.trim().is_empty() {
                return Err(NavError::InvalidCatalog("category with empty title".to_string()));
            }
            if !seen.insert(category.title.as_str()) {
                return Err(NavError::InvalidCatalog(format!(
                    "duplicate category '{}'",
                    category.title
                )));
            }
            if let Some(link) = category.links.iter().find(|l| !l.roles.contains(&Role::Guest)) {
                return Err(NavError::InvalidCatalog(format!(
                    "link '{}' in '{}' is missing the guest role",
                    link.name, category.title
                )));
            }
        }
        Ok(())
    }
}
