//! LinkVisibilityManager - Catalog filtering by role

use shared::{Catalog, LinkNotAccessibleError, MenuCategory, MenuLink, Role};

/// Links of `links` visible to `role`, in their original order
pub fn filter_links(links: &[MenuLink], role: Role) -> Vec<MenuLink> {
    links.iter().filter(|l| l.is_visible_to(role)).cloned().collect()
}

/// Categories visible to `role`, each reduced to its visible links
///
/// Categories left without links are dropped. Order is preserved and the
/// operation is idempotent.
pub fn filter_categories(categories: &[MenuCategory], role: Role) -> Vec<MenuCategory> {
    categories
        .iter()
        .map(|c| MenuCategory::new(c.title.clone(), filter_links(&c.links, role)))
        .filter(|c| !c.is_empty())
        .collect()
}

/// [`filter_categories`] over a whole catalog
pub fn filter_catalog(catalog: &Catalog, role: Role) -> Vec<MenuCategory> {
    filter_categories(&catalog.categories, role)
}

/// Holds the catalog and the categories visible to the current role
#[derive(Debug, Clone)]
pub struct LinkVisibilityManager {
    catalog: Catalog,
    current_role: Role,
    visible: Vec<MenuCategory>,
}

impl LinkVisibilityManager {
    /// Create a manager filtering for guests
    pub fn new(catalog: Catalog) -> Self {
        Self::with_role(catalog, Role::Guest)
    }

    pub fn with_role(catalog: Catalog, role: Role) -> Self {
        let visible = filter_catalog(&catalog, role);
        Self {
            catalog,
            current_role: role,
            visible,
        }
    }

    /// Set the current role; returns whether it changed
    pub fn set_current_role(&mut self, role: Role) -> bool {
        if role == self.current_role {
            return false;
        }
        self.current_role = role;
        self.visible = filter_catalog(&self.catalog, role);
        tracing::debug!(
            role = %role,
            categories = self.visible.len(),
            links = self.visible_link_count(),
            "Menu re-filtered"
        );
        true
    }

    pub fn current_role(&self) -> Role {
        self.current_role
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Categories with at least one visible link
    pub fn visible_categories(&self) -> &[MenuCategory] {
        &self.visible
    }

    pub fn visible_category(&self, title: &str) -> Option<&MenuCategory> {
        self.visible.iter().find(|c| c.title == title)
    }

    pub fn visible_link_count(&self) -> usize {
        self.visible.iter().map(MenuCategory::len).sum()
    }

    /// Whether a link, named by href or display name, is visible
    pub fn is_visible(&self, key: &str) -> bool {
        self.visible
            .iter()
            .flat_map(|c| c.links.iter())
            .any(|l| l.matches(key))
    }

    /// Check visibility and report the role when hidden or unknown
    pub fn check_access(&self, key: &str) -> Result<(), LinkNotAccessibleError> {
        if self.is_visible(key) {
            Ok(())
        } else {
            Err(LinkNotAccessibleError {
                link: key.to_string(),
                current_role: self.current_role.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Badge;

    fn commerce() -> MenuCategory {
        MenuCategory::new(
            "COMMERCE",
            vec![
                MenuLink::for_role("Ecommerce", "/ecommerce", Role::Customer),
                MenuLink::for_role("Ecommerce Templates", "/ecommerce-templates", Role::Admin),
                MenuLink::for_role("Online Stores", "/stores", Role::Customer).with_badge(Badge::Important),
                MenuLink::for_role("Services", "/services", Role::Editor),
                MenuLink::for_role("Invoicing", "/invoicing", Role::AuthUser).with_badge(Badge::Ad),
            ],
        )
    }

    fn domains() -> MenuCategory {
        MenuCategory::new(
            "DOMAINS",
            vec![
                MenuLink::for_role("Find a Domain", "/find-domain", Role::Editor),
                MenuLink::for_role("DNS Settings", "/dns", Role::ApiUser),
            ],
        )
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![commerce(), domains()])
    }

    // ============== Filtering Tests ==============

    #[test]
    fn test_admin_sees_single_commerce_link() {
        let filtered = filter_catalog(&catalog(), Role::Admin);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "COMMERCE");
        assert_eq!(filtered[0].links.len(), 1);
        assert_eq!(filtered[0].links[0].name, "Ecommerce Templates");
    }

    #[test]
    fn test_guest_sees_everything() {
        let catalog = catalog();
        let filtered = filter_catalog(&catalog, Role::Guest);

        assert_eq!(filtered, catalog.categories);
    }

    #[test]
    fn test_link_visible_iff_role_in_set() {
        let catalog = catalog();
        for role in Role::ALL {
            let filtered = filter_catalog(&catalog, role);
            for category in &catalog.categories {
                for link in &category.links {
                    let shown = filtered
                        .iter()
                        .flat_map(|c| c.links.iter())
                        .any(|l| l == link);
                    assert_eq!(shown, link.roles.contains(&role), "{} / {}", role, link.name);
                }
            }
        }
    }

    #[test]
    fn test_category_kept_iff_any_link_visible() {
        let catalog = catalog();
        for role in Role::ALL {
            let filtered = filter_catalog(&catalog, role);
            for category in &catalog.categories {
                let expected = category.links.iter().any(|l| l.is_visible_to(role));
                let kept = filtered.iter().any(|c| c.title == category.title);
                assert_eq!(kept, expected, "{} / {}", role, category.title);
            }
        }
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let catalog = catalog();
        for role in Role::ALL {
            let once = filter_catalog(&catalog, role);
            let twice = filter_categories(&once, role);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_order_preserved() {
        let filtered = filter_catalog(&catalog(), Role::Editor);
        let titles: Vec<_> = filtered.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["COMMERCE", "DOMAINS"]);
        assert_eq!(filtered[0].links[0].name, "Services");
    }

    // ============== Manager Tests ==============

    #[test]
    fn test_manager_defaults_to_guest() {
        let manager = LinkVisibilityManager::new(catalog());
        assert_eq!(manager.current_role(), Role::Guest);
        assert_eq!(manager.visible_link_count(), 7);
    }

    #[test]
    fn test_manager_role_switch() {
        let mut manager = LinkVisibilityManager::new(catalog());

        assert!(manager.set_current_role(Role::ApiUser));
        assert!(!manager.set_current_role(Role::ApiUser));

        assert!(manager.is_visible("/dns"));
        assert!(!manager.is_visible("/ecommerce"));
        assert!(manager.visible_category("COMMERCE").is_none());
    }

    #[test]
    fn test_check_access_reports_role() {
        let manager = LinkVisibilityManager::with_role(catalog(), Role::Customer);

        assert!(manager.check_access("Online Stores").is_ok());

        let err = manager.check_access("/dns").unwrap_err();
        assert_eq!(err.current_role, "customer");
        assert_eq!(err.link, "/dns");
    }

    #[test]
    fn test_check_access_unknown_link() {
        let manager = LinkVisibilityManager::new(catalog());
        assert!(manager.check_access("/does-not-exist").is_err());
    }
}
