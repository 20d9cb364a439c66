//! NavBar - Header state: open/closed, responsive variant and the current role

use crate::compact::{AccordionSection, CompactMenu};
use crate::wide::{CategoryCard, WideColumn, WideMenu};
use rbac::{LinkVisibilityManager, RoleStore, RoleSubscription};
use serde::Serialize;
use shared::{Catalog, CategoryNotFoundError, MenuCategory, NavConfig, Result, Role};

/// Which renderer the header uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuVariant {
    Wide,
    Compact,
}

impl MenuVariant {
    pub fn for_width(width: u32, breakpoint: u32) -> Self {
        if width >= breakpoint {
            MenuVariant::Wide
        } else {
            MenuVariant::Compact
        }
    }
}

/// Snapshot of what the header currently displays below the bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "variant")]
pub enum MenuView {
    Closed,
    Wide {
        columns: Vec<WideColumn>,
        categories: Vec<CategoryCard>,
    },
    Compact {
        sections: Vec<AccordionSection>,
    },
}

/// The navigation header
///
/// `closed -> open -> closed`, driven by [`NavBar::toggle`]. Closing drops
/// the wide menu's active category and hover and collapses the accordion.
#[derive(Debug)]
pub struct NavBar {
    config: NavConfig,
    store: RoleStore,
    subscription: RoleSubscription,
    visibility: LinkVisibilityManager,
    wide: WideMenu,
    compact: CompactMenu,
    variant: MenuVariant,
    is_open: bool,
}

impl NavBar {
    pub fn new(store: RoleStore, catalog: Catalog, config: NavConfig, viewport_width: u32) -> Self {
        let subscription = store.subscribe();
        let visibility = LinkVisibilityManager::with_role(catalog, store.get_role());
        let variant = MenuVariant::for_width(viewport_width, config.large_screen_breakpoint);

        Self {
            wide: WideMenu::new(config.layout_limits()),
            compact: CompactMenu::new(),
            config,
            store,
            subscription,
            visibility,
            variant,
            is_open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn variant(&self) -> MenuVariant {
        self.variant
    }

    pub fn role(&self) -> Role {
        self.visibility.current_role()
    }

    pub fn store(&self) -> &RoleStore {
        &self.store
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    pub fn visible_categories(&self) -> &[MenuCategory] {
        self.visibility.visible_categories()
    }

    pub fn visibility(&self) -> &LinkVisibilityManager {
        &self.visibility
    }

    pub fn wide(&self) -> &WideMenu {
        &self.wide
    }

    pub fn compact(&self) -> &CompactMenu {
        &self.compact
    }

    pub fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Open the menu, re-reading the persisted role
    pub fn open(&mut self) {
        self.is_open = true;
        self.refresh_role();
        tracing::debug!(variant = ?self.variant, role = %self.role(), "Menu opened");
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.wide.reset();
        self.compact.collapse();
        tracing::debug!("Menu closed");
    }

    /// Clicking the dimmed backdrop closes the menu
    pub fn overlay_click(&mut self) {
        if self.is_open {
            self.close();
        }
    }

    /// Label of the toggle control
    pub fn toggle_label(&self) -> &'static str {
        if self.is_open {
            "Close bar menu"
        } else {
            "Open bar menu"
        }
    }

    /// Page scrolling is blocked while the menu is open
    pub fn scroll_locked(&self) -> bool {
        self.is_open
    }

    /// Apply a new viewport width; switching variant discards the other renderer's state
    pub fn resize(&mut self, width: u32) -> MenuVariant {
        let variant = MenuVariant::for_width(width, self.config.large_screen_breakpoint);
        if variant != self.variant {
            tracing::debug!(width, from = ?self.variant, to = ?variant, "Menu variant changed");
            self.variant = variant;
            self.wide.reset();
            self.compact.collapse();
        }
        variant
    }

    fn apply_role(&mut self, role: Role) -> bool {
        self.visibility.set_current_role(role)
    }

    /// Re-read the role from the store; returns whether it changed
    pub fn refresh_role(&mut self) -> bool {
        let role = self.store.get_role();
        self.apply_role(role)
    }

    /// Apply role changes published by other instances; returns whether the role changed
    pub fn sync_role(&mut self) -> bool {
        match self.subscription.drain() {
            Some(role) => self.apply_role(role),
            None => false,
        }
    }

    /// Persist a role chosen in this instance and re-filter
    pub fn select_role(&mut self, role: Role) -> Result<()> {
        self.store.set_role(role)?;
        self.apply_role(role);
        Ok(())
    }

    /// Drill into a category of the wide menu
    ///
    /// Returns `Ok(false)` when the menu is closed or the compact variant is in use.
    pub fn activate_category(&mut self, title: &str) -> std::result::Result<bool, CategoryNotFoundError> {
        if !self.is_open || self.variant != MenuVariant::Wide {
            return Ok(false);
        }
        self.wide.activate(title, self.visibility.visible_categories())?;
        Ok(true)
    }

    /// Toggle an accordion item of the compact menu
    ///
    /// Returns `Ok(false)` when the menu is closed or the wide variant is in use.
    pub fn toggle_section(&mut self, title: &str) -> std::result::Result<bool, CategoryNotFoundError> {
        if !self.is_open || self.variant != MenuVariant::Compact {
            return Ok(false);
        }
        self.compact.toggle(title, self.visibility.visible_categories())?;
        Ok(true)
    }

    pub fn hover(&mut self, key: impl Into<String>) {
        if self.is_open && self.variant == MenuVariant::Wide {
            self.wide.hover(key);
        }
    }

    pub fn unhover(&mut self) {
        self.wide.unhover();
    }

    pub fn view(&self) -> MenuView {
        if !self.is_open {
            return MenuView::Closed;
        }

        let visible = self.visibility.visible_categories();
        match self.variant {
            MenuVariant::Wide => MenuView::Wide {
                columns: self.wide.columns(visible),
                categories: self.wide.category_cards(visible),
            },
            MenuVariant::Compact => MenuView::Compact {
                sections: self.compact.sections(visible),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;

    fn nav_bar(width: u32) -> NavBar {
        NavBar::new(RoleStore::in_memory(), default_catalog(), NavConfig::default(), width)
    }

    // ============== Variant Tests ==============

    #[test]
    fn test_variant_breakpoint() {
        assert_eq!(MenuVariant::for_width(1024, 1024), MenuVariant::Wide);
        assert_eq!(MenuVariant::for_width(1023, 1024), MenuVariant::Compact);
    }

    #[test]
    fn test_resize_switches_variant_and_resets() {
        let mut bar = nav_bar(1280);
        bar.open();
        bar.activate_category("HOSTING").unwrap();

        assert_eq!(bar.resize(800), MenuVariant::Compact);
        assert!(bar.wide().active_category().is_none());
        assert!(bar.is_open());
    }

    // ============== Open / Close Tests ==============

    #[test]
    fn test_starts_closed() {
        let bar = nav_bar(1280);
        assert!(!bar.is_open());
        assert_eq!(bar.view(), MenuView::Closed);
        assert_eq!(bar.toggle_label(), "Open bar menu");
        assert!(!bar.scroll_locked());
    }

    #[test]
    fn test_toggle_cycle() {
        let mut bar = nav_bar(1280);

        bar.toggle();
        assert!(bar.is_open());
        assert_eq!(bar.toggle_label(), "Close bar menu");
        assert!(bar.scroll_locked());

        bar.toggle();
        assert!(!bar.is_open());
    }

    #[test]
    fn test_close_resets_active_category() {
        let mut bar = nav_bar(1280);
        bar.open();
        assert!(bar.activate_category("ANALYTICS").unwrap());
        bar.hover("Traffic Reports-1");

        bar.close();
        bar.open();
        assert!(bar.wide().active_category().is_none());
        assert!(bar.wide().hovered_link().is_none());
    }

    #[test]
    fn test_overlay_click_closes() {
        let mut bar = nav_bar(600);
        bar.open();
        bar.toggle_section("DESIGN").unwrap();

        bar.overlay_click();
        assert!(!bar.is_open());
        assert!(bar.compact().expanded().is_none());
    }

    #[test]
    fn test_activation_ignored_when_closed_or_compact() {
        let mut bar = nav_bar(1280);
        assert!(!bar.activate_category("HOSTING").unwrap());

        let mut compact = nav_bar(600);
        compact.open();
        assert!(!compact.activate_category("HOSTING").unwrap());
        assert!(compact.toggle_section("HOSTING").unwrap());
    }

    // ============== View Tests ==============

    #[test]
    fn test_guest_wide_view() {
        let mut bar = nav_bar(1440);
        bar.open();

        match bar.view() {
            MenuView::Wide { columns, categories } => {
                // WEBSITE | COMMERCE+MARKETING | DOMAINS | ANALYTICS | DESIGN | HOSTING | INTEGRATIONS
                assert_eq!(columns.len(), 7);
                assert!(columns[1].is_shared());
                assert_eq!(categories.len(), 8);
            }
            other => panic!("expected wide view, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_active_capacity_does_not_panic() {
        let config = NavConfig {
            max_links_per_active_column: 0,
            ..NavConfig::default()
        };
        let mut bar = NavBar::new(RoleStore::in_memory(), default_catalog(), config, 1280);
        bar.open();
        bar.activate_category("HOSTING").unwrap();

        match bar.view() {
            MenuView::Wide { columns, .. } => {
                assert_eq!(columns.len(), 15);
                assert!(columns.iter().all(|c| c.sections[0].links.len() == 1));
            }
            other => panic!("expected wide view, got {other:?}"),
        }
    }

    #[test]
    fn test_compact_view_lists_all_categories() {
        let mut bar = nav_bar(390);
        bar.open();

        match bar.view() {
            MenuView::Compact { sections } => assert_eq!(sections.len(), 8),
            other => panic!("expected compact view, got {other:?}"),
        }
    }

    // ============== Role Tests ==============

    #[test]
    fn test_initial_role_read_from_store() {
        let store = RoleStore::in_memory();
        store.set_role(Role::Admin).unwrap();

        let bar = NavBar::new(store, default_catalog(), NavConfig::default(), 1280);
        assert_eq!(bar.role(), Role::Admin);
        assert_eq!(
            bar.visibility().visible_category("COMMERCE").map(|c| c.len()),
            Some(1)
        );
    }

    #[test]
    fn test_select_role_refilters() {
        let mut bar = nav_bar(1280);
        bar.select_role(Role::ApiUser).unwrap();

        assert_eq!(bar.role(), Role::ApiUser);
        assert_eq!(bar.store().get_role(), Role::ApiUser);
        assert!(bar.visibility().is_visible("/dns"));
        assert!(!bar.visibility().is_visible("/ssl"));
    }

    #[test]
    fn test_sync_role_from_other_instance() {
        let tab_a = RoleStore::in_memory();
        let mut bar = NavBar::new(tab_a.attach(), default_catalog(), NavConfig::default(), 1280);

        tab_a.set_role(Role::Customer).unwrap();
        assert!(bar.sync_role());
        assert_eq!(bar.role(), Role::Customer);
        assert!(!bar.sync_role());
    }

    #[test]
    fn test_open_rereads_role() {
        let tab_a = RoleStore::in_memory();
        let mut bar = NavBar::new(tab_a.attach(), default_catalog(), NavConfig::default(), 1280);

        tab_a.set_role(Role::Editor).unwrap();
        bar.open();
        assert_eq!(bar.role(), Role::Editor);
    }

    #[test]
    fn test_role_change_drops_vanished_active_category() {
        let catalog = Catalog::new(vec![
            MenuCategory::new("OPS", vec![shared::MenuLink::for_role("Deploy", "/deploy", Role::Admin)]),
            MenuCategory::new("DOCS", vec![shared::MenuLink::for_role("Guides", "/guides", Role::Editor)]),
        ]);
        let mut bar = NavBar::new(RoleStore::in_memory(), catalog, NavConfig::default(), 1280);
        bar.select_role(Role::Admin).unwrap();
        bar.open();
        bar.activate_category("OPS").unwrap();

        bar.select_role(Role::Editor).unwrap();
        match bar.view() {
            MenuView::Wide { columns, .. } => {
                assert_eq!(columns.len(), 1);
                assert_eq!(columns[0].sections[0].title.as_deref(), Some("DOCS"));
            }
            other => panic!("expected wide view, got {other:?}"),
        }
    }
}
