//! # Navmenu Menu
//!
//! Role-aware navigation header: the built-in catalog, the wide (desktop)
//! column layout, the compact (mobile) accordion and the header state
//! machine tying them to the persisted role.

pub mod catalog;
pub mod compact;
pub mod nav_bar;
pub mod wide;

pub use catalog::{default_catalog, generate_website_links, load_catalog};
pub use compact::{AccordionSection, CompactLink, CompactMenu};
pub use nav_bar::{MenuVariant, MenuView, NavBar};
pub use wide::{active_columns, default_columns, CategoryCard, ColumnSection, LinkView, Trailing, WideColumn, WideMenu};
