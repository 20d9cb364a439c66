//! # Navmenu RBAC
//!
//! Role persistence and role-based link visibility.
//!
//! ## Components
//!
//! - `RoleStore` - Persisted current role with change notification
//! - `LinkVisibilityManager` - Catalog filtering by role
//! - `KeyValueStorage` - Memory and file backed slots for the role store
//! - `StorageWatcher` - Republishes storage file writes made by other processes

pub mod link_visibility;
pub mod role_store;
pub mod storage;
pub mod watcher;

pub use link_visibility::{filter_catalog, filter_categories, filter_links, LinkVisibilityManager};
pub use role_store::{RoleStore, RoleSubscription};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageBus, StorageEvent};
pub use watcher::StorageWatcher;
