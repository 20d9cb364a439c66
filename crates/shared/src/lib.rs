//! # Navmenu Shared
//!
//! Common types used across the navigation menu crates: roles, the menu
//! catalog model, errors and configuration.

pub mod config;
pub mod error;
pub mod menu;
pub mod role;

// Re-exports
pub use config::*;
pub use error::*;
pub use menu::*;
pub use role::*;
