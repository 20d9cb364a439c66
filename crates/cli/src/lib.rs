//! # Navmenu CLI
//!
//! Terminal front end for the role-aware navigation header.

pub mod commands;
pub mod context;
pub mod interactive;
pub mod render;
