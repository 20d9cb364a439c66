//! CLI Commands

pub mod catalog;
pub mod render;
pub mod role;

pub use catalog::CatalogCommand;
pub use render::RenderCommand;
pub use role::RoleCommand;
