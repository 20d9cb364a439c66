//! Error types for the navigation menu

use thiserror::Error;

/// Error returned when a value is not one of the role tags
#[derive(Debug, Error)]
#[error("Role '{value}' is not recognized. Available roles: {}", available.join(", "))]
pub struct UnknownRoleError {
    pub value: String,
    pub available: Vec<String>,
}

/// Error returned when a link is hidden from the current role
#[derive(Debug, Error)]
#[error("Link '{link}' is not visible for role '{current_role}'")]
pub struct LinkNotAccessibleError {
    pub link: String,
    pub current_role: String,
}

/// Error returned when a category is not among the visible ones
#[derive(Debug, Error)]
#[error("Category '{title}' not found. Visible categories: {}", available.join(", "))]
pub struct CategoryNotFoundError {
    pub title: String,
    pub available: Vec<String>,
}

/// General navigation menu error type
#[derive(Debug, Error)]
pub enum NavError {
    #[error(transparent)]
    UnknownRole(#[from] UnknownRoleError),

    #[error(transparent)]
    LinkNotAccessible(#[from] LinkNotAccessibleError),

    #[error(transparent)]
    CategoryNotFound(#[from] CategoryNotFoundError),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, NavError>;
