//! Configuration types for the navigation menu

use crate::error::{NavError, Result};
use crate::menu::SMALL_CATEGORY_MAX;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Navigation menu configuration (`navmenu.json` / `navmenu.yaml`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavConfig {
    /// File backing the persisted role slot
    pub storage_path: PathBuf,

    /// External catalog file (JSON or YAML); the built-in catalog is used when unset
    pub catalog_path: Option<PathBuf>,

    /// Viewport width at or above which the wide menu is used
    pub large_screen_breakpoint: u32,

    /// Links shown per column in the default wide layout
    pub max_links_per_column: usize,

    /// Links per column when a single category is active
    pub max_links_per_active_column: usize,

    /// Categories with at most this many links may share a column
    pub small_category_max: usize,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from(".navmenu/storage.json"),
            catalog_path: None,
            large_screen_breakpoint: 1024,
            max_links_per_column: 10,
            max_links_per_active_column: 11,
            small_category_max: SMALL_CATEGORY_MAX,
        }
    }
}

impl NavConfig {
    /// Load configuration from a JSON or YAML file, chosen by extension
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            _ => serde_json::from_str(&content)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_links_per_column == 0 || self.max_links_per_active_column == 0 {
            return Err(NavError::Config("column capacity must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn layout_limits(&self) -> LayoutLimits {
        LayoutLimits {
            max_links_per_column: self.max_links_per_column,
            max_links_per_active_column: self.max_links_per_active_column,
            small_category_max: self.small_category_max,
        }
    }
}

/// Column capacities used by the wide layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutLimits {
    pub max_links_per_column: usize,
    pub max_links_per_active_column: usize,
    pub small_category_max: usize,
}

impl Default for LayoutLimits {
    fn default() -> Self {
        NavConfig::default().layout_limits()
    }
}
