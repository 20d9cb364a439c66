//! Shared setup for commands: configuration, role store and catalog

use anyhow::Context as _;
use menu::{catalog, NavBar};
use rbac::{FileStorage, RoleStore, StorageBus, StorageWatcher};
use shared::{Catalog, NavConfig, Role};
use std::path::PathBuf;
use std::sync::Arc;

/// Options every subcommand accepts
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub config: Option<PathBuf>,
    pub storage: Option<PathBuf>,
    /// Simulate this role without persisting it
    pub role: Option<Role>,
    pub json: bool,
}

/// Loaded configuration, catalog and role store
#[derive(Debug)]
pub struct AppContext {
    pub config: NavConfig,
    pub catalog: Catalog,
    pub store: RoleStore,
    pub json: bool,
    /// Bus of the file-backed store; unset when the role is simulated
    file_bus: Option<StorageBus>,
    watcher: Option<StorageWatcher>,
}

impl AppContext {
    pub fn load(options: &GlobalOptions) -> anyhow::Result<Self> {
        let mut config = NavConfig::load_or_default(options.config.as_deref())
            .context("Failed to load configuration")?;
        if let Some(storage) = &options.storage {
            config.storage_path = storage.clone();
        }

        let catalog = catalog::load_or_default(config.catalog_path.as_deref())
            .context("Failed to load catalog")?;

        let (store, file_bus) = match options.role {
            Some(role) => {
                let store = RoleStore::in_memory();
                store.set_role(role)?;
                (store, None)
            }
            None => {
                let bus = StorageBus::default();
                let store = RoleStore::new(
                    Arc::new(FileStorage::new(&config.storage_path)),
                    bus.clone(),
                );
                (store, Some(bus))
            }
        };

        tracing::debug!(
            storage = %config.storage_path.display(),
            categories = catalog.categories.len(),
            "Context loaded"
        );

        Ok(Self {
            config,
            catalog,
            store,
            json: options.json,
            file_bus,
            watcher: None,
        })
    }

    /// Context over in-memory storage, the built-in catalog and default config
    pub fn in_memory() -> Self {
        Self {
            config: NavConfig::default(),
            catalog: catalog::default_catalog(),
            store: RoleStore::in_memory(),
            json: false,
            file_bus: None,
            watcher: None,
        }
    }

    /// Deliver role changes written to the storage file by other processes
    ///
    /// No-op for simulated roles and when already watching.
    pub fn watch_storage(&mut self) -> anyhow::Result<()> {
        let Some(bus) = &self.file_bus else {
            return Ok(());
        };
        if self.watcher.is_none() {
            let watcher = StorageWatcher::start(&self.config.storage_path, bus.clone())
                .context("Failed to watch role storage")?;
            self.watcher = Some(watcher);
        }
        Ok(())
    }

    pub fn is_watching(&self) -> bool {
        self.watcher.is_some()
    }

    pub fn nav_bar(&self, viewport_width: u32) -> NavBar {
        NavBar::new(
            self.store.attach(),
            self.catalog.clone(),
            self.config.clone(),
            viewport_width,
        )
    }
}
