//! RoleStore - Persisted current role with cross-instance change notification

use crate::storage::{KeyValueStorage, MemoryStorage, StorageBus, StorageEvent};
use shared::{Result, Role, ROLE_STORAGE_KEY};
use std::sync::Arc;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};
use tokio::sync::broadcast::Receiver;
use uuid::Uuid;

/// Read the role slot, coercing missing or unknown values to guest
fn read_role(storage: &dyn KeyValueStorage) -> Role {
    match storage.get_item(ROLE_STORAGE_KEY) {
        Ok(value) => {
            let role = Role::from_stored(value.as_deref());
            if let Some(value) = value.filter(|v| v != role.as_str()) {
                tracing::warn!(value = %value, "Unrecognized stored role, using guest");
            }
            role
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read stored role, using guest");
            Role::Guest
        }
    }
}

/// Process-wide role slot, one instance per open page
///
/// Instances attached to the same storage and bus observe each other's
/// writes through [`RoleSubscription`]; an instance never sees its own.
#[derive(Debug, Clone)]
pub struct RoleStore {
    id: Uuid,
    storage: Arc<dyn KeyValueStorage>,
    bus: StorageBus,
}

impl RoleStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>, bus: StorageBus) -> Self {
        Self {
            id: Uuid::new_v4(),
            storage,
            bus,
        }
    }

    /// Store backed by fresh in-memory slots
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()), StorageBus::default())
    }

    /// Another instance over the same slots and bus
    pub fn attach(&self) -> Self {
        Self::new(self.storage.clone(), self.bus.clone())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Current role; guest when unset or invalid
    pub fn get_role(&self) -> Role {
        read_role(self.storage.as_ref())
    }

    /// Persist `role` and notify other instances. Last write wins.
    ///
    /// Writing the value already stored notifies nobody.
    pub fn set_role(&self, role: Role) -> Result<()> {
        let old_value = self.storage.get_item(ROLE_STORAGE_KEY).ok().flatten();
        self.storage.set_item(ROLE_STORAGE_KEY, role.as_str())?;

        if old_value.as_deref() == Some(role.as_str()) {
            tracing::trace!(role = %role, "Role unchanged");
            return Ok(());
        }

        tracing::debug!(role = %role, instance = %self.id, "Role persisted");

        self.bus.publish(StorageEvent {
            key: ROLE_STORAGE_KEY.to_string(),
            old_value,
            new_value: Some(role.as_str().to_string()),
            origin: self.id,
            at: chrono::Utc::now(),
        });
        Ok(())
    }

    /// Persist a role given by tag. Unknown tags are ignored and return `false`.
    pub fn set_role_str(&self, value: &str) -> Result<bool> {
        match Role::parse(value) {
            Some(role) => {
                self.set_role(role)?;
                Ok(true)
            }
            None => {
                tracing::debug!(value = %value, "Ignoring unknown role");
                Ok(false)
            }
        }
    }

    /// Watch for role changes made by other instances
    pub fn subscribe(&self) -> RoleSubscription {
        RoleSubscription {
            receiver: self.bus.subscribe(),
            own_id: self.id,
            storage: self.storage.clone(),
        }
    }
}

/// Stream of role changes from other instances
///
/// Each notification re-reads the slot, so a missed event only delays the
/// update until the next one (or the next explicit read).
#[derive(Debug)]
pub struct RoleSubscription {
    receiver: Receiver<StorageEvent>,
    own_id: Uuid,
    storage: Arc<dyn KeyValueStorage>,
}

impl RoleSubscription {
    fn is_relevant(&self, event: &StorageEvent) -> bool {
        event.key == ROLE_STORAGE_KEY && event.origin != self.own_id
    }

    fn current(&self) -> Role {
        read_role(self.storage.as_ref())
    }

    /// Next pending change, without waiting
    pub fn try_next(&mut self) -> Option<Role> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) if self.is_relevant(&event) => return Some(self.current()),
                Ok(_) => continue,
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "Role subscription lagged, re-reading");
                    return Some(self.current());
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return None,
            }
        }
    }

    /// Consume all pending changes, returning the latest role if any arrived
    pub fn drain(&mut self) -> Option<Role> {
        let mut latest = None;
        while let Some(role) = self.try_next() {
            latest = Some(role);
        }
        latest
    }

    /// Wait for the next change; `None` once every store instance is gone
    pub async fn changed(&mut self) -> Option<Role> {
        loop {
            match self.receiver.recv().await {
                Ok(event) if self.is_relevant(&event) => return Some(self.current()),
                Ok(_) => continue,
                Err(RecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "Role subscription lagged, re-reading");
                    return Some(self.current());
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::FileStorage;

    // ============== Get / Set Tests ==============

    #[test]
    fn test_default_role_is_guest() {
        let store = RoleStore::in_memory();
        assert_eq!(store.get_role(), Role::Guest);
    }

    #[test]
    fn test_set_and_get_role() {
        let store = RoleStore::in_memory();
        store.set_role(Role::Admin).unwrap();
        assert_eq!(store.get_role(), Role::Admin);
    }

    #[test]
    fn test_invalid_persisted_value_is_guest() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set_item(ROLE_STORAGE_KEY, "superadmin").unwrap();

        let store = RoleStore::new(storage, StorageBus::default());
        assert_eq!(store.get_role(), Role::Guest);
    }

    #[test]
    fn test_set_role_str_ignores_unknown() {
        let store = RoleStore::in_memory();
        store.set_role(Role::Editor).unwrap();

        assert!(!store.set_role_str("superadmin").unwrap());
        assert_eq!(store.get_role(), Role::Editor);

        assert!(store.set_role_str("customer").unwrap());
        assert_eq!(store.get_role(), Role::Customer);
    }

    #[test]
    fn test_last_write_wins() {
        let tab_a = RoleStore::in_memory();
        let tab_b = tab_a.attach();

        tab_a.set_role(Role::Admin).unwrap();
        tab_b.set_role(Role::Subscriber).unwrap();

        assert_eq!(tab_a.get_role(), Role::Subscriber);
        assert_eq!(tab_b.get_role(), Role::Subscriber);
    }

    #[test]
    fn test_role_survives_reload_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let store = RoleStore::new(Arc::new(FileStorage::new(&path)), StorageBus::default());
        store.set_role(Role::ApiUser).unwrap();

        let reloaded = RoleStore::new(Arc::new(FileStorage::new(&path)), StorageBus::default());
        assert_eq!(reloaded.get_role(), Role::ApiUser);
    }

    // ============== Notification Tests ==============

    #[test]
    fn test_other_instance_is_notified() {
        let tab_a = RoleStore::in_memory();
        let tab_b = tab_a.attach();
        let mut watcher = tab_b.subscribe();

        tab_a.set_role(Role::Architect).unwrap();

        assert_eq!(watcher.try_next(), Some(Role::Architect));
        assert_eq!(watcher.try_next(), None);
    }

    #[test]
    fn test_own_writes_are_not_notified() {
        let store = RoleStore::in_memory();
        let mut watcher = store.subscribe();

        store.set_role(Role::Admin).unwrap();
        assert_eq!(watcher.try_next(), None);
    }

    #[test]
    fn test_unchanged_role_publishes_nothing() {
        let tab_a = RoleStore::in_memory();
        let mut watcher = tab_a.attach().subscribe();

        tab_a.set_role(Role::Admin).unwrap();
        assert_eq!(watcher.try_next(), Some(Role::Admin));

        tab_a.set_role(Role::Admin).unwrap();
        assert_eq!(watcher.try_next(), None);
        assert_eq!(tab_a.get_role(), Role::Admin);
    }

    #[test]
    fn test_unknown_role_publishes_nothing() {
        let tab_a = RoleStore::in_memory();
        let mut watcher = tab_a.attach().subscribe();

        tab_a.set_role_str("root").unwrap();
        assert_eq!(watcher.try_next(), None);
    }

    #[test]
    fn test_drain_returns_latest() {
        let tab_a = RoleStore::in_memory();
        let mut watcher = tab_a.attach().subscribe();

        tab_a.set_role(Role::Admin).unwrap();
        tab_a.set_role(Role::Editor).unwrap();
        tab_a.set_role(Role::Customer).unwrap();

        assert_eq!(watcher.drain(), Some(Role::Customer));
        assert_eq!(watcher.drain(), None);
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let tab_a = RoleStore::in_memory();
        let tab_b = tab_a.attach();
        let mut watcher = tab_b.subscribe();

        tab_a.bus.publish(StorageEvent {
            key: "theme".to_string(),
            old_value: None,
            new_value: Some("dark".to_string()),
            origin: tab_a.id(),
            at: chrono::Utc::now(),
        });

        assert_eq!(watcher.try_next(), None);
    }

    #[test]
    fn test_lagged_subscriber_rereads_current_role() {
        let tab_a = RoleStore::new(Arc::new(MemoryStorage::new()), StorageBus::new(2));
        let mut watcher = tab_a.attach().subscribe();

        for role in Role::ELEVATED {
            tab_a.set_role(role).unwrap();
        }

        assert_eq!(watcher.try_next(), Some(Role::ApiUser));
    }

    #[tokio::test]
    async fn test_changed_waits_for_other_instance() {
        let tab_a = RoleStore::in_memory();
        let tab_b = tab_a.attach();
        let mut watcher = tab_b.subscribe();

        let writer = tokio::spawn(async move {
            tab_a.set_role(Role::Subscriber).unwrap();
        });

        let role = watcher.changed().await;
        writer.await.unwrap();
        assert_eq!(role, Some(Role::Subscriber));
    }

    #[tokio::test]
    async fn test_changed_ends_when_stores_dropped() {
        let store = RoleStore::in_memory();
        let mut watcher = store.subscribe();
        drop(store);

        assert_eq!(watcher.changed().await, None);
    }
}
