//! StorageWatcher - Forwards writes to a storage file made by other processes
//!
//! Each process has its own [`StorageBus`], so a role written by another
//! `FileStorage` user is invisible to local subscribers until something
//! republishes it. The watcher observes the file's directory with notify,
//! diffs the slots against its last snapshot and publishes the differences
//! under its own origin id.

use crate::storage::{FileStorage, StorageBus, StorageEvent};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use shared::{NavError, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::sync::broadcast::error::TryRecvError;
use tokio::sync::broadcast::Receiver;
use uuid::Uuid;

fn watch_error(e: notify::Error) -> NavError {
    NavError::Storage(format!("failed to watch storage file: {}", e))
}

/// A slot whose value differs between two snapshots
#[derive(Debug, Clone, PartialEq, Eq)]
struct SlotChange {
    key: String,
    old_value: Option<String>,
    new_value: Option<String>,
}

fn diff_slots(old: &BTreeMap<String, String>, new: &BTreeMap<String, String>) -> Vec<SlotChange> {
    let keys: BTreeSet<&String> = old.keys().chain(new.keys()).collect();
    keys.into_iter()
        .filter_map(|key| {
            let before = old.get(key);
            let after = new.get(key);
            (before != after).then(|| SlotChange {
                key: key.clone(),
                old_value: before.cloned(),
                new_value: after.cloned(),
            })
        })
        .collect()
}

/// Whether a notify event concerns the storage file
fn touches(event: &Event, file_name: &OsStr) -> bool {
    match event.kind {
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) => {}
        _ => return false,
    }
    event.paths.iter().any(|p| p.file_name() == Some(file_name))
}

/// Event handler state, owned by the notify thread
struct Forwarder {
    id: Uuid,
    storage: FileStorage,
    file_name: OsString,
    snapshot: BTreeMap<String, String>,
    /// Writes already announced on the bus by stores of this process
    local: Receiver<StorageEvent>,
    bus: StorageBus,
}

impl Forwarder {
    fn new(path: &Path, bus: StorageBus) -> Result<Self> {
        let file_name = path
            .file_name()
            .ok_or_else(|| NavError::Storage(format!("not a file path: {}", path.display())))?
            .to_os_string();
        let local = bus.subscribe();
        let storage = FileStorage::new(path);
        let snapshot = storage.read_slots()?;

        Ok(Self {
            id: Uuid::new_v4(),
            storage,
            file_name,
            snapshot,
            local,
            bus,
        })
    }

    fn absorb_local(&mut self) {
        loop {
            match self.local.try_recv() {
                Ok(event) if event.origin != self.id => match event.new_value {
                    Some(value) => {
                        self.snapshot.insert(event.key, value);
                    }
                    None => {
                        self.snapshot.remove(&event.key);
                    }
                },
                Ok(_) | Err(TryRecvError::Lagged(_)) => continue,
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
    }

    fn handle(&mut self, result: notify::Result<Event>) {
        let event = match result {
            Ok(event) => event,
            Err(e) => {
                tracing::error!(error = %e, "Storage watcher error");
                return;
            }
        };
        if !touches(&event, &self.file_name) {
            return;
        }

        self.absorb_local();
        let current = match self.storage.read_slots() {
            Ok(slots) => slots,
            Err(e) => {
                tracing::warn!(path = %self.storage.path().display(), error = %e, "Failed to re-read storage file");
                return;
            }
        };

        for change in diff_slots(&self.snapshot, &current) {
            tracing::debug!(key = %change.key, "Storage changed by another process");
            self.bus.publish(StorageEvent {
                key: change.key,
                old_value: change.old_value,
                new_value: change.new_value,
                origin: self.id,
                at: chrono::Utc::now(),
            });
        }
        self.snapshot = current;
    }
}

/// Watches a [`FileStorage`] file and republishes foreign writes on a bus
///
/// Dropping the watcher stops it.
pub struct StorageWatcher {
    path: PathBuf,
    _watcher: RecommendedWatcher,
}

impl StorageWatcher {
    pub fn start(path: impl Into<PathBuf>, bus: StorageBus) -> Result<Self> {
        let path = path.into();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir)?;

        let mut forwarder = Forwarder::new(&path, bus)?;
        let mut watcher = RecommendedWatcher::new(
            move |res| forwarder.handle(res),
            Config::default(),
        )
        .map_err(watch_error)?;
        watcher
            .watch(&dir, RecursiveMode::NonRecursive)
            .map_err(watch_error)?;

        tracing::info!(path = %path.display(), "Storage watcher started");
        Ok(Self {
            path,
            _watcher: watcher,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Debug for StorageWatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageWatcher")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}
