//! Local key/value storage using redb.
//!
//! Desktop stand-in for browser local storage. One [`LocalStorage`] wraps a
//! single database file; every open window gets its own [`StorageArea`]
//! over it. Mutations made through an area are broadcast as
//! [`StorageEvent`]s to all *other* areas, matching the rule that a storage
//! event never fires in the context that made the change.
//!
//! ```text
//! ┌──────────── LocalStorage (storage.redb) ────────────┐
//! │                                                     │
//! │   StorageArea #1 ──set_item──► table ──► broadcast  │
//! │   StorageArea #2 ◄──────── StorageEvent ◄─────┘     │
//! │   StorageArea #3 ◄──────── StorageEvent ◄─────┘     │
//! └─────────────────────────────────────────────────────┘
//! ```

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, ReadableTable, TableDefinition};
use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::error::LeviathanResult;

/// Key holding the JSON session marker
pub const SESSION_KEY: &str = "demo-user";

/// Key holding the UI language code
pub const LANGUAGE_KEY: &str = "leviathan-language";

/// Table for all local storage entries (key: item key, value: item value)
const LOCAL_STORAGE_TABLE: TableDefinition<&str, &str> = TableDefinition::new("local_storage");

/// Default capacity for the storage event broadcast channel
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Identifies the window (browsing context) an area belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextId(u64);

impl std::fmt::Display for ContextId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ctx-{}", self.0)
    }
}

/// A change made to local storage by some context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageEvent {
    /// Key that changed; `None` when the whole store was cleared
    pub key: Option<String>,
    pub old_value: Option<String>,
    /// New value; `None` when the key was removed
    pub new_value: Option<String>,
    /// Context that made the change
    pub origin: ContextId,
}

/// Persistent local storage shared by every window of one application.
#[derive(Clone)]
pub struct LocalStorage {
    db: Arc<RwLock<Database>>,
    events: broadcast::Sender<StorageEvent>,
    next_context: Arc<AtomicU64>,
}

impl LocalStorage {
    /// Open (or create) local storage at the given database path.
    ///
    /// Creates the parent directory and the storage table when missing.
    pub fn open(path: impl AsRef<Path>) -> LeviathanResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(LOCAL_STORAGE_TABLE)?;
        }
        write_txn.commit()?;

        debug!(?path, "Opened local storage");

        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
            events,
            next_context: Arc::new(AtomicU64::new(1)),
        })
    }

    /// Create a storage area for a newly opened window.
    pub fn area(&self) -> StorageArea {
        let id = ContextId(self.next_context.fetch_add(1, Ordering::Relaxed));
        debug!(context = %id, "Created storage area");
        StorageArea {
            storage: self.clone(),
            context: id,
        }
    }

    fn read(&self, key: &str) -> LeviathanResult<Option<String>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(LOCAL_STORAGE_TABLE)?;
        Ok(table.get(key)?.map(|v| v.value().to_string()))
    }

    /// Insert or remove a key, returning the previous value.
    fn write(&self, key: &str, value: Option<&str>) -> LeviathanResult<Option<String>> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        let old = {
            let mut table = write_txn.open_table(LOCAL_STORAGE_TABLE)?;
            match value {
                Some(value) => table.insert(key, value)?.map(|v| v.value().to_string()),
                None => table.remove(key)?.map(|v| v.value().to_string()),
            }
        };
        write_txn.commit()?;
        Ok(old)
    }

    /// Remove every key, returning how many were removed.
    fn clear_all(&self) -> LeviathanResult<usize> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        let removed = {
            let mut table = write_txn.open_table(LOCAL_STORAGE_TABLE)?;
            let mut keys = Vec::new();
            for entry in table.iter()? {
                let (k, _) = entry?;
                keys.push(k.value().to_string());
            }
            for key in &keys {
                table.remove(key.as_str())?;
            }
            keys.len()
        };
        write_txn.commit()?;
        Ok(removed)
    }

    fn publish(&self, event: StorageEvent) {
        // No receivers just means no other window is listening
        let _ = self.events.send(event);
    }
}

/// One window's view of [`LocalStorage`].
#[derive(Clone)]
pub struct StorageArea {
    storage: LocalStorage,
    context: ContextId,
}

impl StorageArea {
    /// The context this area belongs to
    pub fn context(&self) -> ContextId {
        self.context
    }

    /// The storage this area is a view of
    pub fn storage(&self) -> &LocalStorage {
        &self.storage
    }

    /// Read a value by key
    pub fn get_item(&self, key: &str) -> LeviathanResult<Option<String>> {
        self.storage.read(key)
    }

    /// Store a value, notifying other contexts when it actually changed.
    pub fn set_item(&self, key: &str, value: &str) -> LeviathanResult<()> {
        let old = self.storage.write(key, Some(value))?;
        if old.as_deref() != Some(value) {
            self.storage.publish(StorageEvent {
                key: Some(key.to_string()),
                old_value: old,
                new_value: Some(value.to_string()),
                origin: self.context,
            });
        }
        Ok(())
    }

    /// Remove a key. Removing a missing key is a no-op.
    pub fn remove_item(&self, key: &str) -> LeviathanResult<()> {
        if let Some(old) = self.storage.write(key, None)? {
            self.storage.publish(StorageEvent {
                key: Some(key.to_string()),
                old_value: Some(old),
                new_value: None,
                origin: self.context,
            });
        }
        Ok(())
    }

    /// Remove every key.
    pub fn clear(&self) -> LeviathanResult<()> {
        if self.storage.clear_all()? > 0 {
            self.storage.publish(StorageEvent {
                key: None,
                old_value: None,
                new_value: None,
                origin: self.context,
            });
        }
        Ok(())
    }

    /// Subscribe to changes made by other contexts.
    pub fn subscribe(&self) -> StorageEvents {
        StorageEvents {
            rx: self.storage.events.subscribe(),
            context: self.context,
        }
    }
}

/// Stream of storage events originating in other contexts.
pub struct StorageEvents {
    rx: broadcast::Receiver<StorageEvent>,
    context: ContextId,
}

impl StorageEvents {
    /// Wait for the next foreign event.
    ///
    /// Returns `None` once every [`LocalStorage`] handle has been dropped.
    pub async fn recv(&mut self) -> Option<StorageEvent> {
        loop {
            match self.rx.recv().await {
                Ok(event) if event.origin == self.context => continue,
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(context = %self.context, skipped, "Storage event listener lagged");
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    /// Take the next already-delivered foreign event, if any.
    pub fn try_recv(&mut self) -> Option<StorageEvent> {
        loop {
            match self.rx.try_recv() {
                Ok(event) if event.origin == self.context => continue,
                Ok(event) => return Some(event),
                Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                    warn!(context = %self.context, skipped, "Storage event listener lagged");
                }
                Err(_) => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn open_temp() -> (tempfile::TempDir, LocalStorage) {
        let temp_dir = tempdir().unwrap();
        let storage = LocalStorage::open(temp_dir.path().join("storage.redb")).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_set_get_remove() {
        let (_dir, storage) = open_temp();
        let area = storage.area();

        assert_eq!(area.get_item("k").unwrap(), None);
        area.set_item("k", "v").unwrap();
        assert_eq!(area.get_item("k").unwrap().as_deref(), Some("v"));
        area.remove_item("k").unwrap();
        assert_eq!(area.get_item("k").unwrap(), None);
    }

    #[test]
    fn test_areas_share_data() {
        let (_dir, storage) = open_temp();
        let a = storage.area();
        let b = storage.area();
        assert_ne!(a.context(), b.context());

        a.set_item(LANGUAGE_KEY, "hi").unwrap();
        assert_eq!(b.get_item(LANGUAGE_KEY).unwrap().as_deref(), Some("hi"));
    }

    #[test]
    fn test_events_skip_own_context() {
        let (_dir, storage) = open_temp();
        let a = storage.area();
        let b = storage.area();
        let mut a_events = a.subscribe();
        let mut b_events = b.subscribe();

        a.set_item("k", "v1").unwrap();

        assert_eq!(a_events.try_recv(), None);
        let event = b_events.try_recv().unwrap();
        assert_eq!(event.key.as_deref(), Some("k"));
        assert_eq!(event.old_value, None);
        assert_eq!(event.new_value.as_deref(), Some("v1"));
        assert_eq!(event.origin, a.context());
    }

    #[test]
    fn test_unchanged_writes_publish_nothing() {
        let (_dir, storage) = open_temp();
        let a = storage.area();
        let b = storage.area();
        a.set_item("k", "v").unwrap();

        let mut b_events = b.subscribe();
        a.set_item("k", "v").unwrap();
        a.remove_item("missing").unwrap();
        assert_eq!(b_events.try_recv(), None);
    }

    #[test]
    fn test_clear_publishes_keyless_event() {
        let (_dir, storage) = open_temp();
        let a = storage.area();
        let b = storage.area();
        a.set_item("x", "1").unwrap();
        a.set_item("y", "2").unwrap();

        let mut b_events = b.subscribe();
        a.clear().unwrap();

        assert_eq!(b.get_item("x").unwrap(), None);
        assert_eq!(b.get_item("y").unwrap(), None);
        let event = b_events.try_recv().unwrap();
        assert_eq!(event.key, None);
    }

    #[test]
    fn test_persists_across_reopen() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("storage.redb");
        {
            let storage = LocalStorage::open(&path).unwrap();
            storage.area().set_item("k", "kept").unwrap();
        }
        let storage = LocalStorage::open(&path).unwrap();
        assert_eq!(storage.area().get_item("k").unwrap().as_deref(), Some("kept"));
    }

    #[tokio::test]
    async fn test_async_recv_delivers_foreign_event() {
        let (_dir, storage) = open_temp();
        let a = storage.area();
        let b = storage.area();
        let mut b_events = b.subscribe();

        a.set_item("k", "v").unwrap();
        let event = b_events.recv().await.unwrap();
        assert_eq!(event.new_value.as_deref(), Some("v"));
    }
}
