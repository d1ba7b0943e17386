//! Key/value stores used for session persistence

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::database::Database;
use crate::Result;

/// Synchronous string store with per-key atomicity.
///
/// Writes to different keys are independent; there is no multi-key
/// transaction.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// SQLite-backed store scoped to one origin
#[derive(Clone)]
pub struct LocalStorage {
    db: Database,
    origin: String,
}

impl LocalStorage {
    pub fn new(db: Database, origin: impl Into<String>) -> Self {
        Self {
            db,
            origin: origin.into(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn keys(&self) -> Result<Vec<String>> {
        self.db.keys(&self.origin)
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.db.get_item(&self.origin, key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.db.set_item(&self.origin, key, value)?;
        tracing::debug!(origin = %self.origin, key = %key, "Stored item");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.db.remove_item(&self.origin, key)?;
        tracing::debug!(origin = %self.origin, key = %key, "Removed item");
        Ok(())
    }
}

/// In-process store, lost when the last clone is dropped
#[derive(Clone, Default)]
pub struct MemoryStorage {
    items: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.items.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.items.write().remove(key);
        Ok(())
    }
}
