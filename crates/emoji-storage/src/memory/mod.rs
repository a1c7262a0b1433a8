//! In-memory blob storage.
//!
//! Clones share the same underlying map, so a second store built over a
//! clone sees exactly what the first one committed (a "reload").

use std::collections::HashMap;
use std::sync::Arc;

use emoji_core::{StateStorage, StorageResult};
use parking_lot::RwLock;

/// Process-local storage backed by a shared map
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    blobs: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create empty storage
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage pre-seeded with one blob
    #[must_use]
    pub fn with_blob(key: impl Into<String>, blob: impl Into<String>) -> Self {
        let storage = Self::new();
        storage.blobs.write().insert(key.into(), blob.into());
        storage
    }

    /// Number of stored blobs
    #[must_use]
    pub fn len(&self) -> usize {
        self.blobs.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blobs.read().is_empty()
    }
}

impl StateStorage for MemoryStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.blobs.read().get(key).cloned())
    }

    fn write(&self, key: &str, blob: &str) -> StorageResult<()> {
        self.blobs.write().insert(key.to_string(), blob.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<bool> {
        Ok(self.blobs.write().remove(key).is_some())
    }
}
