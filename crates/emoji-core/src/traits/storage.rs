//! Blob storage port
//!
//! The gallery persists one JSON blob under a fixed key. Storage is
//! synchronous: the gallery store never suspends.

use crate::error::DomainError;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, DomainError>;

// ============================================================================
// State Storage
// ============================================================================

pub trait StateStorage: Send + Sync {
    /// Read the blob stored under `key`, if any
    fn read(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace the blob stored under `key`
    fn write(&self, key: &str, blob: &str) -> StorageResult<()>;

    /// Delete the blob stored under `key`; returns whether one existed
    fn remove(&self, key: &str) -> StorageResult<bool>;
}
