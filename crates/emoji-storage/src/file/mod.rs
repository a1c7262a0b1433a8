//! File-backed blob storage.
//!
//! Each key maps to `<dir>/<key>.json`. Writes go to a sibling `.tmp` file
//! and are renamed into place, so a crash mid-write leaves the previous blob
//! intact.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use emoji_core::{DomainError, StateStorage, StorageResult};

/// Storage that keeps each blob in its own JSON file
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open (and create if needed) a storage directory
    pub fn new(dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|err| io_error("create", &dir, &err))?;

        tracing::debug!(dir = %dir.display(), "File storage opened");

        Ok(Self { dir })
    }

    /// Directory holding the blobs
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the blob for a key
    ///
    /// Keys are restricted to ASCII alphanumerics, `-`, `_` and `.` and may
    /// not start with a dot, so a key can never escape the directory.
    pub fn blob_path(&self, key: &str) -> StorageResult<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(DomainError::StorageError(format!(
                "invalid storage key: {key:?}"
            )));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

fn io_error(action: &str, path: &Path, err: &io::Error) -> DomainError {
    DomainError::StorageError(format!("failed to {action} {}: {err}", path.display()))
}

impl StateStorage for FileStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.blob_path(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(match String::from_utf8(bytes) {
                Ok(blob) => blob,
                Err(err) => {
                    // Left for the schema decoder to repair or discard
                    tracing::warn!(
                        path = %path.display(),
                        valid_up_to = err.utf8_error().valid_up_to(),
                        "Blob is not valid UTF-8"
                    );
                    String::from_utf8_lossy(err.as_bytes()).into_owned()
                }
            })),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(io_error("read", &path, &err)),
        }
    }

    fn write(&self, key: &str, blob: &str) -> StorageResult<()> {
        let final_path = self.blob_path(key)?;
        let tmp_path = self.dir.join(format!("{key}.json.tmp"));

        fs::write(&tmp_path, blob).map_err(|err| io_error("write", &tmp_path, &err))?;

        match fs::rename(&tmp_path, &final_path) {
            Ok(()) => Ok(()),
            Err(rename_err) => {
                // Some platforms refuse to rename over an existing file
                if final_path.exists() {
                    fs::remove_file(&final_path)
                        .and_then(|()| fs::rename(&tmp_path, &final_path))
                        .map_err(|err| io_error("replace", &final_path, &err))
                } else {
                    let _ = fs::remove_file(&tmp_path);
                    Err(io_error("rename", &tmp_path, &rename_err))
                }
            }
        }
    }

    fn remove(&self, key: &str) -> StorageResult<bool> {
        let path = self.blob_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(io_error("remove", &path, &err)),
        }
    }
}
