//! Raw key-value byte storage.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use thiserror::Error;

/// Errors from the underlying byte store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] io::Error),

    /// Key contains characters the backend cannot represent.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),
}

/// Synchronous key-value byte store.
///
/// Implementations move bytes and report failures; the best-effort semantics
/// (log and degrade, never surface an error) live one layer up in
/// [`super::Persistence`].
pub trait StorageBackend: Send + Sync {
    /// Read the bytes stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read. A missing key is
    /// `Ok(None)`, not an error.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Store `bytes` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be written.
    fn set(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError>;

    /// Delete the value under `key`. Deleting a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing value cannot be deleted.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Backends can be shared; a shared backend is a backend.
impl<B: StorageBackend + ?Sized> StorageBackend for Arc<B> {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        (**self).set(key, bytes)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// One-file-per-key store under a data directory.
#[derive(Debug)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Open a file-backed store rooted at `dir`, creating the directory if
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Resolve the file path for `key`.
    ///
    /// Keys are fixed constants today; separators and dots are rejected
    /// anyway so a key can never name a path outside the data directory.
    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        if key.is_empty() || key.contains(['/', '\\', '.']) {
            return Err(StorageError::InvalidKey(key.to_owned()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn set(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::write(&path, bytes)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}

/// In-memory store used by tests and as an ephemeral mode.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    map: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryBackend {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>> {
        self.map.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        self.lock().insert(key.to_owned(), bytes.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_file_backend_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::open(dir.path()).unwrap();

        backend.set("poliMarketCart", b"[1,2,3]").unwrap();
        assert_eq!(
            backend.get("poliMarketCart").unwrap(),
            Some(b"[1,2,3]".to_vec())
        );
    }

    #[test]
    fn test_file_backend_get_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::open(dir.path()).unwrap();

        assert!(backend.get("poliMarketUser").unwrap().is_none());
    }

    #[test]
    fn test_file_backend_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::open(dir.path()).unwrap();

        backend.set("poliMarketUser", b"{}").unwrap();
        backend.remove("poliMarketUser").unwrap();
        backend.remove("poliMarketUser").unwrap();
        assert!(backend.get("poliMarketUser").unwrap().is_none());
    }

    #[test]
    fn test_file_backend_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::open(dir.path()).unwrap();

        for key in ["", "../escape", "a/b", "a\\b", "dotted.key"] {
            assert!(matches!(
                backend.set(key, b"x"),
                Err(StorageError::InvalidKey(_))
            ));
        }
    }

    #[test]
    fn test_memory_backend_roundtrip_and_remove() {
        let backend = MemoryBackend::new();

        backend.set("k", b"v").unwrap();
        assert_eq!(backend.get("k").unwrap(), Some(b"v".to_vec()));

        backend.remove("k").unwrap();
        assert!(backend.get("k").unwrap().is_none());
    }

    #[test]
    fn test_arc_backend_shares_state() {
        let backend = Arc::new(MemoryBackend::new());
        let clone = Arc::clone(&backend);

        clone.set("k", b"v").unwrap();
        assert_eq!(backend.get("k").unwrap(), Some(b"v".to_vec()));
    }
}
