//! Best-effort persistence for the cart and session snapshots.
//!
//! The domain store mirrors two pieces of state through this adapter after
//! every relevant mutation. Storage failures must never surface to commands,
//! so [`Persistence`] catches every backend and serialization error, logs
//! it, and degrades to a safe default instead: no-op on save/remove, `None`
//! on load.

mod backend;

pub use backend::{FileBackend, MemoryBackend, StorageBackend, StorageError};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

/// Storage keys used by the domain store.
pub mod keys {
    /// Key for the persisted cart snapshot.
    pub const CART: &str = "poliMarketCart";

    /// Key for the persisted session (password-free user projection). The
    /// key is removed, not saved empty, when the session is cleared.
    pub const SESSION: &str = "poliMarketUser";
}

/// Best-effort JSON persistence over a [`StorageBackend`].
pub struct Persistence {
    backend: Box<dyn StorageBackend>,
}

impl Persistence {
    /// Wrap a backend.
    #[must_use]
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Serialize `value` and store it under `key`.
    ///
    /// Failures are logged and swallowed; the caller's in-memory state stays
    /// authoritative either way.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) {
        let bytes = match serde_json::to_vec(value) {
            Ok(bytes) => bytes,
            Err(error) => {
                warn!(key, %error, "failed to serialize state for persistence");
                return;
            }
        };

        if let Err(error) = self.backend.set(key, &bytes) {
            warn!(key, %error, "failed to persist state");
        }
    }

    /// Load and deserialize the value under `key`.
    ///
    /// Missing keys, unreadable storage, and malformed bytes all yield
    /// `None`; malformed content is logged before being ignored.
    #[must_use]
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let bytes = match self.backend.get(key) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return None,
            Err(error) => {
                warn!(key, %error, "failed to read persisted state");
                return None;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(error) => {
                warn!(key, %error, "persisted state is malformed, treating it as absent");
                None
            }
        }
    }

    /// Delete the value under `key`.
    ///
    /// Failures are logged and swallowed.
    pub fn remove(&self, key: &str) {
        if let Err(error) = self.backend.remove(key) {
            warn!(key, %error, "failed to remove persisted state");
        }
    }
}

impl std::fmt::Debug for Persistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Persistence").finish_non_exhaustive()
    }
}
