//! Integration tests for PoliMarket.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p polimarket-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `persistence` - restart and corruption behavior over a real file backend
//! - `command_sequences` - derived-view invariants under random command runs
//! - `description_generator` - the generator flow through the store handshake

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;

use polimarket_pos::storage::{FileBackend, MemoryBackend, Persistence};
use polimarket_pos::store::PosStore;

/// Build a store persisting into `dir`, the way the binary wires it up.
///
/// # Panics
///
/// Panics if the directory cannot be opened; tests pass tempdirs that can.
#[must_use]
pub fn file_store(dir: &Path) -> PosStore {
    let backend = FileBackend::open(dir).expect("open file backend");
    PosStore::new(Persistence::new(backend))
}

/// Build a store over throwaway in-memory persistence.
#[must_use]
pub fn memory_store() -> PosStore {
    PosStore::new(Persistence::new(MemoryBackend::new()))
}
