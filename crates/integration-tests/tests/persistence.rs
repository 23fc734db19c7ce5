//! Restart and corruption behavior over a real file-backed store.
//!
//! These tests exercise the same wiring the binary uses: a `FileBackend`
//! under a data directory, a `Persistence` adapter over it, and a fresh
//! `PosStore` per process start.

#![allow(clippy::unwrap_used)]

use std::fs;

use polimarket_core::ProductId;
use polimarket_integration_tests::file_store;

// =============================================================================
// Restart Round-Trips
// =============================================================================

#[test]
fn test_cart_and_session_survive_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut store = file_store(dir.path());
        store.add_to_cart(&ProductId::new("p1"));
        store.add_to_cart(&ProductId::new("p1"));
        store.add_to_cart(&ProductId::new("p5"));
        assert!(store.login("kgonzales", "123"));
    }

    let store = file_store(dir.path());
    assert_eq!(store.cart_item_count(), 3);
    assert_eq!(store.cart().len(), 2);
    assert_eq!(store.session().unwrap().username.as_str(), "kgonzales");
}

#[test]
fn test_restored_cart_checks_out_against_fresh_catalog() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut store = file_store(dir.path());
        let id = ProductId::new("p2");
        store.add_to_cart(&id);
        store.update_quantity(&id, 2);
    }

    // The catalog is seeded per process; only the cart snapshot carries
    // over, so checkout settles the restored lines against fresh stock.
    let mut store = file_store(dir.path());
    store.checkout().unwrap();

    let product = store
        .catalog()
        .iter()
        .find(|p| p.id == ProductId::new("p2"))
        .unwrap();
    assert_eq!(product.stock, 22);
    assert!(store.cart().is_empty());
}

#[test]
fn test_logout_removes_the_session_file() {
    let dir = tempfile::tempdir().unwrap();
    let session_path = dir.path().join("poliMarketUser.json");

    {
        let mut store = file_store(dir.path());
        store.login("jleal", "123");
        assert!(session_path.exists());
        store.logout();
    }

    // Removed, not saved-empty.
    assert!(!session_path.exists());

    let store = file_store(dir.path());
    assert!(store.session().is_none());
}

// =============================================================================
// Corruption Handling
// =============================================================================

#[test]
fn test_corrupted_snapshots_load_as_safe_defaults() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("poliMarketCart.json"), b"{{{ definitely not json").unwrap();
    fs::write(dir.path().join("poliMarketUser.json"), b"\"wrong shape\"").unwrap();

    let store = file_store(dir.path());
    assert!(store.cart().is_empty());
    assert!(store.session().is_none());
}

#[test]
fn test_corrupted_cart_is_overwritten_by_the_next_mutation() {
    let dir = tempfile::tempdir().unwrap();
    let cart_path = dir.path().join("poliMarketCart.json");
    fs::write(&cart_path, b"corrupt").unwrap();

    {
        let mut store = file_store(dir.path());
        store.add_to_cart(&ProductId::new("p3"));
    }

    let store = file_store(dir.path());
    assert_eq!(store.cart_item_count(), 1);
}
