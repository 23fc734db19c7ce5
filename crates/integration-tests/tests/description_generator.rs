//! The description generator flow through the store handshake.
//!
//! These tests run without a configured credential, the way the app starts
//! when `GEMINI_API_KEY` is absent: the generator is permanently disabled
//! and must resolve every request to its fixed unavailable string without
//! attempting network I/O.

#![allow(clippy::unwrap_used)]

use polimarket_core::ProductId;
use polimarket_integration_tests::memory_store;
use polimarket_pos::gemini::{DescriptionGenerator, UNAVAILABLE_MESSAGE};

#[tokio::test]
async fn test_disabled_generator_through_the_store_handshake() {
    let mut store = memory_store();
    let generator = DescriptionGenerator::from_config(None);

    assert!(store.open_product(&ProductId::new("p1")));
    let product_name = store.begin_description_generation().unwrap();
    assert!(store.ai().generating);

    let description = generator.generate(&product_name).await;
    store.finish_description_generation(description);

    assert!(!store.ai().generating);
    assert_eq!(store.ai().description, UNAVAILABLE_MESSAGE);
    assert!(generator.last_error().is_some());
}

#[tokio::test]
async fn test_disabled_generator_handles_any_input() {
    let generator = DescriptionGenerator::from_config(None);

    for name in ["", "Café Colombiano", "名前", "a very long product name"] {
        assert_eq!(generator.generate(name).await, UNAVAILABLE_MESSAGE);
    }
}

#[tokio::test]
async fn test_second_trigger_is_dropped_while_one_is_pending() {
    let mut store = memory_store();
    let generator = DescriptionGenerator::from_config(None);

    store.open_product(&ProductId::new("p6"));
    let first = store.begin_description_generation().unwrap();

    // A second trigger while the first is in flight is ignored.
    assert!(store.begin_description_generation().is_none());

    let description = generator.generate(&first).await;
    store.finish_description_generation(description);

    // Once finished, a new generation may start.
    assert!(store.begin_description_generation().is_some());
}
