//! PoliMarket Core - Shared types library.
//!
//! This crate provides common types used across all PoliMarket components:
//! - `pos` - The point-of-sale application (domain store, persistence, AI blurbs)
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, usernames, prices, and roles

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
