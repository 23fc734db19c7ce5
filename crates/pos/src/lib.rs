//! PoliMarket point-of-sale library.
//!
//! This crate provides the point-of-sale functionality as a library,
//! allowing it to be tested and reused; the binary in `main.rs` is a thin
//! terminal binding over it.
//!
//! # Architecture
//!
//! - [`store`] - The domain store: catalog, cart, users, session, and the
//!   commands that mutate them
//! - [`storage`] - Best-effort key-value persistence for the cart and
//!   session snapshots
//! - [`gemini`] - One-shot Gemini client for AI product descriptions
//! - [`config`] - Environment configuration
//! - [`models`] - Domain objects shared by the modules above

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod gemini;
pub mod models;
pub mod storage;
pub mod store;
