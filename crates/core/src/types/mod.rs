//! Core types for PoliMarket.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod role;
pub mod username;

pub use id::ProductId;
pub use price::Price;
pub use role::Role;
pub use username::{Username, UsernameError};
