//! Gemini integration for AI-generated product descriptions.
//!
//! One outbound call per request: no retry, no streaming, no backoff. A
//! request resolves to generated text or to one of two fixed strings
//! ([`UNAVAILABLE_MESSAGE`], [`FAILURE_MESSAGE`]); the failure detail is
//! recorded in the generator's observable last-error slot instead of being
//! returned. A missing `GEMINI_API_KEY` disables the feature for the whole
//! process without affecting anything else.

mod client;
mod error;
mod types;

pub use client::{DescriptionGenerator, FAILURE_MESSAGE, UNAVAILABLE_MESSAGE};
pub use error::GeminiError;
