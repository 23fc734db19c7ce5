//! Application configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `POLIMARKET_DATA_DIR` - Directory for persisted state (default: ./polimarket-data)
//! - `GEMINI_API_KEY` - Gemini API key; when unset or blank, AI product
//!   descriptions are disabled and everything else keeps working
//! - `GEMINI_MODEL` - Text-generation model (default: gemini-2.5-flash)

use std::path::PathBuf;

use secrecy::SecretString;

/// Default model for product descriptions.
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct PosConfig {
    /// Directory where the cart and session snapshots are stored.
    pub data_dir: PathBuf,
    /// Gemini API configuration; `None` disables the description generator
    /// without affecting any other capability.
    pub gemini: Option<GeminiConfig>,
}

/// Gemini API configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct GeminiConfig {
    /// Gemini API key
    pub api_key: SecretString,
    /// Model ID (e.g., gemini-2.5-flash)
    pub model: String,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .finish()
    }
}

impl PosConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present. Every
    /// variable has a usable default or degrades a single feature, so
    /// loading cannot fail.
    #[must_use]
    pub fn from_env() -> Self {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self {
            data_dir: PathBuf::from(get_env_or_default(
                "POLIMARKET_DATA_DIR",
                "./polimarket-data",
            )),
            gemini: GeminiConfig::from_env(),
        }
    }
}

impl GeminiConfig {
    /// Read the Gemini configuration from the environment.
    ///
    /// Returns `None` when `GEMINI_API_KEY` is unset or blank, which
    /// permanently disables the description generator for this process.
    fn from_env() -> Option<Self> {
        let api_key = get_optional_env("GEMINI_API_KEY")?;
        if api_key.trim().is_empty() {
            return None;
        }

        Some(Self {
            api_key: SecretString::from(api_key),
            model: get_env_or_default("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
