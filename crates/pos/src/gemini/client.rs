//! Gemini API client for product descriptions.
//!
//! Wraps a single `generateContent` call per request. The adapter never
//! returns an error: callers get either generated text or one of two fixed
//! strings, and the failure detail lands in an observable last-error slot.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use tracing::{instrument, warn};

use crate::config::GeminiConfig;

use super::error::{ApiErrorResponse, GeminiError};
use super::types::{GenerateContentRequest, GenerateContentResponse};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Fixed reply when the generator was never configured.
pub const UNAVAILABLE_MESSAGE: &str = "AI service is not available.";

/// Fixed reply when a configured generation attempt fails.
pub const FAILURE_MESSAGE: &str = "Failed to generate description.";

/// Error recorded once at startup when no credential is configured.
const NOT_CONFIGURED_ERROR: &str = "API key is not configured. AI features are disabled.";

/// Error recorded when a request fails; the user can simply re-trigger.
const GENERATION_ERROR: &str = "Could not generate AI description. Please try again later.";

/// Product-description generator backed by the Gemini API.
///
/// Cheaply cloneable. When constructed without configuration the generator
/// is permanently disabled: every call resolves to [`UNAVAILABLE_MESSAGE`]
/// without touching the network, and the configuration error sits in the
/// last-error slot from startup on.
#[derive(Clone)]
pub struct DescriptionGenerator {
    inner: Arc<GeneratorInner>,
}

struct GeneratorInner {
    /// `None` when no credential was configured at startup.
    api: Option<GeminiApi>,
    /// Last user-facing error, observable by the UI layer.
    last_error: Mutex<Option<String>>,
}

struct GeminiApi {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl DescriptionGenerator {
    /// Build a generator from optional configuration.
    ///
    /// With `None` (the credential was absent at process start) the
    /// generator starts in its disabled mode and the configuration error is
    /// recorded once.
    #[must_use]
    pub fn from_config(config: Option<&GeminiConfig>) -> Self {
        let Some(config) = config else {
            warn!("GEMINI_API_KEY is not set, product descriptions are disabled");
            return Self::disabled();
        };

        match GeminiApi::build(config) {
            Ok(api) => Self {
                inner: Arc::new(GeneratorInner {
                    api: Some(api),
                    last_error: Mutex::new(None),
                }),
            },
            Err(error) => {
                warn!(%error, "failed to build Gemini client, product descriptions are disabled");
                Self::disabled()
            }
        }
    }

    fn disabled() -> Self {
        Self {
            inner: Arc::new(GeneratorInner {
                api: None,
                last_error: Mutex::new(Some(NOT_CONFIGURED_ERROR.to_owned())),
            }),
        }
    }

    /// Whether a credential was configured at startup.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.inner.api.is_some()
    }

    /// The last user-facing error, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<String> {
        self.lock_error().clone()
    }

    /// Generate a short sales description for `product_name`.
    ///
    /// Exactly one request is made per call: no retry, no backoff, no
    /// timeout override. On failure the last-error slot is set and
    /// [`FAILURE_MESSAGE`] is returned; on a disabled generator
    /// [`UNAVAILABLE_MESSAGE`] is returned without any network I/O. This
    /// method never returns an error to its caller.
    #[instrument(skip(self))]
    pub async fn generate(&self, product_name: &str) -> String {
        let Some(api) = &self.inner.api else {
            return UNAVAILABLE_MESSAGE.to_owned();
        };

        *self.lock_error() = None;

        match api.generate(product_name).await {
            Ok(text) => text,
            Err(error) => {
                warn!(%error, product_name, "description generation failed");
                *self.lock_error() = Some(GENERATION_ERROR.to_owned());
                FAILURE_MESSAGE.to_owned()
            }
        }
    }

    fn lock_error(&self) -> MutexGuard<'_, Option<String>> {
        self.inner
            .last_error
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Test-only constructor pointing a configured generator at an
    /// arbitrary base URL.
    #[cfg(test)]
    fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(GeneratorInner {
                api: Some(GeminiApi {
                    client: reqwest::Client::new(),
                    base_url: base_url.into(),
                    model: "gemini-2.5-flash".to_owned(),
                }),
                last_error: Mutex::new(None),
            }),
        }
    }
}

impl GeminiApi {
    fn build(config: &GeminiConfig) -> Result<Self, GeminiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut api_key = HeaderValue::from_str(config.api_key.expose_secret())
            .map_err(|e| GeminiError::Parse(format!("API key is not a valid header value: {e}")))?;
        api_key.set_sensitive(true);
        headers.insert("x-goog-api-key", api_key);

        let client = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: GEMINI_API_BASE.to_owned(),
            model: config.model.clone(),
        })
    }

    /// Issue the single `generateContent` request.
    async fn generate(&self, product_name: &str) -> Result<String, GeminiError> {
        let request = GenerateContentRequest::from_prompt(prompt_for(product_name));
        let url = format!("{}/{}:generateContent", self.base_url, self.model);

        let response = self.client.post(&url).json(&request).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(parse_error(status, &body));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| GeminiError::Parse(format!("failed to parse response: {e}")))?;

        parsed.first_text().ok_or(GeminiError::EmptyResponse)
    }
}

/// Fixed prompt template, parameterized only by the product name.
fn prompt_for(product_name: &str) -> String {
    format!(
        "Generate a short, compelling sales description for a product called \
         '{product_name}'. Focus on its key benefits for a customer in a retail \
         store. Keep it under 50 words and use a friendly, inviting tone."
    )
}

/// Map a non-success response body to a [`GeminiError`].
fn parse_error(status: reqwest::StatusCode, body: &str) -> GeminiError {
    serde_json::from_str::<ApiErrorResponse>(body).map_or_else(
        |_| GeminiError::Api {
            status: status.to_string(),
            message: body.to_owned(),
        },
        |api_error| GeminiError::Api {
            status: api_error.error.status,
            message: api_error.error.message,
        },
    )
}
