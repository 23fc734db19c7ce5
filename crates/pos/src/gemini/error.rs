//! Error types for the Gemini API client.

use thiserror::Error;

/// Errors that can occur when requesting a generated description.
///
/// These stay inside the adapter: the generator collapses them into its
/// fixed failure string and the observable last-error slot, so callers never
/// see a `Result`.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Gemini API returned an error.
    #[error("API error ({status}): {message}")]
    Api {
        /// Machine-readable status from the API (e.g., `INVALID_ARGUMENT`).
        status: String,
        /// Error message.
        message: String,
    },

    /// Failed to parse the response body.
    #[error("parse error: {0}")]
    Parse(String),

    /// The response contained no generated text.
    #[error("empty response from model")]
    EmptyResponse,
}

/// API error envelope returned by Gemini.
#[derive(Debug, serde::Deserialize)]
pub struct ApiErrorResponse {
    /// Nested error details.
    pub error: ApiError,
}

/// Nested error details.
#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    /// Numeric error code (mirrors the HTTP status).
    pub code: i32,
    /// Error message.
    pub message: String,
    /// Machine-readable status (e.g., `INVALID_ARGUMENT`).
    pub status: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_gemini_error_display() {
        let err = GeminiError::Api {
            status: "INVALID_ARGUMENT".to_string(),
            message: "API key not valid".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API error (INVALID_ARGUMENT): API key not valid"
        );

        let err = GeminiError::EmptyResponse;
        assert_eq!(err.to_string(), "empty response from model");
    }

    #[test]
    fn test_api_error_deserialization() {
        let json = r#"{
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "status": "INVALID_ARGUMENT"
            }
        }"#;

        let response: ApiErrorResponse = serde_json::from_str(json).expect("deserialize");
        assert_eq!(response.error.code, 400);
        assert_eq!(response.error.status, "INVALID_ARGUMENT");
        assert!(response.error.message.contains("API key not valid"));
    }
}
