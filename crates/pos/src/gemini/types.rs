//! Types for the Gemini `generateContent` API.
//!
//! These match the REST request/response shapes for plain-text generation;
//! the adapter only ever sends a single user turn and reads back the first
//! candidate's text.

use serde::{Deserialize, Serialize};

/// Request body for `generateContent`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    /// Conversation contents; a single user turn for this adapter.
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Build a single-turn request from a prompt string.
    #[must_use]
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.into(),
                }],
            }],
        }
    }
}

/// A content block: an ordered list of parts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    /// Ordered message parts.
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// One part of a content block. Only text parts are used here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    /// Plain text payload.
    pub text: String,
}

/// Response from `generateContent` (non-streaming).
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    /// Ranked candidate completions; the first one is used.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One candidate completion.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    /// Generated content. Defaults to empty when the model returns a
    /// candidate without content (e.g., a safety block).
    #[serde(default)]
    pub content: Content,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if it has any.
    #[must_use]
    pub fn first_text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let text: String = candidate
            .content
            .parts
            .iter()
            .map(|part| part.text.as_str())
            .collect();

        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}
