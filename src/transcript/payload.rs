//! Extraction results

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why no transcript could be produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// The page has no transcript root
    #[error("Transcript not found on this page.")]
    NotFound,
    /// The root is there but holds no turns
    #[error("Transcript is empty.")]
    Empty,
}

/// A successfully extracted transcript, both renderings plus the resolved guest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transcript {
    pub markdown: String,
    pub text: String,
    pub guest_name: String,
}

/// The result bundle handed to callers.
///
/// Either `markdown` is non-empty or `error` is set, never both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptPayload {
    pub markdown: String,
    pub text: String,
    pub guest_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TranscriptPayload {
    pub fn failed(error: ExtractError) -> Self {
        Self {
            error: Some(error.to_string()),
            ..Self::default()
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

impl From<Transcript> for TranscriptPayload {
    fn from(transcript: Transcript) -> Self {
        Self {
            markdown: transcript.markdown,
            text: transcript.text,
            guest_name: transcript.guest_name,
            error: None,
        }
    }
}

impl From<Result<Transcript, ExtractError>> for TranscriptPayload {
    fn from(result: Result<Transcript, ExtractError>) -> Self {
        match result {
            Ok(transcript) => transcript.into(),
            Err(error) => Self::failed(error),
        }
    }
}
