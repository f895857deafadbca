//! Plain text output: links as `text (href)`
//!
//! Chosen for `.txt` targets, which is what `extract --save` writes by default.

use crate::error::FormatError;
use crate::format::Format;
use podscribe::LoadedTranscript;

pub struct TextFormat;

impl Format for TextFormat {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Plain text transcript"
    }

    fn file_extensions(&self) -> &[&str] {
        &["txt"]
    }

    fn serialize(&self, transcript: &LoadedTranscript) -> Result<String, FormatError> {
        Ok(transcript.text.clone())
    }
}
