//! Markdown output: links as `[text](href)`

use crate::error::FormatError;
use crate::format::Format;
use podscribe::LoadedTranscript;

pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Transcript with markdown links"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn serialize(&self, transcript: &LoadedTranscript) -> Result<String, FormatError> {
        Ok(transcript.markdown.clone())
    }
}
